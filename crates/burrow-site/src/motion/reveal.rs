//! Enter-on-visibility transitions
//!
//! Content wrapped in [`Reveal`] starts faded and slightly lowered, and eases
//! into place the first time it scrolls into view. The transition never
//! replays: once shown, the element stays shown and its observer is
//! disconnected.

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::MotionError;
use crate::utils::class_names;

/// Fraction of the element that must be visible to trigger
pub const REVEAL_THRESHOLD: f64 = 0.15;

/// Shrinks the viewport bottom so elements trigger slightly after entering
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -10% 0px";

/// Delay between consecutive items of a revealed list
pub const STAGGER_STEP_MS: u32 = 80;

/// Visibility of a revealed element
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealState {
    /// Not yet scrolled into view
    #[default]
    Hidden,
    /// Has been in view at least once
    Shown,
}

impl RevealState {
    /// Next state after an intersection observation
    ///
    /// `Shown` is terminal, so leaving the viewport does not hide the element
    /// again.
    #[must_use]
    pub const fn observe(self, intersecting: bool) -> Self {
        match (self, intersecting) {
            (Self::Shown, _) | (Self::Hidden, true) => Self::Shown,
            (Self::Hidden, false) => Self::Hidden,
        }
    }

    pub const fn is_shown(self) -> bool {
        matches!(self, Self::Shown)
    }

    /// Classes applied on top of the caller's
    pub const fn classes(self) -> &'static str {
        match self {
            Self::Hidden => "reveal",
            Self::Shown => "reveal reveal-shown",
        }
    }
}

/// Transition delay for the `index`-th item of a list
pub const fn stagger_delay(index: usize) -> u32 {
    let index = if index > u32::MAX as usize {
        u32::MAX
    } else {
        index as u32
    };
    index.saturating_mul(STAGGER_STEP_MS)
}

/// Inline style carrying the transition delay, empty when there is none
pub fn delay_style(delay_ms: u32) -> String {
    if delay_ms == 0 {
        String::new()
    } else {
        format!("transition-delay: {delay_ms}ms;")
    }
}

/// Observes `element` and moves `state` to shown on its first intersection
///
/// # Errors
///
/// Returns error if the browser cannot construct an `IntersectionObserver`.
pub fn observe_once(element: &Element, state: RwSignal<RevealState>) -> Result<(), MotionError> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let intersecting = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());

            let next = state.get_untracked().observe(intersecting);
            if next.is_shown() {
                observer.disconnect();
            }
            state.set(next);
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| MotionError::ObserverUnavailable(format!("{e:?}")))?;
    observer.observe(element);

    // The observer holds the only reference to the callback
    callback.forget();

    Ok(())
}

/// Wraps children in a one-shot enter-on-visibility transition
///
/// When the observer is unavailable the content is shown straight away.
#[component]
pub fn Reveal(
    #[prop(optional)] delay_ms: u32,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let state = RwSignal::new(RevealState::Hidden);

    Effect::new(move |_| {
        let Some(element) = node_ref.get() else {
            return;
        };
        if state.get_untracked().is_shown() {
            return;
        }
        if let Err(e) = observe_once(&element, state) {
            web_sys::console::warn_1(&format!("Reveal shown without transition: {e}").into());
            state.set(RevealState::Shown);
        }
    });

    view! {
        <div
            node_ref=node_ref
            class=move || class_names(&[class.as_str(), state.get().classes()])
            style=delay_style(delay_ms)
        >
            {children()}
        </div>
    }
}
