//! Scroll progress indicator
//!
//! A fixed bar along the top of the viewport whose horizontal scale follows
//! how far the document has been scrolled: 0 at the top, 1 at the bottom.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Window};

use super::MotionError;

/// Events after which the progress is recomputed
const SCROLL_EVENTS: [&str; 2] = ["scroll", "resize"];

/// Document scroll position and extent, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// Distance scrolled from the top
    pub scroll_top: f64,
    /// Full height of the document
    pub scroll_height: f64,
    /// Height of the visible viewport
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub const fn new(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> Self {
        Self {
            scroll_top,
            scroll_height,
            viewport_height,
        }
    }

    /// Fraction of the scrollable range already scrolled, in `[0, 1]`
    ///
    /// A document that fits in the viewport has no range and reports 0, as
    /// do non-finite inputs. Overscroll (negative or past the end) clamps.
    pub fn progress(&self) -> f64 {
        let range = self.scroll_height - self.viewport_height;
        if !range.is_finite() || !self.scroll_top.is_finite() || range <= 0.0 {
            return 0.0;
        }
        (self.scroll_top / range).clamp(0.0, 1.0)
    }
}

/// CSS transform for a bar at the given progress
pub fn progress_transform(progress: f64) -> String {
    let progress = if progress.is_finite() { progress.clamp(0.0, 1.0) } else { 0.0 };
    format!("transform: scaleX({progress:.4});")
}

/// Reads the current scroll metrics of the window's document
///
/// # Errors
///
/// Returns error if the document or its root element is unavailable, or
/// the scroll offset cannot be read.
pub fn read_metrics(window: &Window) -> Result<ScrollMetrics, MotionError> {
    let root = window
        .document()
        .and_then(|document| document.document_element())
        .ok_or(MotionError::DocumentNotAvailable)?;
    let scroll_top = window
        .scroll_y()
        .map_err(|e| MotionError::ListenerFailed(format!("{e:?}")))?;

    Ok(ScrollMetrics::new(
        scroll_top,
        f64::from(root.scroll_height()),
        f64::from(root.client_height()),
    ))
}

/// Calls `on_change` with fresh metrics now and after every scroll or resize
///
/// The listener is passive and stays registered for the page's lifetime.
///
/// # Errors
///
/// Returns error if the window is unavailable or a listener cannot be added.
pub fn watch_scroll<F>(on_change: F) -> Result<(), MotionError>
where
    F: Fn(ScrollMetrics) + 'static,
{
    let window = web_sys::window().ok_or(MotionError::WindowNotAvailable)?;

    on_change(read_metrics(&window)?);

    let listener_window = window.clone();
    let closure = Closure::<dyn FnMut()>::new(move || {
        if let Ok(metrics) = read_metrics(&listener_window) {
            on_change(metrics);
        }
    });

    let options = AddEventListenerOptions::new();
    options.set_passive(true);

    for event in SCROLL_EVENTS {
        window
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                closure.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|e| MotionError::ListenerFailed(format!("{event}: {e:?}")))?;
    }

    // Keep closure alive
    closure.forget();

    Ok(())
}

/// Fixed top bar tracking document scroll progress
#[component]
pub fn ScrollProgress() -> impl IntoView {
    let progress = RwSignal::new(0.0_f64);

    Effect::new(move |attached: Option<bool>| {
        if attached == Some(true) {
            return true;
        }
        match watch_scroll(move |metrics| progress.set(metrics.progress())) {
            Ok(()) => true,
            Err(e) => {
                web_sys::console::warn_1(&format!("Scroll progress disabled: {e}").into());
                false
            }
        }
    });

    view! {
        <div
            class="pointer-events-none fixed inset-x-0 top-0 z-50 h-1 origin-left bg-[var(--copper)]"
            role="progressbar"
            aria-label="Page scroll progress"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=move || format!("{:.0}", progress.get() * 100.0)
            style=move || progress_transform(progress.get())
        ></div>
    }
}
