//! Decorative motion layer
//!
//! Scroll progress bar, one-shot reveal transitions, floating orbs, and the
//! CSS they rely on. Nothing here affects content or navigation: when a
//! browser API is missing the page renders without the effect.

pub mod orbs;
pub mod reveal;
pub mod scroll;
pub mod styles;

use leptos::prelude::*;

pub use orbs::FloatingOrbs;
pub use reveal::{Reveal, RevealState, stagger_delay};
pub use scroll::{ScrollMetrics, ScrollProgress};
pub use styles::MotionStyles;

/// Browser API failures in the motion layer
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MotionError {
    #[error("window is not available")]
    WindowNotAvailable,

    #[error("document is not available")]
    DocumentNotAvailable,

    #[error("failed to add event listener: {0}")]
    ListenerFailed(String),

    #[error("intersection observer unavailable: {0}")]
    ObserverUnavailable(String),
}

/// Value of the `data-motion` attribute on the page shell
///
/// Starts `"off"` and flips to `"on"` once mounted in a browser. Effects do
/// not run during server rendering, so exported HTML keeps `"off"`.
pub fn use_motion_flag() -> Signal<&'static str> {
    let mounted = RwSignal::new(false);
    Effect::new(move |_| mounted.set(true));
    Signal::derive(move || if mounted.get() { "on" } else { "off" })
}
