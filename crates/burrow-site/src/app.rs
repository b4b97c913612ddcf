//! Main application component
//!
//! The page shell: binds the theme palette to CSS custom properties, mounts
//! the decorative motion layer, and renders the home page.

use leptos::prelude::*;

use crate::clock::current_year;
use crate::models::THEME;
use crate::motion::{FloatingOrbs, MotionStyles, ScrollProgress, use_motion_flag};
use crate::pages::HomePage;

/// Root component
///
/// The copyright year is read from the clock once here, unless given.
#[component]
pub fn App(#[prop(optional)] year: Option<i32>) -> impl IntoView {
    let year = year.unwrap_or_else(current_year);
    let motion = use_motion_flag();

    view! {
        <MotionStyles />
        <div
            class="relative isolate min-h-screen overflow-x-clip bg-[var(--moss)] text-[var(--parchment)]"
            style=THEME.css_variables()
            data-motion=move || motion.get()
        >
            <ScrollProgress />
            <FloatingOrbs />
            <HomePage year=year />
        </div>
    }
}
