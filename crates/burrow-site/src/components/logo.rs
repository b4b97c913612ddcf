//! Burrow roundel brand mark

use leptos::prelude::*;

use crate::models::THEME;

/// Arch of the burrow entrance
const ARCH_PATH: &str = "M30 68c0-22 13-40 30-40s30 18 30 40";

/// Tunnel floor "bits"
const BITS_PATH: &str = "M45 78c6 0 6 0 0 0M60 86c8 0 8 0 0 0M75 78c6 0 6 0 0 0";

/// Roundel with a tunneled arch and bit marks, stroked in copper
#[component]
pub fn Logo(#[prop(default = "h-10 w-10".into(), into)] class: String) -> impl IntoView {
    let copper = THEME.copper.to_hex();

    view! {
        <svg
            class=class
            viewBox="0 0 120 120"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
            role="img"
            aria-label="Bit Burrow Co logo"
        >
            <circle cx="60" cy="60" r="55" stroke=copper.clone() stroke-width="10" />
            <path
                d=ARCH_PATH
                stroke=copper.clone()
                stroke-width="10"
                stroke-linecap="round"
                fill="none"
            />
            <path d=BITS_PATH stroke=copper stroke-width="8" stroke-linecap="round" />
        </svg>
    }
}
