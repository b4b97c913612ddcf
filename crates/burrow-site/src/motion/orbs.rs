//! Floating background orbs

use leptos::prelude::*;

/// A blurred, slowly drifting disc behind the page content
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orb {
    /// Position, size, and color classes
    pub class: &'static str,
    /// Length of one float cycle, in seconds
    pub duration_secs: f32,
    /// Offset into the cycle, in seconds
    pub delay_secs: f32,
}

impl Orb {
    /// Inline animation timing for this orb
    pub fn style(&self) -> String {
        format!(
            "animation-duration: {}s; animation-delay: -{}s;",
            self.duration_secs, self.delay_secs
        )
    }
}

pub const ORBS: [Orb; 3] = [
    Orb {
        class: "left-[-8rem] top-24 h-72 w-72 bg-[var(--copper)]/20",
        duration_secs: 18.0,
        delay_secs: 0.0,
    },
    Orb {
        class: "right-[-6rem] top-[40%] h-96 w-96 bg-white/5",
        duration_secs: 24.0,
        delay_secs: 6.0,
    },
    Orb {
        class: "bottom-[-10rem] left-1/3 h-80 w-80 bg-[var(--bark)]/60",
        duration_secs: 21.0,
        delay_secs: 12.0,
    },
];

/// Fixed layer of decorative orbs, hidden from assistive technology
#[component]
pub fn FloatingOrbs() -> impl IntoView {
    view! {
        <div aria-hidden="true" class="pointer-events-none fixed inset-0 -z-10 overflow-hidden">
            {ORBS
                .iter()
                .map(|orb| {
                    view! {
                        <span
                            class=format!("orb absolute rounded-full blur-3xl {}", orb.class)
                            style=orb.style()
                        ></span>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
