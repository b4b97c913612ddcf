//! Keyframes and transition rules used by the motion layer

use leptos::prelude::*;

/// Reveal rules only hide content once the browser has marked the page
/// `data-motion="on"`, so pre-rendered HTML without scripts stays readable.
pub const MOTION_CSS: &str = r#"
html { scroll-behavior: smooth; }

[data-motion="on"] .reveal {
  opacity: 0;
  transform: translateY(16px);
  transition: opacity 0.6s ease-out, transform 0.6s ease-out;
}
[data-motion="on"] .reveal.reveal-shown {
  opacity: 1;
  transform: none;
}

@keyframes burrow-rise {
  from { opacity: 0; transform: translateY(10px); }
  to { opacity: 1; transform: none; }
}
@keyframes burrow-settle {
  from { opacity: 0; transform: scale(0.95); }
  to { opacity: 1; transform: none; }
}
.motion-rise { animation: burrow-rise 0.6s ease-out both; }
.motion-settle { animation: burrow-settle 0.6s ease-out 0.2s both; }

@keyframes burrow-float {
  0%, 100% { transform: translate3d(0, 0, 0); }
  33% { transform: translate3d(24px, -32px, 0); }
  66% { transform: translate3d(-20px, 18px, 0); }
}
.orb {
  animation-name: burrow-float;
  animation-timing-function: ease-in-out;
  animation-iteration-count: infinite;
}

@media (prefers-reduced-motion: reduce) {
  html { scroll-behavior: auto; }
  .orb, .motion-rise, .motion-settle { animation: none; }
  [data-motion="on"] .reveal { opacity: 1; transform: none; transition: none; }
}
"#;

/// Injects [`MOTION_CSS`] into the page
#[component]
pub fn MotionStyles() -> impl IntoView {
    view! { <style inner_html=MOTION_CSS></style> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_rules_are_scoped_to_motion_on() {
        let unscoped = MOTION_CSS
            .lines()
            .any(|line| line.trim_start().starts_with(".reveal"));
        assert!(!unscoped);
        assert!(MOTION_CSS.contains("[data-motion=\"on\"] .reveal"));
    }

    #[test]
    fn test_reduced_motion_is_respected() {
        assert!(MOTION_CSS.contains("prefers-reduced-motion: reduce"));
    }
}
