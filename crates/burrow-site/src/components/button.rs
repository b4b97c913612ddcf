//! Button primitive with a small set of visual variants

use leptos::prelude::*;

use crate::utils::class_names;

/// Classes shared by every variant
pub const BASE_CLASSES: &str = "inline-flex items-center justify-center rounded-xl px-4 py-2 text-sm font-medium transition-colors focus-visible:outline focus-visible:outline-2 focus-visible:outline-offset-2 focus-visible:outline-[var(--copper)] disabled:pointer-events-none disabled:opacity-50";

/// Visual style of a [`Button`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ButtonVariant {
    /// Filled copper, the default
    #[default]
    Solid,
    /// Transparent with a light border
    Outline,
    /// Text only, tinted on hover
    Ghost,
    /// Filled copper with a soft halo that grows on hover
    Glow,
}

impl ButtonVariant {
    /// Every variant, in declaration order
    pub const ALL: [Self; 4] = [Self::Solid, Self::Outline, Self::Ghost, Self::Glow];

    /// Parses a variant name; anything unrecognized selects [`ButtonVariant::Solid`]
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "outline" => Self::Outline,
            "ghost" => Self::Ghost,
            "glow" => Self::Glow,
            _ => Self::Solid,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
            Self::Glow => "glow",
        }
    }

    /// Variant-specific classes, appended after [`BASE_CLASSES`]
    pub const fn classes(self) -> &'static str {
        match self {
            Self::Solid => "bg-[var(--copper)] text-[var(--parchment)] hover:bg-[var(--copper)]/90",
            Self::Outline => "border border-white/20 text-white hover:bg-white/10",
            Self::Ghost => "text-white hover:bg-white/10",
            Self::Glow => {
                "bg-[var(--copper)] text-[var(--parchment)] shadow-[0_0_24px_rgba(184,107,54,0.45)] hover:shadow-[0_0_36px_rgba(184,107,54,0.65)] transition-shadow"
            }
        }
    }
}

impl From<&str> for ButtonVariant {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

impl From<String> for ButtonVariant {
    fn from(name: String) -> Self {
        Self::parse(&name)
    }
}

/// Full class attribute for a button: base, then variant, then caller classes
pub fn button_classes(variant: ButtonVariant, extra: &str) -> String {
    class_names(&[BASE_CLASSES, variant.classes(), extra])
}

/// Clickable control whose look is selected by `variant`
///
/// Attributes and handlers given with `attr:` and `on:` (disabled, type,
/// click, ...) are spread onto the underlying `<button>` unchanged.
#[component]
pub fn Button(
    #[prop(optional, into)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <button class=button_classes(variant, &class) data-variant=variant.name()>
            {children()}
        </button>
    }
}
