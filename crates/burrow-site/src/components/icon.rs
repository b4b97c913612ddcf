//! Inline SVG line icons

use leptos::prelude::*;

/// Icons used across the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Code,
    Hammer,
    Leaf,
    CircuitBoard,
    Github,
    Linkedin,
}

impl Icon {
    /// Inner SVG markup, drawn on a 24x24 stroke grid
    pub const fn markup(self) -> &'static str {
        match self {
            Self::Code => {
                r#"<path d="m18 16 4-4-4-4"/><path d="m6 8-4 4 4 4"/><path d="m14.5 4-5 16"/>"#
            }
            Self::Hammer => {
                r#"<path d="m15 12-8.373 8.373a1 1 0 1 1-3-3L12 9"/><path d="m18 15 4-4"/><path d="m21.5 11.5-1.914-1.914A2 2 0 0 1 19 8.172V7l-2.26-2.26a6 6 0 0 0-4.202-1.756L9 2.96l.92.82A6.18 6.18 0 0 1 12 8.4V10l2 2h1.172a2 2 0 0 1 1.414.586L18.5 14.5"/>"#
            }
            Self::Leaf => {
                r#"<path d="M11 20A7 7 0 0 1 9.8 6.1C15.5 5 17 4.48 19 2c1 2 2 4.18 2 8 0 5.5-4.78 10-10 10Z"/><path d="M2 21c0-3 1.85-5.36 5.08-6C9.5 14.52 12 13 13 12"/>"#
            }
            Self::CircuitBoard => {
                r#"<rect width="18" height="18" x="3" y="3" rx="2"/><path d="M11 9h4a2 2 0 0 0 2-2V3"/><circle cx="9" cy="9" r="2"/><path d="M7 21v-4a2 2 0 0 1 2-2h4"/><circle cx="15" cy="15" r="2"/>"#
            }
            Self::Github => {
                r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/><path d="M9 18c-4.51 2-5-2-7-2"/>"#
            }
            Self::Linkedin => {
                r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/><rect width="4" height="12" x="2" y="9"/><circle cx="4" cy="4" r="2"/>"#
            }
        }
    }

    /// Stable name, rendered as `data-icon` for styling hooks
    pub const fn name(self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Hammer => "hammer",
            Self::Leaf => "leaf",
            Self::CircuitBoard => "circuit-board",
            Self::Github => "github",
            Self::Linkedin => "linkedin",
        }
    }
}

/// Renders an [`Icon`] as a decorative inline SVG
#[component]
pub fn IconSvg(icon: Icon, #[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <svg
            class=class
            data-icon=icon.name()
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            inner_html=icon.markup()
        ></svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Icon; 6] = [
        Icon::Code,
        Icon::Hammer,
        Icon::Leaf,
        Icon::CircuitBoard,
        Icon::Github,
        Icon::Linkedin,
    ];

    #[test]
    fn test_markup_is_svg_shapes() {
        for icon in ALL {
            let markup = icon.markup();
            assert!(markup.starts_with('<'), "{icon:?}");
            assert!(markup.ends_with("/>"), "{icon:?}");
        }
    }

    #[test]
    fn test_names_are_kebab_case() {
        for icon in ALL {
            let name = icon.name();
            assert_eq!(name, name.to_lowercase());
            assert!(!name.contains(' '));
        }
    }
}
