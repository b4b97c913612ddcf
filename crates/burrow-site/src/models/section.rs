//! Page sections addressable by anchor, and the links that point at them

use crate::components::icon::Icon;

/// A section of the page that navigation links can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Apps,
    Features,
    About,
}

impl SectionId {
    /// Every addressable section, in page order
    pub const ALL: [Self; 3] = [Self::Apps, Self::Features, Self::About];

    /// Element id placed on the `<section>`
    pub const fn id(self) -> &'static str {
        match self {
            Self::Apps => "apps",
            Self::Features => "features",
            Self::About => "about",
        }
    }

    /// In-page href pointing at the section
    pub const fn href(self) -> &'static str {
        match self {
            Self::Apps => "#apps",
            Self::Features => "#features",
            Self::About => "#about",
        }
    }
}

/// Navigation entry shared by the header and the footer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: SectionId,
}

/// Navigation links, in display order
pub const NAV_LINKS: [NavLink; 3] = [
    NavLink {
        label: "Apps",
        target: SectionId::Apps,
    },
    NavLink {
        label: "Features",
        target: SectionId::Features,
    },
    NavLink {
        label: "About",
        target: SectionId::About,
    },
];

/// Outbound link, opened in a new browsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExternalLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

/// Source-code host and professional-network profile
pub const EXTERNAL_LINKS: [ExternalLink; 2] = [
    ExternalLink {
        label: "GitHub",
        href: "https://github.com",
        icon: Icon::Github,
    },
    ExternalLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com",
        icon: Icon::Linkedin,
    },
];
