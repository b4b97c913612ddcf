//! Static content records rendered by the page

pub mod colors;
pub mod content;
pub mod section;

pub use colors::{RgbColor, THEME, ThemeTokens};
pub use content::{AppCard, FeatureCard, FocusArea, TimelineEntry};
pub use section::{ExternalLink, NavLink, SectionId, EXTERNAL_LINKS, NAV_LINKS};
