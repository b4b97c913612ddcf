//! Page sections, top to bottom

pub mod about;
pub mod apps;
pub mod features;
pub mod footer;
pub mod header;
pub mod hero;

pub use about::{AboutSection, Timeline};
pub use apps::AppsSection;
pub use features::FeaturesSection;
pub use footer::Footer;
pub use header::NavHeader;
pub use hero::Hero;
