//! Reusable UI primitives

pub mod button;
pub mod card;
pub mod icon;
pub mod layout;
pub mod logo;

pub use button::{Button, ButtonVariant};
pub use card::{Card, CardContent, CardHeader, CardTitle};
pub use icon::{Icon, IconSvg};
pub use layout::{Section, Wrapper};
pub use logo::Logo;
