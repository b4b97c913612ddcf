//! Leptos 0.7 marketing site for Bit Burrow Co
//!
//! A single scrolling page with anchored sections for apps, features and the
//! studio story, plus a decorative motion layer.
//!
//! ## Builds
//! - `csr`: WASM bundle mounted by Trunk (`src/main.rs`)
//! - `ssr` (default): native rendering used by the `burrow-export` static
//!   export and by the test suite
//!
//! ## Module Structure
//! - `app`: Root component and theme binding
//! - `pages`: The home page composition
//! - `sections`: Header, hero, apps, features, about and footer
//! - `components`: Buttons, cards, icons, logo and layout primitives
//! - `motion`: Scroll progress, reveal-on-scroll and floating orbs
//! - `models`: Theme palette, anchors and page copy
//! - `clock`: Copyright year
//! - `utils`: Class list helpers
//! - `error`: Error types
//! - `config`, `render`, `export`: Static export (`ssr` only)

#![forbid(unsafe_code)]

pub mod app;
pub mod clock;
pub mod components;
pub mod error;
pub mod models;
pub mod motion;
pub mod pages;
pub mod sections;
pub mod utils;

#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod export;
#[cfg(feature = "ssr")]
pub mod render;

#[cfg(all(test, feature = "ssr"))]
mod tests;

pub use app::App;
