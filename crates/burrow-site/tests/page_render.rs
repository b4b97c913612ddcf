//! Integration tests for the pre-rendered document
//!
//! These tests render the whole page through the public API and check the
//! markup a static host would serve.

#![cfg(feature = "ssr")]

use burrow_site::config::SiteConfig;
use burrow_site::models::SectionId;
use burrow_site::render::render_document;

#[test]
fn test_document_contains_every_section_in_order() -> Result<(), String> {
    let html = render_document(&SiteConfig::default(), 2025);

    let mut last = 0;
    for section in SectionId::ALL {
        let anchor = format!("id=\"{}\"", section.id());
        let at = html
            .find(&anchor)
            .ok_or_else(|| format!("missing {anchor}"))?;
        assert!(at > last, "{anchor} out of order");
        last = at;
    }
    Ok(())
}

#[test]
fn test_document_header_then_main_then_footer() -> Result<(), String> {
    let html = render_document(&SiteConfig::default(), 2025);

    let header = html.find("<header").ok_or("missing header")?;
    let main = html.find("<main").ok_or("missing main")?;
    let footer = html.find("<footer").ok_or("missing footer")?;

    assert!(header < main);
    assert!(main < footer);
    Ok(())
}

#[test]
fn test_document_is_readable_without_scripts() {
    let html = render_document(&SiteConfig::default(), 2025);

    // reveal styles only apply once the browser build flips the flag
    assert!(html.contains("data-motion=\"off\""));
    assert!(html.contains("[data-motion=\"on\"] .reveal"));
    assert!(!html.contains("<script"));
}

#[test]
fn test_document_includes_copyright_year() {
    let html = render_document(&SiteConfig::default(), 2042);

    assert!(html.contains("© 2042 Bit Burrow Co. All rights reserved."));
}
