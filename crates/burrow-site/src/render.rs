//! Server-side rendering of the page into a standalone HTML document
//!
//! Used by the static export and by the behavior tests, which assert on the
//! rendered markup instead of a live DOM.

use leptos::prelude::*;

use crate::app::App;
use crate::config::SiteConfig;

/// Render any view to an HTML string inside a fresh reactive owner.
pub fn render_view<F, V>(view: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    let owner = Owner::new();
    owner.with(|| view().into_view().to_html())
}

/// Render the page body for a fixed copyright year.
pub fn render_app(year: i32) -> String {
    render_view(move || view! { <App year=year /> })
}

/// Render the complete `index.html` for `config`.
pub fn render_document(config: &SiteConfig, year: i32) -> String {
    let body = render_app(year);
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"en\">\n",
            "<head>\n",
            "<meta charset=\"utf-8\">\n",
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
            "<title>{title}</title>\n",
            "<link rel=\"stylesheet\" href=\"{stylesheet}\">\n",
            "</head>\n",
            "<body>\n{body}\n</body>\n",
            "</html>\n",
        ),
        title = html_escape::encode_text(&config.title),
        stylesheet = html_escape::encode_double_quoted_attribute(&config.stylesheet_href()),
        body = body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_shell() {
        let html = render_document(&SiteConfig::default(), 2025);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"en\">"));
        assert!(html.contains("<title>Bit Burrow Co</title>"));
        assert!(html.contains("href=\"/tailwind.css\""));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_document_respects_base_url() {
        let config = SiteConfig {
            base_url: "/burrow/".to_string(),
            ..SiteConfig::default()
        };
        let html = render_document(&config, 2025);
        assert!(html.contains("href=\"/burrow/tailwind.css\""));
    }

    #[test]
    fn test_title_is_escaped() {
        let config = SiteConfig {
            title: "Burrow & <Co>".to_string(),
            ..SiteConfig::default()
        };
        let html = render_document(&config, 2025);
        assert!(html.contains("<title>Burrow &amp; &lt;Co&gt;</title>"));
    }

    #[test]
    fn test_stylesheet_href_is_attribute_escaped() {
        let config = SiteConfig {
            stylesheet: "a\"b.css".to_string(),
            ..SiteConfig::default()
        };
        let html = render_document(&config, 2025);
        assert!(html.contains("href=\"/a&quot;b.css\""));
    }

    #[test]
    fn test_app_renders_year() {
        let html = render_app(2031);
        assert!(html.contains("2031"));
        assert!(html.contains("Bit Burrow Co"));
    }

    #[test]
    fn test_static_render_keeps_motion_off() {
        let html = render_app(2025);
        assert!(html.contains("data-motion=\"off\""));
    }
}
