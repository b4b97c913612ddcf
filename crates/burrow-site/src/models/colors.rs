//! Theme color tokens bound to CSS custom properties

/// RGB color representation (0-255 per channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to hex string (#RRGGBB)
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Convert to CSS rgba() string with the given opacity
    pub fn to_rgba(&self, alpha: f32) -> String {
        let alpha = if alpha.is_finite() { alpha.clamp(0.0, 1.0) } else { 1.0 };
        format!("rgba({}, {}, {}, {alpha})", self.r, self.g, self.b)
    }
}

/// The four named colors of the site palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeTokens {
    /// Deep moss, page background
    pub moss: RgbColor,
    /// Warm copper, accents and the logo
    pub copper: RgbColor,
    /// Bark brown, panels
    pub bark: RgbColor,
    /// Soft off-white, body text
    pub parchment: RgbColor,
}

/// Site palette, fixed at build time
pub const THEME: ThemeTokens = ThemeTokens {
    moss: RgbColor::new(0x2F, 0x3B, 0x2F),
    copper: RgbColor::new(0xB8, 0x6B, 0x36),
    bark: RgbColor::new(0x3F, 0x2F, 0x25),
    parchment: RgbColor::new(0xF3, 0xEF, 0xE8),
};

impl ThemeTokens {
    /// Token names paired with their colors, in declaration order
    pub const fn entries(&self) -> [(&'static str, RgbColor); 4] {
        [
            ("moss", self.moss),
            ("copper", self.copper),
            ("bark", self.bark),
            ("parchment", self.parchment),
        ]
    }

    /// Inline style declaring one `--name: #RRGGBB` custom property per token
    ///
    /// Components refer to the palette only through `var(--name)`, so this
    /// string on the page shell is the single place colors are bound.
    pub fn css_variables(&self) -> String {
        self.entries()
            .iter()
            .map(|(name, color)| format!("--{name}: {};", color.to_hex()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_hex_values() {
        assert_eq!(THEME.moss.to_hex(), "#2F3B2F");
        assert_eq!(THEME.copper.to_hex(), "#B86B36");
        assert_eq!(THEME.bark.to_hex(), "#3F2F25");
        assert_eq!(THEME.parchment.to_hex(), "#F3EFE8");
    }

    #[test]
    fn test_css_variables_cover_every_token() {
        let css = THEME.css_variables();
        assert_eq!(
            css,
            "--moss: #2F3B2F; --copper: #B86B36; --bark: #3F2F25; --parchment: #F3EFE8;"
        );
    }

    #[test]
    fn test_rgba_output() {
        let color = RgbColor::new(184, 107, 54);
        assert_eq!(color.to_rgba(0.16), "rgba(184, 107, 54, 0.16)");
    }

    #[test]
    fn test_rgba_clamps_alpha() {
        let color = RgbColor::new(1, 2, 3);
        assert_eq!(color.to_rgba(4.0), "rgba(1, 2, 3, 1)");
        assert_eq!(color.to_rgba(-1.0), "rgba(1, 2, 3, 0)");
        assert_eq!(color.to_rgba(f32::NAN), "rgba(1, 2, 3, 1)");
    }

    #[test]
    fn test_all_tokens_are_distinct() {
        let entries = THEME.entries();
        for (i, (name_a, color_a)) in entries.iter().enumerate() {
            for (name_b, color_b) in entries.iter().skip(i.saturating_add(1)) {
                assert_ne!(color_a, color_b, "{name_a} and {name_b} share a color");
            }
        }
    }
}
