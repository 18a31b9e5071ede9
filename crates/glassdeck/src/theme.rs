use eframe::egui::Color32;

use crate::deck::SlideKind;

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub background: Color32,
    pub card_fill: Color32,
    pub card_border: Color32,
    pub foreground: Color32,
    pub muted: Color32,
    pub heading_color: Color32,
    pub accent: Color32,
    pub accent_alt: Color32,
    pub pill_fill: Color32,
    pub title_size: f32,
    pub h2_size: f32,
    pub h3_size: f32,
    pub body_size: f32,
    pub small_size: f32,
}

impl Theme {
    /// The warm glass look: amber/rose wash, frosted white cards.
    pub fn warm() -> Self {
        Self {
            name: "warm".to_string(),
            background: Color32::from_rgb(0xFF, 0xF6, 0xEC),
            card_fill: Color32::from_rgba_unmultiplied(0xFF, 0xFF, 0xFF, 0x9E),
            card_border: Color32::from_rgba_unmultiplied(0xFF, 0xFF, 0xFF, 0xC8),
            foreground: Color32::from_rgb(0x44, 0x40, 0x3C),
            muted: Color32::from_rgb(0x78, 0x71, 0x6C),
            heading_color: Color32::from_rgb(0x29, 0x25, 0x24),
            accent: Color32::from_rgb(0xFB, 0x92, 0x3C),
            accent_alt: Color32::from_rgb(0xFB, 0x71, 0x85),
            pill_fill: Color32::from_rgba_unmultiplied(0xFF, 0xFF, 0xFF, 0x78),
            title_size: 88.0,
            h2_size: 56.0,
            h3_size: 34.0,
            body_size: 28.0,
            small_size: 18.0,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            background: Color32::from_rgb(0x1C, 0x18, 0x16),
            card_fill: Color32::from_rgba_unmultiplied(0x2E, 0x28, 0x24, 0xD2),
            card_border: Color32::from_rgba_unmultiplied(0x5A, 0x50, 0x48, 0xB4),
            foreground: Color32::from_rgb(0xD6, 0xD0, 0xCA),
            muted: Color32::from_rgb(0x9C, 0x94, 0x8C),
            heading_color: Color32::from_rgb(0xF2, 0xEC, 0xE6),
            accent: Color32::from_rgb(0xF0, 0x9A, 0x4E),
            accent_alt: Color32::from_rgb(0xE8, 0x6A, 0x85),
            pill_fill: Color32::from_rgba_unmultiplied(0x3C, 0x34, 0x2E, 0xB4),
            title_size: 88.0,
            h2_size: 56.0,
            h3_size: 34.0,
            body_size: 28.0,
            small_size: 18.0,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            _ => Self::warm(),
        }
    }

    pub fn toggled(&self) -> Self {
        if self.name == "dark" {
            Self::warm()
        } else {
            Self::dark()
        }
    }

    /// Apply opacity to a color, scaling any alpha it already carries.
    pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
        Color32::from_rgba_unmultiplied(
            color.r(),
            color.g(),
            color.b(),
            (color.a() as f32 * opacity) as u8,
        )
    }

    /// Gradient endpoints for the color band along a slide card's top edge.
    pub fn band_colors(&self, kind: SlideKind) -> (Color32, Color32) {
        match kind {
            SlideKind::Title => (
                Color32::from_rgb(0xFB, 0x71, 0x85),
                Color32::from_rgb(0xFB, 0x92, 0x3C),
            ),
            SlideKind::Bullets => (
                Color32::from_rgb(0xFB, 0xBF, 0x24),
                Color32::from_rgb(0xFB, 0x92, 0x3C),
            ),
            SlideKind::TwoCol => (
                Color32::from_rgb(0x38, 0xBD, 0xF8),
                Color32::from_rgb(0x22, 0xD3, 0xEE),
            ),
            SlideKind::Quote => (
                Color32::from_rgb(0x2D, 0xD4, 0xBF),
                Color32::from_rgb(0x34, 0xD3, 0x99),
            ),
            SlideKind::Profile => (
                Color32::from_rgb(0x8B, 0x5C, 0xF6),
                Color32::from_rgb(0xE8, 0x79, 0xF9),
            ),
        }
    }

    /// Badge tint for a slide variant, used by the category badge.
    pub fn badge_colors(&self, kind: SlideKind) -> (Color32, Color32) {
        let (a, b) = self.band_colors(kind);
        let fill = Self::with_opacity(a, 0.18);
        let text = if self.name == "dark" {
            b
        } else {
            Self::mix(a, self.heading_color, 0.45)
        };
        (fill, text)
    }

    /// Soft background blob colors, layered behind the card.
    pub fn blob_palette(&self) -> Vec<Color32> {
        if self.name == "dark" {
            vec![
                Color32::from_rgb(0x7A, 0x4A, 0x22), // ember
                Color32::from_rgb(0x6E, 0x2E, 0x3C), // wine
                Color32::from_rgb(0x7A, 0x3A, 0x1E), // rust
                Color32::from_rgb(0x5E, 0x2A, 0x42), // plum
                Color32::from_rgb(0x6E, 0x5A, 0x1E), // ochre
            ]
        } else {
            vec![
                Color32::from_rgb(0xFC, 0xD3, 0x4D), // amber
                Color32::from_rgb(0xFD, 0xA4, 0xAF), // rose
                Color32::from_rgb(0xFD, 0xBA, 0x74), // orange
                Color32::from_rgb(0xF9, 0xA8, 0xD4), // pink
                Color32::from_rgb(0xFD, 0xE6, 0x8A), // yellow
            ]
        }
    }

    fn mix(a: Color32, b: Color32, t: f32) -> Color32 {
        let lerp = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t) as u8;
        Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_round_trips() {
        let warm = Theme::warm();
        assert_eq!(warm.toggled().name, "dark");
        assert_eq!(warm.toggled().toggled().name, "warm");
    }

    #[test]
    fn unknown_theme_name_falls_back_to_warm() {
        assert_eq!(Theme::from_name("solarized").name, "warm");
    }

    #[test]
    fn opacity_scales_existing_alpha() {
        let c = Color32::from_rgba_unmultiplied(10, 20, 30, 200);
        assert_eq!(Theme::with_opacity(c, 0.5).a(), 100);
        assert_eq!(Theme::with_opacity(c, 0.0).a(), 0);
    }
}
