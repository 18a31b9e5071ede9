use eframe::egui::{self, Pos2, Rect};

use super::{draw_column_card, draw_framed_image};
use crate::deck::Column;
use crate::render::image_cache::ImageCache;
use crate::render::text;
use crate::theme::Theme;

/// Profile slide: portrait and identity stack on the left two fifths, the
/// slide header and two stacked point cards on the right. Without a
/// portrait image the initials stand in.
#[allow(clippy::too_many_arguments)]
pub fn render(
    ui: &egui::Ui,
    theme: &Theme,
    rect: egui::Rect,
    title: &str,
    name: &str,
    role: &str,
    org: &str,
    image: Option<&str>,
    left: &Column,
    right: &Column,
    images: &ImageCache,
    opacity: f32,
    scale: f32,
) -> Option<String> {
    let padding = 48.0 * scale;
    let content = rect.shrink(padding);
    let split = content.left() + content.width() * 0.38;

    let portrait_area = Rect::from_min_max(content.min, Pos2::new(split, content.bottom()));
    let cards_area = Rect::from_min_max(
        Pos2::new(split + 24.0 * scale, content.top()),
        content.max,
    );

    // Identity stack under the portrait
    let name_size = theme.h3_size * scale;
    let role_size = theme.body_size * 0.85 * scale;
    let org_size = theme.small_size * scale;
    let stack_h = name_size + role_size + org_size + 26.0 * scale;

    let portrait_rect = Rect::from_min_max(
        portrait_area.min,
        Pos2::new(
            portrait_area.right(),
            portrait_area.bottom() - stack_h - 18.0 * scale,
        ),
    );
    let request = match image {
        Some(path) => draw_framed_image(ui, theme, portrait_rect, path, images, opacity, scale),
        None => {
            draw_initials(ui, theme, portrait_rect, name, opacity, scale);
            None
        }
    };

    let center_x = portrait_area.center().x;
    let mut y = portrait_rect.bottom() + 18.0 * scale;
    y += text::draw_centered(
        ui,
        name,
        center_x,
        y,
        name_size,
        Theme::with_opacity(theme.heading_color, opacity),
        portrait_area.width(),
    ) + 4.0 * scale;
    y += text::draw_centered(
        ui,
        role,
        center_x,
        y,
        role_size,
        Theme::with_opacity(theme.accent, opacity),
        portrait_area.width(),
    ) + 4.0 * scale;
    text::draw_centered(
        ui,
        org,
        center_x,
        y,
        org_size,
        Theme::with_opacity(theme.muted, opacity),
        portrait_area.width(),
    );

    // Right side: small tracked label, accent rule, then the two cards
    let spaced: String = title
        .to_uppercase()
        .chars()
        .flat_map(|c| [c, '\u{2009}'])
        .collect();
    let label_h = text::draw_wrapped(
        ui,
        spaced.trim_end(),
        cards_area.min,
        theme.small_size * 0.85 * scale,
        Theme::with_opacity(theme.accent, 0.8 * opacity),
        cards_area.width(),
    );
    let rule = Rect::from_min_size(
        Pos2::new(cards_area.left(), cards_area.top() + label_h + 6.0 * scale),
        egui::vec2(48.0 * scale, 5.0 * scale),
    );
    text::gradient_rule(
        ui,
        rule,
        Theme::with_opacity(theme.accent, opacity),
        Theme::with_opacity(theme.accent_alt, opacity),
    );
    let header_h = label_h + 11.0 * scale + rule.height();
    let gap = 16.0 * scale;
    let cards_top = cards_area.top() + header_h + gap;
    let card_h = (cards_area.bottom() - cards_top - gap) / 2.0;

    let top_card = Rect::from_min_size(
        Pos2::new(cards_area.left(), cards_top),
        egui::vec2(cards_area.width(), card_h),
    );
    let bottom_card = Rect::from_min_size(
        Pos2::new(cards_area.left(), cards_top + card_h + gap),
        egui::vec2(cards_area.width(), card_h),
    );

    draw_column_card(ui, theme, top_card, left, theme.accent, opacity, scale);
    draw_column_card(
        ui,
        theme,
        bottom_card,
        right,
        theme.accent_alt,
        opacity,
        scale,
    );

    request
}

fn draw_initials(
    ui: &egui::Ui,
    theme: &Theme,
    area: Rect,
    name: &str,
    opacity: f32,
    scale: f32,
) {
    let radius = area.width().min(area.height()) * 0.32;
    let center = area.center();
    ui.painter().circle_filled(
        center,
        radius,
        Theme::with_opacity(theme.accent, 0.18 * opacity),
    );
    ui.painter().circle_stroke(
        center,
        radius,
        egui::Stroke::new(2.0 * scale, Theme::with_opacity(theme.accent, 0.4 * opacity)),
    );
    let initials: String = name
        .split_whitespace()
        .filter_map(|w| w.chars().next())
        .take(2)
        .collect();
    text::draw_centered(
        ui,
        &initials,
        center.x,
        center.y - radius * 0.45,
        radius * 0.9,
        Theme::with_opacity(theme.accent, 0.85 * opacity),
        radius * 4.0,
    );
}
