pub mod bullets;
pub mod profile;
pub mod quote;
pub mod title;
pub mod two_col;

use eframe::egui::{self, Color32, Pos2, Rect, Sense, Stroke, StrokeKind};

use crate::deck::Column;
use crate::render::image_cache::ImageCache;
use crate::render::text;
use crate::theme::Theme;

/// Standard slide header: optional uppercase accent label, the title, and a
/// short gradient rule underneath. Returns the vertical space consumed.
pub(super) fn draw_header(
    ui: &egui::Ui,
    theme: &Theme,
    pos: Pos2,
    width: f32,
    accent: Option<&str>,
    title: &str,
    opacity: f32,
    scale: f32,
) -> f32 {
    let mut y = pos.y;

    if let Some(accent) = accent {
        let spaced: String = accent
            .to_uppercase()
            .chars()
            .flat_map(|c| [c, '\u{2009}'])
            .collect();
        let h = text::draw_wrapped(
            ui,
            spaced.trim_end(),
            Pos2::new(pos.x, y),
            theme.small_size * 0.85 * scale,
            Theme::with_opacity(theme.accent, opacity * 0.8),
            width,
        );
        y += h + 6.0 * scale;
    }

    let h = text::draw_wrapped(
        ui,
        title,
        Pos2::new(pos.x, y),
        theme.h2_size * scale,
        Theme::with_opacity(theme.heading_color, opacity),
        width,
    );
    y += h + 10.0 * scale;

    let rule = Rect::from_min_size(
        Pos2::new(pos.x, y),
        egui::vec2(56.0 * scale, 6.0 * scale),
    );
    text::gradient_rule(
        ui,
        rule,
        Theme::with_opacity(theme.accent, opacity),
        Theme::with_opacity(theme.accent_alt, opacity),
    );
    y += rule.height();

    y - pos.y
}

/// Frosted card holding a column heading and its dot-marked points.
pub(super) fn draw_column_card(
    ui: &egui::Ui,
    theme: &Theme,
    rect: Rect,
    col: &Column,
    edge: Color32,
    opacity: f32,
    scale: f32,
) {
    let rounding = 16.0 * scale;
    ui.painter()
        .rect_filled(rect, rounding, Theme::with_opacity(theme.pill_fill, opacity));
    ui.painter().rect_stroke(
        rect,
        rounding,
        Stroke::new(1.0, Theme::with_opacity(theme.card_border, opacity)),
        StrokeKind::Inside,
    );
    // Colored edge along the left side
    let edge_rect = Rect::from_min_size(rect.min, egui::vec2(4.0 * scale, rect.height()));
    ui.painter()
        .rect_filled(edge_rect, 2.0 * scale, Theme::with_opacity(edge, opacity));

    let padding = 20.0 * scale;
    let inner_width = rect.width() - padding * 2.0;
    let mut y = rect.top() + padding;

    let h = text::draw_wrapped(
        ui,
        &col.heading,
        Pos2::new(rect.left() + padding, y),
        theme.h3_size * 0.8 * scale,
        Theme::with_opacity(theme.heading_color, opacity),
        inner_width,
    );
    y += h + 8.0 * scale;
    ui.painter().line_segment(
        [
            Pos2::new(rect.left() + padding, y),
            Pos2::new(rect.right() - padding, y),
        ],
        Stroke::new(1.0, Theme::with_opacity(theme.card_border, opacity)),
    );
    y += 14.0 * scale;

    let dot_r = 4.0 * scale;
    let text_x = rect.left() + padding + dot_r * 2.0 + 10.0 * scale;
    let text_width = rect.right() - padding - text_x;
    let body = theme.body_size * 0.72 * scale;

    for point in &col.points {
        if y > rect.bottom() - padding {
            break;
        }
        ui.painter().circle_filled(
            Pos2::new(rect.left() + padding + dot_r, y + body * 0.55),
            dot_r,
            Theme::with_opacity(edge, opacity),
        );
        let h = text::draw_wrapped(
            ui,
            point,
            Pos2::new(text_x, y),
            body,
            Theme::with_opacity(theme.foreground, opacity),
            text_width,
        );
        y += h + 9.0 * scale;
    }
}

/// Image thumbnail with a soft glow, a border, and a click-to-expand hit
/// area. Returns the path when clicked. A missing image renders as a framed
/// placeholder so broken decks stay presentable.
pub(super) fn draw_framed_image(
    ui: &egui::Ui,
    theme: &Theme,
    area: Rect,
    path: &str,
    images: &ImageCache,
    opacity: f32,
    scale: f32,
) -> Option<String> {
    let Some(texture) = images.get(ui.ctx(), path) else {
        draw_image_placeholder(ui, theme, area, path, opacity, scale);
        return None;
    };

    let tex_size = texture.size_vec2();
    let fit = (area.width() / tex_size.x).min(area.height() / tex_size.y);
    let size = tex_size * fit;
    let mut rect = Rect::from_center_size(area.center(), size);

    let response = ui.interact(
        rect,
        ui.id().with(("thumb", path)),
        Sense::click(),
    );
    if response.hovered() {
        rect = Rect::from_center_size(rect.center(), size * 1.03);
    }

    // Glow halo behind the frame
    ui.painter().circle_filled(
        rect.center(),
        rect.width().max(rect.height()) * 0.62,
        Theme::with_opacity(theme.accent, 0.10 * opacity),
    );

    ui.painter().image(
        texture.id(),
        rect,
        Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
        Theme::with_opacity(Color32::WHITE, opacity),
    );
    ui.painter().rect_stroke(
        rect,
        4.0 * scale,
        Stroke::new(2.0, Theme::with_opacity(theme.card_border, opacity)),
        StrokeKind::Outside,
    );

    if response.hovered() {
        text::draw_pill(
            ui,
            Pos2::new(rect.center().x, rect.bottom() - 20.0 * scale),
            "Click to expand",
            theme.small_size * 0.75 * scale,
            Color32::WHITE,
            Color32::from_rgba_unmultiplied(0, 0, 0, 110),
            Color32::TRANSPARENT,
            scale,
        );
    }

    response.clicked().then(|| path.to_string())
}

fn draw_image_placeholder(
    ui: &egui::Ui,
    theme: &Theme,
    area: Rect,
    path: &str,
    opacity: f32,
    scale: f32,
) {
    let rect = Rect::from_center_size(area.center(), area.size() * 0.8);
    ui.painter().rect_stroke(
        rect,
        8.0 * scale,
        Stroke::new(1.5, Theme::with_opacity(theme.muted, 0.4 * opacity)),
        StrokeKind::Inside,
    );
    text::draw_centered(
        ui,
        path,
        rect.center().x,
        rect.center().y - theme.small_size * scale / 2.0,
        theme.small_size * 0.8 * scale,
        Theme::with_opacity(theme.muted, 0.6 * opacity),
        rect.width() * 0.9,
    );
}
