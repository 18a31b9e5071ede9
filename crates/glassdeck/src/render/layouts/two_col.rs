use eframe::egui::{self, Color32, Pos2, Rect};

use super::{draw_column_card, draw_framed_image, draw_header};
use crate::deck::Column;
use crate::render::image_cache::ImageCache;
use crate::theme::Theme;

const LEFT_EDGE: Color32 = Color32::from_rgb(0x4A, 0xDE, 0x80);
const RIGHT_EDGE: Color32 = Color32::from_rgb(0xFB, 0x71, 0x85);

/// Two-column comparison slide. The left card carries a green edge, the
/// right a rose one. An optional image takes a narrow third column.
#[allow(clippy::too_many_arguments)]
pub fn render(
    ui: &egui::Ui,
    theme: &Theme,
    rect: egui::Rect,
    title: &str,
    left: &Column,
    right: &Column,
    image: Option<&str>,
    images: &ImageCache,
    opacity: f32,
    scale: f32,
) -> Option<String> {
    let padding = 48.0 * scale;
    let content = rect.shrink(padding);

    let header_h = draw_header(
        ui,
        theme,
        content.min,
        content.width(),
        None,
        title,
        opacity,
        scale,
    );

    let body_top = content.top() + header_h + 24.0 * scale;
    let body = Rect::from_min_max(Pos2::new(content.left(), body_top), content.max);
    let gap = 20.0 * scale;

    let (col_width, image_area) = match image {
        Some(_) => {
            let image_w = body.width() * 0.24;
            let w = (body.width() - image_w - gap * 2.0) / 2.0;
            let area = Rect::from_min_max(
                Pos2::new(body.right() - image_w, body.top()),
                body.max,
            );
            (w, Some(area))
        }
        None => ((body.width() - gap) / 2.0, None),
    };

    let left_rect = Rect::from_min_size(body.min, egui::vec2(col_width, body.height()));
    let right_rect = Rect::from_min_size(
        Pos2::new(body.left() + col_width + gap, body.top()),
        egui::vec2(col_width, body.height()),
    );

    draw_column_card(ui, theme, left_rect, left, LEFT_EDGE, opacity, scale);
    draw_column_card(ui, theme, right_rect, right, RIGHT_EDGE, opacity, scale);

    match (image, image_area) {
        (Some(path), Some(area)) => {
            draw_framed_image(ui, theme, area, path, images, opacity, scale)
        }
        _ => None,
    }
}
