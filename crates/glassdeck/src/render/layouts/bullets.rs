use eframe::egui::{self, Pos2, Rect};

use super::{draw_framed_image, draw_header};
use crate::render::image_cache::ImageCache;
use crate::render::text;
use crate::theme::Theme;

const STAGGER: f32 = 0.08;
const ITEM_FADE: f32 = 0.3;

/// Bullets slide: header plus a vertically centered list, each point led by
/// an icon badge. Points fade in staggered as the slide enters. With an
/// image, the list takes the left three fifths and the image the rest.
#[allow(clippy::too_many_arguments)]
pub fn render(
    ui: &egui::Ui,
    theme: &Theme,
    rect: egui::Rect,
    title: &str,
    accent: Option<&str>,
    points: &[String],
    icons: &[String],
    image: Option<&str>,
    images: &ImageCache,
    enter_t: f32,
    opacity: f32,
    scale: f32,
) -> Option<String> {
    let padding = 48.0 * scale;
    let content = rect.shrink(padding);

    let (text_area, image_area) = match image {
        Some(_) => {
            let split = content.left() + content.width() * 0.58;
            (
                Rect::from_min_max(content.min, Pos2::new(split, content.bottom())),
                Some(Rect::from_min_max(
                    Pos2::new(split + 16.0 * scale, content.top()),
                    content.max,
                )),
            )
        }
        None => (content, None),
    };

    let header_h = draw_header(
        ui,
        theme,
        text_area.min,
        text_area.width(),
        accent,
        title,
        opacity,
        scale,
    );

    // Lay the points out below the header, centered in the leftover space
    let badge = 52.0 * scale;
    let gap = 18.0 * scale;
    let text_x = text_area.left() + badge + 18.0 * scale;
    let text_width = text_area.right() - text_x;
    let body = theme.body_size * scale;

    let heights: Vec<f32> = points
        .iter()
        .map(|p| {
            text::layout(ui, p, body, theme.foreground, text_width)
                .rect
                .height()
                .max(badge)
        })
        .collect();
    let list_height: f32 = heights.iter().sum::<f32>() + gap * points.len().saturating_sub(1) as f32;
    let list_top = text_area.top() + header_h;
    let free = (text_area.bottom() - list_top - list_height).max(0.0);
    let mut y = list_top + free / 2.0;

    for (i, point) in points.iter().enumerate() {
        // Staggered entrance, matching the card's own slide-in
        let delay = i as f32 * STAGGER + 0.15;
        let reveal = ((enter_t - delay) / ITEM_FADE).clamp(0.0, 1.0);
        let item_opacity = opacity * reveal;
        let slide_in = 14.0 * scale * (1.0 - reveal);

        if item_opacity > 0.0 {
            let row_h = heights[i];
            let badge_rect = Rect::from_min_size(
                Pos2::new(text_area.left() + slide_in, y + (row_h - badge) / 2.0),
                egui::vec2(badge, badge),
            );
            text::draw_icon_badge(
                ui,
                theme,
                badge_rect,
                icons.get(i).map(String::as_str),
                i + 1,
                item_opacity,
                scale,
            );

            let text_h = text::layout(ui, point, body, theme.foreground, text_width)
                .rect
                .height();
            text::draw_wrapped(
                ui,
                point,
                Pos2::new(text_x + slide_in, y + (row_h - text_h) / 2.0),
                body,
                Theme::with_opacity(theme.foreground, item_opacity),
                text_width,
            );
        }
        y += heights[i] + gap;
    }

    match (image, image_area) {
        (Some(path), Some(area)) => {
            draw_framed_image(ui, theme, area, path, images, opacity, scale)
        }
        _ => None,
    }
}
