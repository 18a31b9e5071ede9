pub mod decor;
pub mod image_cache;
pub mod layouts;
pub mod text;

use eframe::egui;

use crate::deck::Slide;
use crate::theme::Theme;

use image_cache::ImageCache;

/// Render one slide's content into `rect`, dispatched on the variant tag.
/// Pure apart from the returned lightbox request: when the user clicks an
/// image thumbnail the clicked path comes back and the caller opens the
/// overlay. `enter_t` is seconds since the current enter animation started
/// and drives the staggered per-item reveals.
#[allow(clippy::too_many_arguments)]
pub fn render_slide(
    ui: &egui::Ui,
    slide: &Slide,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    images: &ImageCache,
    enter_t: f32,
    scale: f32,
) -> Option<String> {
    match slide {
        Slide::Title {
            title,
            subtitle,
            eyebrow,
            is_final,
            ..
        } => {
            layouts::title::render(
                ui,
                theme,
                rect,
                title,
                subtitle,
                eyebrow.as_deref(),
                *is_final,
                enter_t,
                opacity,
                scale,
            );
            None
        }
        Slide::Bullets {
            title,
            points,
            accent,
            icons,
            image,
            ..
        } => layouts::bullets::render(
            ui,
            theme,
            rect,
            title,
            accent.as_deref(),
            points,
            icons,
            image.as_deref(),
            images,
            enter_t,
            opacity,
            scale,
        ),
        Slide::Quote {
            title,
            quote,
            attribution,
            ..
        } => {
            layouts::quote::render(ui, theme, rect, title, quote, attribution, opacity, scale);
            None
        }
        Slide::TwoCol {
            title,
            left,
            right,
            image,
            ..
        } => layouts::two_col::render(
            ui,
            theme,
            rect,
            title,
            left,
            right,
            image.as_deref(),
            images,
            opacity,
            scale,
        ),
        Slide::Profile {
            title,
            name,
            role,
            org,
            image,
            left,
            right,
            ..
        } => layouts::profile::render(
            ui,
            theme,
            rect,
            title,
            name,
            role,
            org,
            image.as_deref(),
            left,
            right,
            images,
            opacity,
            scale,
        ),
    }
}
