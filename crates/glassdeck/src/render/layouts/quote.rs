use eframe::egui::{self, Align, FontFamily, FontId, Pos2};

use crate::render::text;
use crate::theme::Theme;

/// Quote slide: small tracked label, the quote in large italics with an
/// oversized decorative quotation mark hanging off its top-left, and a muted
/// attribution line underneath.
#[allow(clippy::too_many_arguments)]
pub fn render(
    ui: &egui::Ui,
    theme: &Theme,
    rect: egui::Rect,
    title: &str,
    quote: &str,
    attribution: &str,
    opacity: f32,
    scale: f32,
) {
    let center_x = rect.center().x;
    let quote_width = rect.width() * 0.68;
    let quote_size = theme.body_size * 1.35 * scale;

    let quote_galley = italic_galley(ui, quote, quote_size, theme, opacity, quote_width);
    let label_h = theme.small_size * scale;
    let attr_h = theme.small_size * scale;
    let total = label_h + 36.0 * scale + quote_galley.rect.height() + 30.0 * scale + attr_h;
    let mut y = rect.center().y - total / 2.0;

    let spaced: String = title
        .to_uppercase()
        .chars()
        .flat_map(|c| [c, '\u{2009}'])
        .collect();
    y += text::draw_centered(
        ui,
        spaced.trim_end(),
        center_x,
        y,
        theme.small_size * scale,
        Theme::with_opacity(theme.accent, 0.75 * opacity),
        rect.width() * 0.8,
    );
    y += 36.0 * scale;

    // Oversized quotation mark, behind and to the left of the text
    let mark = ui.painter().layout_no_wrap(
        "\u{201C}".to_string(),
        FontId::proportional(140.0 * scale),
        Theme::with_opacity(theme.accent, 0.22 * opacity),
    );
    let mark_pos = Pos2::new(
        center_x - quote_galley.rect.width() / 2.0 - 30.0 * scale,
        y - 56.0 * scale,
    );
    ui.painter().galley(
        mark_pos,
        mark,
        Theme::with_opacity(theme.accent, 0.22 * opacity),
    );

    let quote_color = Theme::with_opacity(theme.foreground, opacity);
    ui.painter()
        .galley(Pos2::new(center_x, y), quote_galley.clone(), quote_color);
    y += quote_galley.rect.height() + 30.0 * scale;

    let attribution = if attribution.starts_with('\u{2014}') {
        attribution.to_string()
    } else {
        format!("\u{2014} {attribution}")
    };
    text::draw_centered(
        ui,
        &attribution,
        center_x,
        y,
        theme.small_size * scale,
        Theme::with_opacity(theme.muted, opacity),
        rect.width() * 0.8,
    );
}

fn italic_galley(
    ui: &egui::Ui,
    quote: &str,
    size: f32,
    theme: &Theme,
    opacity: f32,
    max_width: f32,
) -> std::sync::Arc<egui::Galley> {
    let mut job = egui::text::LayoutJob::default();
    job.wrap.max_width = max_width;
    job.halign = Align::Center;
    job.append(
        quote,
        0.0,
        egui::text::TextFormat {
            font_id: FontId::new(size, FontFamily::Proportional),
            color: Theme::with_opacity(theme.foreground, opacity),
            italics: true,
            ..Default::default()
        },
    );
    ui.painter().layout_job(job)
}
