use eframe::egui::{self, Align, Color32, FontFamily, FontId, Pos2, Rect, Stroke, StrokeKind};

use crate::theme::Theme;

/// Layout a wrapped run of proportional text.
pub fn layout(
    ui: &egui::Ui,
    text: &str,
    size: f32,
    color: Color32,
    max_width: f32,
) -> std::sync::Arc<egui::Galley> {
    let mut job = egui::text::LayoutJob::simple(
        text.to_string(),
        FontId::new(size, FontFamily::Proportional),
        color,
        max_width,
    );
    job.halign = Align::LEFT;
    ui.painter().layout_job(job)
}

fn layout_centered(
    ui: &egui::Ui,
    text: &str,
    size: f32,
    color: Color32,
    max_width: f32,
) -> std::sync::Arc<egui::Galley> {
    let mut job = egui::text::LayoutJob::simple(
        text.to_string(),
        FontId::new(size, FontFamily::Proportional),
        color,
        max_width,
    );
    job.halign = Align::Center;
    ui.painter().layout_job(job)
}

/// Paint wrapped text at `pos` (top-left anchor). Returns the height used.
pub fn draw_wrapped(
    ui: &egui::Ui,
    text: &str,
    pos: Pos2,
    size: f32,
    color: Color32,
    max_width: f32,
) -> f32 {
    let galley = layout(ui, text, size, color, max_width);
    let height = galley.rect.height();
    ui.painter().galley(pos, galley, color);
    height
}

/// Paint wrapped text with each row centered on `center_x`. Returns the
/// height used.
pub fn draw_centered(
    ui: &egui::Ui,
    text: &str,
    center_x: f32,
    y: f32,
    size: f32,
    color: Color32,
    max_width: f32,
) -> f32 {
    let galley = layout_centered(ui, text, size, color, max_width);
    let height = galley.rect.height();
    ui.painter().galley(Pos2::new(center_x, y), galley, color);
    height
}

/// Short horizontal gradient bar, the accent rule under headings.
pub fn gradient_rule(ui: &egui::Ui, rect: Rect, left: Color32, right: Color32) {
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(rect.left_top(), left);
    mesh.colored_vertex(rect.right_top(), right);
    mesh.colored_vertex(rect.left_bottom(), left);
    mesh.colored_vertex(rect.right_bottom(), right);
    mesh.add_triangle(0, 2, 1);
    mesh.add_triangle(1, 2, 3);
    ui.painter().add(egui::Shape::mesh(mesh));
}

/// Rounded pill with centered text. Returns the pill rect for hit-testing.
#[allow(clippy::too_many_arguments)]
pub fn draw_pill(
    ui: &egui::Ui,
    center: Pos2,
    text: &str,
    size: f32,
    text_color: Color32,
    fill: Color32,
    border: Color32,
    scale: f32,
) -> Rect {
    let galley =
        ui.painter()
            .layout_no_wrap(text.to_string(), FontId::proportional(size), text_color);
    let pad = egui::vec2(16.0 * scale, 8.0 * scale);
    let rect = Rect::from_center_size(center, galley.rect.size() + pad * 2.0);
    let radius = rect.height() / 2.0;
    ui.painter().rect_filled(rect, radius, fill);
    ui.painter()
        .rect_stroke(rect, radius, Stroke::new(1.0, border), StrokeKind::Inside);
    let text_pos = Pos2::new(
        rect.center().x - galley.rect.width() / 2.0,
        rect.center().y - galley.rect.height() / 2.0,
    );
    ui.painter().galley(text_pos, galley, text_color);
    rect
}

/// Eyebrow: uppercase tracked label inside a soft accent pill.
pub fn draw_eyebrow(
    ui: &egui::Ui,
    theme: &Theme,
    center: Pos2,
    text: &str,
    opacity: f32,
    scale: f32,
) -> Rect {
    let spaced: String = text.chars().flat_map(|c| [c, '\u{2009}']).collect();
    draw_pill(
        ui,
        center,
        spaced.trim_end(),
        theme.small_size * 0.85 * scale,
        Theme::with_opacity(theme.accent, opacity),
        Theme::with_opacity(theme.pill_fill, opacity),
        Theme::with_opacity(theme.card_border, opacity),
        scale,
    )
}

/// Small rounded badge holding an icon glyph or a fallback number.
#[allow(clippy::too_many_arguments)]
pub fn draw_icon_badge(
    ui: &egui::Ui,
    theme: &Theme,
    rect: Rect,
    icon: Option<&str>,
    fallback_number: usize,
    opacity: f32,
    scale: f32,
) {
    let fill = Theme::with_opacity(theme.pill_fill, opacity);
    let border = Theme::with_opacity(theme.card_border, opacity);
    ui.painter().rect_filled(rect, 10.0 * scale, fill);
    ui.painter().rect_stroke(
        rect,
        10.0 * scale,
        Stroke::new(1.0, border),
        StrokeKind::Inside,
    );

    let (text, color, size) = match icon {
        Some(glyph) => (
            glyph.to_string(),
            Theme::with_opacity(theme.foreground, opacity),
            rect.height() * 0.52,
        ),
        None => (
            fallback_number.to_string(),
            Theme::with_opacity(theme.accent, opacity),
            rect.height() * 0.42,
        ),
    };
    let galley = ui
        .painter()
        .layout_no_wrap(text, FontId::proportional(size), color);
    let pos = Pos2::new(
        rect.center().x - galley.rect.width() / 2.0,
        rect.center().y - galley.rect.height() / 2.0,
    );
    ui.painter().galley(pos, galley, color);
}
