use eframe::egui::{self, Color32, FontId, Pos2, Rect, Shape, Stroke};
use rand::Rng;
use std::f32::consts::TAU;

use crate::theme::Theme;

/// One ambient particle. Positions are fractions of the viewport so the
/// field survives resizes; everything else is seeded once at mount.
pub struct Particle {
    x: f32,
    y: f32,
    size: f32,
    period: f32,
    phase: f32,
    opacity: f32,
    sway: f32,
}

/// Seed the ambient particle field.
pub fn spawn_particles(count: usize) -> Vec<Particle> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| Particle {
            x: rng.random_range(0.02..0.98),
            y: rng.random_range(0.10..0.95),
            size: rng.random_range(4.0..11.0),
            period: rng.random_range(10.0..22.0),
            phase: rng.random_range(0.0..TAU),
            opacity: rng.random_range(0.08..0.22),
            sway: rng.random_range(-30.0..30.0),
        })
        .collect()
}

/// Draw the particle field: a slow vertical drift with a sideways sway.
pub fn draw_particles(ui: &egui::Ui, rect: Rect, particles: &[Particle], t: f32, theme: &Theme) {
    for p in particles {
        let cycle = (t / p.period + p.phase / TAU).fract();
        let rise = 60.0 * cycle;
        let sway = p.sway * (cycle * TAU).sin();
        let pos = Pos2::new(
            rect.left() + p.x * rect.width() + sway,
            rect.top() + p.y * rect.height() - rise,
        );
        // Fade out near the end of each cycle so the wrap is invisible
        let fade = (1.0 - cycle).min(cycle * 4.0).clamp(0.0, 1.0);
        let color = Theme::with_opacity(theme.accent, p.opacity * fade);
        ui.painter().circle_filled(pos, p.size, color);
    }
}

struct Blob {
    cx: f32,
    cy: f32,
    radius: f32,
    period: f32,
    phase: f32,
}

// Mirrors the five-blob mesh wash: corners plus one roaming center blob.
const BLOBS: [Blob; 5] = [
    Blob { cx: 0.05, cy: 0.02, radius: 0.34, period: 14.0, phase: 0.0 },
    Blob { cx: 0.95, cy: 0.30, radius: 0.28, period: 18.0, phase: 1.7 },
    Blob { cx: 0.35, cy: 0.98, radius: 0.31, period: 16.0, phase: 3.1 },
    Blob { cx: 0.52, cy: 0.48, radius: 0.23, period: 20.0, phase: 4.4 },
    Blob { cx: 0.88, cy: 0.88, radius: 0.26, period: 13.0, phase: 5.5 },
];

/// Soft drifting color blobs behind everything. A real gaussian blur is not
/// available from the painter, so each blob is a stack of concentric circles
/// with falling alpha.
pub fn draw_blobs(ui: &egui::Ui, rect: Rect, t: f32, theme: &Theme) {
    let palette = theme.blob_palette();
    let max_alpha = if theme.name == "dark" { 0.20 } else { 0.30 };
    const LAYERS: usize = 6;

    for (i, blob) in BLOBS.iter().enumerate() {
        let wobble = (t * TAU / blob.period + blob.phase).sin();
        let drift_x = wobble * 0.03 * rect.width();
        let drift_y = (t * TAU / blob.period * 0.7 + blob.phase).cos() * 0.025 * rect.height();
        let center = Pos2::new(
            rect.left() + blob.cx * rect.width() + drift_x,
            rect.top() + blob.cy * rect.height() + drift_y,
        );
        let radius = blob.radius * rect.width().min(rect.height() * 1.4);
        let color = palette[i % palette.len()];

        for layer in 0..LAYERS {
            let f = 1.0 - layer as f32 / LAYERS as f32;
            let alpha = max_alpha * f * f / LAYERS as f32 * 2.5;
            ui.painter().circle_filled(
                center,
                radius * (0.55 + 0.45 * (1.0 - f)),
                Theme::with_opacity(color, alpha),
            );
        }
    }
}

/// Faint dot-grid texture over the background wash.
pub fn draw_dot_grid(ui: &egui::Ui, rect: Rect, theme: &Theme) {
    let spacing = 28.0;
    let color = Theme::with_opacity(theme.foreground, 0.05);
    let mut y = rect.top() + 2.0;
    while y < rect.bottom() {
        let mut x = rect.left() + 2.0;
        while x < rect.right() {
            ui.painter().circle_filled(Pos2::new(x, y), 1.4, color);
            x += spacing;
        }
        y += spacing;
    }
}

/// Animated top progress bar with a soft glow under the leading edge.
pub fn draw_progress_bar(ui: &egui::Ui, rect: Rect, fraction: f32, theme: &Theme) {
    let track = Rect::from_min_size(rect.min, egui::vec2(rect.width(), 3.0));
    ui.painter()
        .rect_filled(track, 0.0, Theme::with_opacity(theme.foreground, 0.08));

    let fill = Rect::from_min_size(track.min, egui::vec2(track.width() * fraction, 3.0));
    crate::render::text::gradient_rule(ui, fill, theme.accent, theme.accent_alt);

    let glow = Rect::from_min_size(
        Pos2::new(fill.right() - 24.0, fill.top()),
        egui::vec2(24.0, 3.0),
    );
    ui.painter()
        .rect_filled(glow, 0.0, Theme::with_opacity(theme.accent, 0.5));
}

/// Circular progress ring with a `current/total` label in the middle.
pub fn draw_progress_ring(
    ui: &egui::Ui,
    center: Pos2,
    radius: f32,
    fraction: f32,
    label: &str,
    theme: &Theme,
) {
    ui.painter().circle_filled(
        center,
        radius + 4.0,
        Theme::with_opacity(theme.pill_fill, 0.8),
    );
    ui.painter().circle_stroke(
        center,
        radius,
        Stroke::new(4.0, Theme::with_opacity(theme.foreground, 0.10)),
    );

    // Progress arc, from 12 o'clock clockwise
    let sweep = fraction.clamp(0.0, 1.0) * TAU;
    let steps = (sweep / TAU * 64.0).ceil().max(2.0) as usize;
    let points: Vec<Pos2> = (0..=steps)
        .map(|i| {
            let a = -TAU / 4.0 + sweep * i as f32 / steps as f32;
            Pos2::new(center.x + radius * a.cos(), center.y + radius * a.sin())
        })
        .collect();
    ui.painter()
        .add(Shape::line(points, Stroke::new(4.0, theme.accent)));

    let galley = ui.painter().layout_no_wrap(
        label.to_string(),
        FontId::proportional(radius * 0.42),
        theme.foreground,
    );
    let pos = Pos2::new(
        center.x - galley.rect.width() / 2.0,
        center.y - galley.rect.height() / 2.0,
    );
    ui.painter().galley(pos, galley, theme.foreground);
}

/// Radiating dashed rings with a scatter of dots, used behind final slides.
pub fn draw_radiating_rings(ui: &egui::Ui, center: Pos2, base_radius: f32, t: f32, color: Color32) {
    for i in 0..3 {
        let period = 3.0 + i as f32 * 1.2;
        let cycle = ((t + i as f32 * 0.8) / period).fract();
        let radius = base_radius * (0.45 + 0.55 * cycle) * (1.0 + i as f32 * 0.25);
        let alpha = 0.10 * (1.0 - cycle);
        dashed_circle(ui, center, radius, Theme::with_opacity(color, alpha));
    }

    // Fixed star scatter around the rings
    for i in 0..16 {
        let angle = i as f32 / 16.0 * TAU;
        let r = base_radius * (1.1 + (i % 3) as f32 * 0.18);
        let pos = Pos2::new(center.x + r * angle.cos(), center.y + r * angle.sin());
        let size = if i % 2 == 0 { 2.4 } else { 1.5 };
        ui.painter()
            .circle_filled(pos, size, Theme::with_opacity(color, 0.12));
    }
}

/// Nested shield outline, the watermark behind non-final title slides.
pub fn draw_shield_watermark(ui: &egui::Ui, center: Pos2, height: f32, color: Color32) {
    let faint = Theme::with_opacity(color, 0.05);
    for (scale, width) in [(1.0, 2.0), (0.72, 1.4)] {
        let h = height * scale;
        let w = h * 0.78;
        let top = center.y - h / 2.0;
        // Straight-edged shield: flat shoulders tapering to a bottom point
        let points = vec![
            Pos2::new(center.x, top),
            Pos2::new(center.x + w / 2.0, top + h * 0.14),
            Pos2::new(center.x + w / 2.0, top + h * 0.52),
            Pos2::new(center.x + w * 0.30, top + h * 0.84),
            Pos2::new(center.x, top + h),
            Pos2::new(center.x - w * 0.30, top + h * 0.84),
            Pos2::new(center.x - w / 2.0, top + h * 0.52),
            Pos2::new(center.x - w / 2.0, top + h * 0.14),
            Pos2::new(center.x, top),
        ];
        ui.painter()
            .add(Shape::closed_line(points, Stroke::new(width, faint)));
    }
}

fn dashed_circle(ui: &egui::Ui, center: Pos2, radius: f32, color: Color32) {
    let points: Vec<Pos2> = (0..=96)
        .map(|i| {
            let a = i as f32 / 96.0 * TAU;
            Pos2::new(center.x + radius * a.cos(), center.y + radius * a.sin())
        })
        .collect();
    ui.painter().add(Shape::dashed_line(
        &points,
        Stroke::new(1.2, color),
        6.0,
        8.0,
    ));
}
