use eframe::egui::{self, Pos2, Rect};

use crate::render::{decor, text};
use crate::theme::Theme;

/// Title slide: everything centered in a vertical stack — eyebrow pill,
/// headline, subtitle, and the pulsing accent rule. Final slides get the
/// radiating thank-you decor behind the stack, other title slides a faint
/// shield watermark.
#[allow(clippy::too_many_arguments)]
pub fn render(
    ui: &egui::Ui,
    theme: &Theme,
    rect: egui::Rect,
    title: &str,
    subtitle: &str,
    eyebrow: Option<&str>,
    is_final: bool,
    t: f32,
    opacity: f32,
    scale: f32,
) {
    if is_final {
        decor::draw_radiating_rings(
            ui,
            rect.center(),
            rect.height() * 0.28,
            t,
            theme.accent,
        );
    } else {
        decor::draw_shield_watermark(ui, rect.center(), rect.height() * 0.8, theme.accent);
    }

    let center_x = rect.center().x;
    let max_width = rect.width() * 0.78;

    // Measure the stack first so it can be vertically centered
    let title_galley = text::layout(
        ui,
        title,
        theme.title_size * scale,
        theme.heading_color,
        max_width,
    );
    let subtitle_galley = text::layout(
        ui,
        subtitle,
        theme.body_size * 1.1 * scale,
        theme.muted,
        max_width * 0.85,
    );
    let eyebrow_height = if eyebrow.is_some() { 60.0 * scale } else { 0.0 };
    let rule_height = 28.0 * scale;
    let total = eyebrow_height
        + title_galley.rect.height()
        + 22.0 * scale
        + subtitle_galley.rect.height()
        + rule_height;

    let mut y = rect.center().y - total / 2.0;

    if let Some(eyebrow) = eyebrow {
        text::draw_eyebrow(
            ui,
            theme,
            Pos2::new(center_x, y + 18.0 * scale),
            &eyebrow.to_uppercase(),
            opacity,
            scale,
        );
        y += eyebrow_height;
    }

    y += text::draw_centered(
        ui,
        title,
        center_x,
        y,
        theme.title_size * scale,
        Theme::with_opacity(theme.heading_color, opacity),
        max_width,
    );
    y += 22.0 * scale;

    y += text::draw_centered(
        ui,
        subtitle,
        center_x,
        y,
        theme.body_size * 1.1 * scale,
        Theme::with_opacity(theme.muted, opacity),
        max_width * 0.85,
    );
    y += 20.0 * scale;

    // Accent rule with a slow glow pulse
    let pulse = 0.6 + 0.4 * (t * 2.0).sin().abs();
    let rule = Rect::from_center_size(
        Pos2::new(center_x, y + 4.0 * scale),
        egui::vec2(80.0 * scale, 6.0 * scale),
    );
    ui.painter().rect_filled(
        rule.expand(5.0 * scale),
        8.0 * scale,
        Theme::with_opacity(theme.accent, 0.18 * pulse * opacity),
    );
    text::gradient_rule(
        ui,
        rule,
        Theme::with_opacity(theme.accent, opacity),
        Theme::with_opacity(theme.accent_alt, opacity),
    );
}
