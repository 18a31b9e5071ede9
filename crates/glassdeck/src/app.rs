use eframe::egui;
use std::path::PathBuf;
use std::time::Instant;

use crate::config::Config;
use crate::deck::Deck;
use crate::nav::{Direction, Navigator};
use crate::render::decor::{self, Particle};
use crate::render::image_cache::ImageCache;
use crate::render::{self, text};
use crate::theme::Theme;

const ENTER_DURATION: f32 = 0.45;
const HINT_VISIBLE_SECS: f32 = 4.0;
const HINT_FADE_SECS: f32 = 0.7;
const PARTICLE_COUNT: usize = 32;
const CARD_ROUNDING: f32 = 24.0;

/// One-shot keyboard hint shown on mount; owned by the app so teardown
/// cancels it implicitly.
struct HintToast {
    start: Instant,
}

impl HintToast {
    fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    fn opacity(&self) -> f32 {
        let elapsed = self.start.elapsed().as_secs_f32();
        if elapsed < HINT_VISIBLE_SECS {
            1.0
        } else {
            (1.0 - (elapsed - HINT_VISIBLE_SECS) / HINT_FADE_SECS).max(0.0)
        }
    }

    fn is_expired(&self) -> bool {
        self.start.elapsed().as_secs_f32() >= HINT_VISIBLE_SECS + HINT_FADE_SECS
    }
}

struct ViewerApp {
    deck: Deck,
    nav: Navigator,
    theme: Theme,
    images: ImageCache,
    /// Path of the image currently shown full-screen, if any.
    lightbox: Option<String>,
    hint: Option<HintToast>,
    particles: Vec<Particle>,
    started: Instant,
    /// Restarted whenever the navigator's epoch changes; drives the card's
    /// enter animation.
    enter_start: Instant,
    last_epoch: u64,
    last_esc: Option<Instant>,
    toast_msg: Option<(String, Instant)>,
}

impl ViewerApp {
    fn new(deck: Deck, base_path: PathBuf, theme: Theme, show_hint: bool) -> Self {
        let nav = Navigator::new(deck.len());
        let now = Instant::now();
        Self {
            deck,
            nav,
            theme,
            images: ImageCache::new(base_path),
            lightbox: None,
            hint: show_hint.then(HintToast::new),
            particles: decor::spawn_particles(PARTICLE_COUNT),
            started: now,
            enter_start: now,
            last_epoch: 0,
            last_esc: None,
            toast_msg: None,
        }
    }

    fn enter_t(&self) -> f32 {
        self.enter_start.elapsed().as_secs_f32()
    }

    /// Eased progress of the card enter animation in `[0, 1]`.
    fn enter_progress(&self) -> f32 {
        let raw = (self.enter_t() / ENTER_DURATION).clamp(0.0, 1.0);
        1.0 - (1.0 - raw) * (1.0 - raw)
    }

    /// Escape closes an open lightbox and otherwise arms a double-tap exit:
    /// a second press within a second returns true, telling the caller to
    /// close the window. Never touches the navigator.
    fn on_escape(&mut self) -> bool {
        if self.lightbox.is_some() {
            self.lightbox = None;
            self.last_esc = None;
            return false;
        }
        if let Some(last) = self.last_esc {
            if last.elapsed().as_secs_f32() < 1.0 {
                return true;
            }
        }
        self.last_esc = Some(Instant::now());
        self.toast_msg = Some(("Press Esc again to exit".to_string(), Instant::now()));
        false
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.toast_msg = Some((format!("Theme: {}", self.theme.name), Instant::now()));
    }

    fn compute_scale(rect: egui::Rect) -> f32 {
        let ref_w = 1920.0;
        let ref_h = 1080.0;
        (rect.width() / ref_w).min(rect.height() / ref_h)
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        // Collect viewport commands and send after the input closure
        // (sending inside ctx.input() deadlocks the context lock)
        let mut viewport_cmds: Vec<egui::ViewportCommand> = Vec::new();

        ctx.input(|i| {
            if i.key_pressed(egui::Key::Q) {
                viewport_cmds.push(egui::ViewportCommand::Close);
                return;
            }

            if i.key_pressed(egui::Key::Escape) {
                if self.on_escape() {
                    viewport_cmds.push(egui::ViewportCommand::Close);
                }
                return;
            }

            if i.key_pressed(egui::Key::F) {
                viewport_cmds.push(egui::ViewportCommand::Fullscreen(
                    !i.viewport().fullscreen.unwrap_or(false),
                ));
                return;
            }

            if i.key_pressed(egui::Key::D) {
                self.toggle_theme();
                return;
            }

            // Slide navigation is suspended while the lightbox is open
            if self.lightbox.is_some() {
                return;
            }

            if i.key_pressed(egui::Key::ArrowRight)
                || i.key_pressed(egui::Key::Space)
                || i.key_pressed(egui::Key::N)
            {
                self.nav.next();
            }
            if i.key_pressed(egui::Key::ArrowLeft) || i.key_pressed(egui::Key::P) {
                self.nav.prev();
            }
            if i.key_pressed(egui::Key::Home) {
                self.nav.go_to(0, None);
            }
            if i.key_pressed(egui::Key::End) {
                self.nav.go_to(self.nav.len() as isize - 1, None);
            }
        });

        for cmd in viewport_cmds {
            ctx.send_viewport_cmd(cmd);
        }
    }

    fn draw_card(&mut self, ui: &egui::Ui, rect: egui::Rect, scale: f32) {
        let progress = self.enter_progress();
        let sign = match self.nav.direction() {
            Direction::Next => 1.0,
            Direction::Prev => -1.0,
        };
        let offset = sign * (1.0 - progress) * 60.0 * scale;
        let opacity = progress;

        let card = egui::Rect::from_center_size(
            rect.center() + egui::vec2(offset, 0.0),
            egui::vec2(rect.width() * 0.82, rect.height() * 0.74),
        );
        let rounding = CARD_ROUNDING * scale;

        // Drop shadow, card fill, border
        ui.painter().rect_filled(
            card.translate(egui::vec2(0.0, 10.0 * scale)),
            rounding,
            Theme::with_opacity(self.theme.accent, 0.10 * opacity),
        );
        ui.painter().rect_filled(
            card,
            rounding,
            Theme::with_opacity(self.theme.card_fill, opacity),
        );
        ui.painter().rect_stroke(
            card,
            rounding,
            egui::Stroke::new(1.5, Theme::with_opacity(self.theme.card_border, opacity)),
            egui::StrokeKind::Inside,
        );

        let slide = &self.deck.slides[self.nav.current()];

        // Per-variant top color band
        let (band_l, band_r) = self.theme.band_colors(slide.kind());
        let band = egui::Rect::from_min_size(
            egui::pos2(card.left() + rounding, card.top()),
            egui::vec2(card.width() - rounding * 2.0, 6.0 * scale),
        );
        text::gradient_rule(
            ui,
            band,
            Theme::with_opacity(band_l, opacity),
            Theme::with_opacity(band_r, opacity),
        );

        // Category badge, top-right
        let (badge_fill, badge_text) = self.theme.badge_colors(slide.kind());
        let label: String = slide
            .badge_label()
            .to_uppercase()
            .chars()
            .flat_map(|c| [c, '\u{2009}'])
            .collect();
        text::draw_pill(
            ui,
            egui::pos2(card.right() - 110.0 * scale, card.top() + 34.0 * scale),
            label.trim_end(),
            self.theme.small_size * 0.7 * scale,
            Theme::with_opacity(badge_text, opacity),
            Theme::with_opacity(badge_fill, opacity),
            Theme::with_opacity(self.theme.card_border, opacity),
            scale,
        );

        // Branding strip along the card bottom
        if let Some(footer) = &self.deck.footer {
            let strip_top = card.bottom() - 28.0 * scale;
            ui.painter().line_segment(
                [
                    egui::pos2(card.left() + rounding, strip_top),
                    egui::pos2(card.right() - rounding, strip_top),
                ],
                egui::Stroke::new(
                    1.0,
                    Theme::with_opacity(self.theme.card_border, 0.6 * opacity),
                ),
            );
            let spaced: String = footer
                .to_uppercase()
                .chars()
                .flat_map(|c| [c, '\u{2009}'])
                .collect();
            text::draw_centered(
                ui,
                spaced.trim_end(),
                card.center().x,
                strip_top + 8.0 * scale,
                self.theme.small_size * 0.6 * scale,
                Theme::with_opacity(self.theme.muted, 0.55 * opacity),
                card.width(),
            );
        }

        // Slide content inside the card, clear of band and strip
        let content = egui::Rect::from_min_max(
            egui::pos2(card.left() + 16.0 * scale, card.top() + 10.0 * scale),
            egui::pos2(card.right() - 16.0 * scale, card.bottom() - 30.0 * scale),
        );
        if let Some(path) = render::render_slide(
            ui,
            slide,
            &self.theme,
            content,
            opacity,
            &self.images,
            self.enter_t(),
            scale,
        ) {
            self.lightbox = Some(path);
        }
    }

    fn draw_chrome(&mut self, ui: &egui::Ui, rect: egui::Rect, scale: f32) {
        decor::draw_progress_bar(
            ui,
            rect,
            (self.nav.current() + 1) as f32 / self.nav.len() as f32,
            &self.theme,
        );

        decor::draw_progress_ring(
            ui,
            egui::pos2(rect.right() - 56.0 * scale, rect.top() + 56.0 * scale),
            30.0 * scale,
            (self.nav.current() + 1) as f32 / self.nav.len() as f32,
            &format!("{}/{}", self.nav.current() + 1, self.nav.len()),
            &self.theme,
        );

        // Outbound affordance: the host resolves "back to dashboard" by
        // closing the viewer window.
        let dash = text::draw_pill(
            ui,
            egui::pos2(rect.left() + 90.0 * scale, rect.top() + 40.0 * scale),
            "\u{2190} Dashboard",
            self.theme.small_size * 0.85 * scale,
            self.theme.foreground,
            self.theme.pill_fill,
            self.theme.card_border,
            scale,
        );
        if ui
            .interact(dash, ui.id().with("dashboard"), egui::Sense::click())
            .clicked()
        {
            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
        }

        self.draw_nav_row(ui, rect, scale);
        self.draw_hint(ui, rect, scale);
        self.draw_toast(ui, rect, scale);
    }

    /// Prev / dots / next row along the bottom edge.
    fn draw_nav_row(&mut self, ui: &egui::Ui, rect: egui::Rect, scale: f32) {
        let center = egui::pos2(rect.center().x, rect.bottom() - 44.0 * scale);
        let count = self.nav.len();

        // Dots pill, centered
        let active_w = 22.0 * scale;
        let dot_w = 8.0 * scale;
        let gap = 8.0 * scale;
        let dots_width =
            active_w + (count - 1) as f32 * dot_w + (count - 1) as f32 * gap + 32.0 * scale;
        let dots_rect = egui::Rect::from_center_size(
            center,
            egui::vec2(dots_width, 30.0 * scale),
        );
        let radius = dots_rect.height() / 2.0;
        ui.painter()
            .rect_filled(dots_rect, radius, self.theme.pill_fill);
        ui.painter().rect_stroke(
            dots_rect,
            radius,
            egui::Stroke::new(1.0, self.theme.card_border),
            egui::StrokeKind::Inside,
        );

        let mut x = dots_rect.left() + 16.0 * scale;
        for i in 0..count {
            let is_current = i == self.nav.current();
            let w = if is_current { active_w } else { dot_w };
            let dot = egui::Rect::from_min_size(
                egui::pos2(x, center.y - 4.0 * scale),
                egui::vec2(w, 8.0 * scale),
            );
            let hit = dot.expand(4.0 * scale);
            let response = ui.interact(hit, ui.id().with(("dot", i)), egui::Sense::click());
            let color = if is_current {
                self.theme.accent
            } else if response.hovered() {
                Theme::with_opacity(self.theme.foreground, 0.45)
            } else {
                Theme::with_opacity(self.theme.foreground, 0.25)
            };
            if is_current {
                text::gradient_rule(ui, dot, self.theme.accent, self.theme.accent_alt);
            } else {
                ui.painter().rect_filled(dot, 4.0 * scale, color);
            }
            if response.clicked() {
                self.nav.go_to(i as isize, None);
            }
            x += w + gap;
        }

        // Prev / next pills flanking the dots
        let prev_center = egui::pos2(
            dots_rect.left() - 70.0 * scale,
            center.y,
        );
        let next_center = egui::pos2(dots_rect.right() + 70.0 * scale, center.y);

        let prev_enabled = !self.nav.is_first();
        let next_enabled = !self.nav.is_last();
        let pill_opacity = |enabled: bool| if enabled { 1.0 } else { 0.3 };

        let prev_rect = text::draw_pill(
            ui,
            prev_center,
            "\u{2190} Prev",
            self.theme.small_size * 0.9 * scale,
            Theme::with_opacity(self.theme.foreground, pill_opacity(prev_enabled)),
            Theme::with_opacity(self.theme.pill_fill, pill_opacity(prev_enabled)),
            Theme::with_opacity(self.theme.card_border, pill_opacity(prev_enabled)),
            scale,
        );
        if prev_enabled
            && ui
                .interact(prev_rect, ui.id().with("prev"), egui::Sense::click())
                .clicked()
        {
            self.nav.prev();
        }

        let next_rect = text::draw_pill(
            ui,
            next_center,
            "Next \u{2192}",
            self.theme.small_size * 0.9 * scale,
            Theme::with_opacity(self.theme.foreground, pill_opacity(next_enabled)),
            Theme::with_opacity(self.theme.pill_fill, pill_opacity(next_enabled)),
            Theme::with_opacity(self.theme.card_border, pill_opacity(next_enabled)),
            scale,
        );
        if next_enabled
            && ui
                .interact(next_rect, ui.id().with("next"), egui::Sense::click())
                .clicked()
        {
            self.nav.next();
        }
    }

    fn draw_hint(&mut self, ui: &egui::Ui, rect: egui::Rect, scale: f32) {
        if self.hint.as_ref().is_some_and(|h| h.is_expired()) {
            self.hint = None;
        }
        let Some(hint) = &self.hint else { return };
        let opacity = hint.opacity();
        if opacity <= 0.0 {
            return;
        }
        text::draw_pill(
            ui,
            egui::pos2(rect.center().x, rect.bottom() - 92.0 * scale),
            "Use \u{2190} \u{2192} arrow keys or spacebar to navigate",
            self.theme.small_size * 0.8 * scale,
            Theme::with_opacity(self.theme.muted, opacity),
            Theme::with_opacity(self.theme.pill_fill, opacity),
            Theme::with_opacity(self.theme.card_border, opacity),
            scale,
        );
    }

    fn draw_toast(&mut self, ui: &egui::Ui, rect: egui::Rect, scale: f32) {
        if let Some((_, start)) = &self.toast_msg {
            if start.elapsed().as_secs_f32() > 1.5 {
                self.toast_msg = None;
            }
        }
        let Some((msg, start)) = &self.toast_msg else {
            return;
        };
        let elapsed = start.elapsed().as_secs_f32();
        let opacity = if elapsed < 1.0 {
            1.0
        } else {
            (1.0 - (elapsed - 1.0) / 0.5).max(0.0)
        };
        text::draw_pill(
            ui,
            egui::pos2(rect.center().x, rect.top() + 60.0 * scale),
            msg,
            self.theme.small_size * 0.9 * scale,
            Theme::with_opacity(self.theme.foreground, opacity),
            Theme::with_opacity(self.theme.pill_fill, opacity),
            Theme::with_opacity(self.theme.card_border, opacity),
            scale,
        );
    }

    /// Full-screen image overlay. Closed by Escape, the close button, or a
    /// click on the backdrop; never touches the navigator.
    fn draw_lightbox(&mut self, ui: &egui::Ui, rect: egui::Rect, scale: f32) {
        let Some(path) = self.lightbox.clone() else {
            return;
        };

        ui.painter()
            .rect_filled(rect, 0.0, egui::Color32::from_black_alpha(150));

        let backdrop = ui.interact(rect, ui.id().with("lightbox_bg"), egui::Sense::click());

        let mut image_rect = egui::Rect::from_center_size(
            rect.center(),
            rect.size() * 0.6,
        );
        if let Some(texture) = self.images.get(ui.ctx(), &path) {
            let tex_size = texture.size_vec2();
            let max = rect.size() * 0.85;
            let fit = (max.x / tex_size.x).min(max.y / tex_size.y);
            image_rect = egui::Rect::from_center_size(rect.center(), tex_size * fit);
            ui.painter().image(
                texture.id(),
                image_rect,
                egui::Rect::from_min_max(egui::Pos2::ZERO, egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        } else {
            text::draw_centered(
                ui,
                &path,
                rect.center().x,
                rect.center().y,
                self.theme.body_size * scale,
                egui::Color32::from_gray(200),
                rect.width() * 0.8,
            );
        }
        ui.painter().rect_stroke(
            image_rect,
            8.0 * scale,
            egui::Stroke::new(1.5, egui::Color32::from_white_alpha(50)),
            egui::StrokeKind::Outside,
        );

        // Close button hanging off the image's top-right corner
        let btn_center = image_rect.right_top() + egui::vec2(6.0 * scale, -6.0 * scale);
        let btn_r = 16.0 * scale;
        ui.painter()
            .circle_filled(btn_center, btn_r, egui::Color32::from_white_alpha(230));
        let cross = ui.painter().layout_no_wrap(
            "\u{2715}".to_string(),
            egui::FontId::proportional(15.0 * scale),
            egui::Color32::from_gray(70),
        );
        ui.painter().galley(
            btn_center - cross.rect.size() / 2.0,
            cross,
            egui::Color32::from_gray(70),
        );
        let btn_rect = egui::Rect::from_center_size(btn_center, egui::vec2(btn_r, btn_r) * 2.0);
        let close_clicked = ui
            .interact(btn_rect, ui.id().with("lightbox_close"), egui::Sense::click())
            .clicked();

        let backdrop_clicked = backdrop.clicked()
            && backdrop
                .interact_pointer_pos()
                .is_some_and(|p| !image_rect.contains(p) && !btn_rect.contains(p));

        if close_clicked || backdrop_clicked {
            self.lightbox = None;
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        // A bumped epoch means a navigation was accepted: restart the enter
        // animation from the new direction.
        if self.nav.epoch() != self.last_epoch {
            self.last_epoch = self.nav.epoch();
            self.enter_start = Instant::now();
        }

        let t = self.started.elapsed().as_secs_f32();
        let bg = self.theme.background;

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(bg).inner_margin(0.0))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let scale = Self::compute_scale(rect);

                ui.painter().rect_filled(rect, 0.0, bg);
                decor::draw_blobs(ui, rect, t, &self.theme);
                decor::draw_dot_grid(ui, rect, &self.theme);
                decor::draw_particles(ui, rect, &self.particles, t, &self.theme);

                self.draw_card(ui, rect, scale);
                self.draw_chrome(ui, rect, scale);
                self.draw_lightbox(ui, rect, scale);
            });

        // The background field animates continuously
        ctx.request_repaint_after(std::time::Duration::from_millis(16));
    }
}

/// Launch the viewer. With no file the embedded sample deck is shown.
pub fn run(
    file: Option<PathBuf>,
    windowed: bool,
    start_slide: Option<usize>,
    theme_override: Option<String>,
) -> anyhow::Result<()> {
    let (deck, base_path) = match &file {
        Some(path) => {
            let deck = Deck::from_path(path)?;
            let base = path
                .parent()
                .unwrap_or(std::path::Path::new("."))
                .to_path_buf();
            (deck, base)
        }
        None => (Deck::builtin(), PathBuf::from(".")),
    };

    let config = Config::load_or_default();
    let defaults = config.defaults.unwrap_or_default();
    let theme_name = theme_override
        .or_else(|| deck.theme.clone())
        .or_else(|| defaults.theme.clone())
        .unwrap_or_else(|| "warm".to_string());
    let theme = Theme::from_name(&theme_name);
    let show_hint = defaults.show_hint.unwrap_or(true);

    let title = deck.display_title().to_string();
    let slide_count = deck.len();

    let viewport = if windowed {
        egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_title(&title)
    } else {
        egui::ViewportBuilder::default()
            .with_fullscreen(true)
            .with_title(&title)
    };

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    // --slide N is 1-indexed; anything out of range clamps like any other
    // navigation request
    let initial = start_slide
        .or(defaults.start_slide)
        .map(|s| s.saturating_sub(1))
        .unwrap_or(0);
    let initial = initial.min(slide_count.saturating_sub(1));

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| {
            let mut app = ViewerApp::new(deck, base_path, theme, show_hint);
            if initial > 0 {
                app.nav.go_to(initial as isize, Some(Direction::Next));
            }
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> ViewerApp {
        ViewerApp::new(
            Deck::builtin(),
            PathBuf::from("."),
            Theme::warm(),
            false,
        )
    }

    #[test]
    fn escape_closes_lightbox_without_moving() {
        let mut app = test_app();
        app.nav.go_to(2, None);
        app.lightbox = Some("images/speaker.jpg".to_string());
        let (index, epoch) = (app.nav.current(), app.nav.epoch());

        let quit = app.on_escape();

        assert!(!quit);
        assert!(app.lightbox.is_none());
        assert_eq!(app.nav.current(), index);
        assert_eq!(app.nav.epoch(), epoch);
    }

    #[test]
    fn double_escape_requests_exit() {
        let mut app = test_app();
        assert!(!app.on_escape());
        assert!(app.on_escape());
    }

    #[test]
    fn closing_lightbox_disarms_the_exit_tap() {
        let mut app = test_app();
        app.lightbox = Some("images/speaker.jpg".to_string());
        assert!(!app.on_escape());
        // The press that dismissed the overlay must not count toward exit
        assert!(!app.on_escape());
        assert!(app.on_escape());
    }
}
