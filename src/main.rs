//! geo-bg - Portfolio page with an animated geometric background
//!
//! The window shows a small portfolio page (project showcase, contact
//! form, stat counters) in front of a slowly drifting field of outlined
//! shapes, connected by faint lines when they pass close to each other.
//!
//! ## Layers
//! - Background: dot grid, connection lines and shapes, drawn by
//!   `BackgroundAnimator` through an egui-backed `Surface`
//! - Page: regular egui panels with transparent fills
//! - Foreground: cursor ring

use std::time::Duration;

use eframe::egui;
use nalgebra::{Point2, Vector2};

mod background;
mod effects;
mod render;
mod settings;
mod shapes;
mod showcase;

use background::{BackgroundAnimator, RepaintScheduler, Viewport, MAX_SHAPES};
use effects::{active_section, scroll_progress, Counter, CursorRing, Tilt};
use render::EguiSurface;
use settings::AppSettings;
use shapes::ShapeKind;
use showcase::{
    catalog, ContactForm, FieldError, MailtoOutbox, ModalKey, ProjectModal, CONTACT_ADDRESS,
};

/// Page background behind the shapes
const PAGE_COLOR: egui::Color32 = egui::Color32::from_rgb(12, 18, 32);
const ACCENT: egui::Color32 = egui::Color32::from_rgb(96, 130, 182);

/// Stat labels counted up on launch, with captions
const STATS: &[(&str, &str)] = &[
    ("3+", "Projects"),
    ("2+", "Years learning"),
    ("8.5", "CGPA"),
    ("∞", "Curiosity"),
];

/// Page sections, in scroll order, linked from the top bar
const SECTIONS: &[&str] = &["About", "Projects", "Contact"];

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting geo-bg");

    let settings = AppSettings::load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window_width, settings.window_height])
            .with_title("geo-bg"),
        ..Default::default()
    };

    eframe::run_native(
        "geo-bg",
        options,
        Box::new(|cc| Ok(Box::new(PortfolioApp::new(cc, settings)))),
    )
}

/// Lifecycle of the background layer
enum BackgroundState {
    /// Waiting for the first frame with a known window size
    Pending,
    Active(BackgroundAnimator<RepaintScheduler>),
    /// Setup failed; the page runs without a background
    Disabled,
}

/// A stat number and its caption
struct Stat {
    raw: &'static str,
    caption: &'static str,
    counter: Option<Counter>,
}

/// Main application state
struct PortfolioApp {
    settings: AppSettings,
    background: BackgroundState,
    show_settings: bool,

    modal: ProjectModal,
    swipe_start: Option<f32>,

    contact: ContactForm,
    outbox: MailtoOutbox,

    stats: Vec<Stat>,
    stats_started: bool,
    /// Hero card bounds from the last frame, for the tilt
    hero_rect: Option<egui::Rect>,
    ring: CursorRing,
    scroll_pct: f32,
    active_section: Option<usize>,
    scroll_to: Option<usize>,
}

impl PortfolioApp {
    fn new(cc: &eframe::CreationContext<'_>, settings: AppSettings) -> Self {
        let mut visuals = egui::Visuals::dark();
        // The cursor ring keys its hover state off this icon
        visuals.interact_cursor = Some(egui::CursorIcon::PointingHand);
        cc.egui_ctx.set_visuals(visuals);

        Self {
            settings,
            background: BackgroundState::Pending,
            show_settings: false,
            modal: ProjectModal::new(),
            swipe_start: None,
            contact: ContactForm::new(),
            outbox: MailtoOutbox::new(cc.egui_ctx.clone(), CONTACT_ADDRESS),
            stats: STATS
                .iter()
                .map(|&(raw, caption)| Stat { raw, caption, counter: None })
                .collect(),
            stats_started: false,
            hero_rect: None,
            ring: CursorRing::new(),
            scroll_pct: 0.0,
            active_section: None,
            scroll_to: None,
        }
    }

    /// Build a fresh animator on the next frame
    fn rebuild_background(&mut self) {
        if let BackgroundState::Active(animator) = &mut self.background {
            animator.stop();
        }
        self.background = BackgroundState::Pending;
    }

    /// Create, resize and render the background layer
    fn paint_background(&mut self, ctx: &egui::Context) {
        let rect = ctx.screen_rect();

        if let BackgroundState::Pending = self.background {
            let created = Viewport::new(rect.width(), rect.height()).and_then(|viewport| {
                BackgroundAnimator::from_config(
                    &self.settings.animator_config(),
                    viewport,
                    RepaintScheduler::new(ctx.clone()),
                )
            });
            self.background = match created {
                Ok(mut animator) => {
                    animator.start();
                    BackgroundState::Active(animator)
                }
                Err(e) => {
                    log::warn!("Background disabled: {}", e);
                    BackgroundState::Disabled
                }
            };
        }

        if let BackgroundState::Active(animator) = &mut self.background {
            match Viewport::new(rect.width(), rect.height()) {
                Ok(viewport) => {
                    animator.resize(viewport);
                    self.settings.window_width = viewport.width;
                    self.settings.window_height = viewport.height;
                }
                // Minimized windows report an empty rect; keep the last size
                Err(e) => log::trace!("Ignoring resize: {}", e),
            }

            let painter = ctx.layer_painter(egui::LayerId::background());
            let mut surface = EguiSurface::new(&painter, rect.min).with_background(PAGE_COLOR);
            animator.frame(&mut surface);
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        let keys = [
            (egui::Key::Escape, ModalKey::Escape),
            (egui::Key::ArrowLeft, ModalKey::Left),
            (egui::Key::ArrowRight, ModalKey::Right),
        ];
        for (key, modal_key) in keys {
            if ctx.input(|i| i.key_pressed(key)) {
                self.modal.handle_key(modal_key);
            }
        }
    }

    fn paint_cursor_ring(&mut self, ctx: &egui::Context) {
        if !self.settings.cursor_ring {
            return;
        }

        let pointer = ctx
            .input(|i| i.pointer.hover_pos())
            .map(|p| Point2::new(p.x, p.y));
        let hovered = ctx.output(|o| o.cursor_icon == egui::CursorIcon::PointingHand);
        self.ring.update(pointer, hovered);

        if let Some(p) = self.ring.position() {
            let painter = ctx.layer_painter(egui::LayerId::new(
                egui::Order::Foreground,
                egui::Id::new("cursor_ring"),
            ));
            painter.circle_stroke(
                egui::pos2(p.x, p.y),
                self.ring.radius(),
                egui::Stroke::new(1.5, ACCENT.gamma_multiply(0.7)),
            );
        }
        if self.ring.is_settling(pointer, hovered) {
            ctx.request_repaint();
        }
    }

    fn settings_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("settings_panel")
            .min_width(220.0)
            .show(ctx, |ui| {
                ui.heading("Background");
                ui.separator();

                if ui
                    .add(
                        egui::Slider::new(&mut self.settings.shape_count, 0..=MAX_SHAPES)
                            .text("Shapes"),
                    )
                    .changed()
                {
                    self.rebuild_background();
                }

                let mut fixed_seed = self.settings.seed.is_some();
                if ui.checkbox(&mut fixed_seed, "Fixed layout").changed() {
                    self.settings.seed = fixed_seed.then_some(0);
                    self.rebuild_background();
                }
                if let Some(seed) = &mut self.settings.seed {
                    if ui.add(egui::DragValue::new(seed).prefix("Seed ")).changed() {
                        self.rebuild_background();
                    }
                }

                let grid_changed = ui.checkbox(&mut self.settings.show_grid, "Dot grid").changed();
                let lines_changed = ui
                    .checkbox(&mut self.settings.show_connections, "Connections")
                    .changed();
                if grid_changed || lines_changed {
                    if let BackgroundState::Active(animator) = &mut self.background {
                        animator.set_show_grid(self.settings.show_grid);
                        animator.set_show_connections(self.settings.show_connections);
                    }
                }

                ui.separator();
                ui.checkbox(&mut self.settings.cursor_ring, "Cursor ring");

                ui.separator();
                match &self.background {
                    BackgroundState::Active(animator) => {
                        let status = if animator.is_running() { "Running" } else { "Stopped" };
                        ui.small(format!("{}, {} frames", status, animator.frame_count()));
                        let Viewport { width, height } = animator.viewport();
                        ui.small(format!("Viewport: {:.0}x{:.0}", width, height));

                        for kind in ShapeKind::all() {
                            let count =
                                animator.shapes().iter().filter(|s| s.kind() == *kind).count();
                            ui.small(format!("{}: {}", kind.name(), count));
                        }
                    }
                    BackgroundState::Pending => {
                        ui.small("Starting…");
                    }
                    BackgroundState::Disabled => {
                        ui.small("Background unavailable");
                    }
                }
            });
    }

    /// Intro card with the stat counters; tilts toward the pointer
    fn hero(&mut self, ui: &mut egui::Ui, now: f64) {
        let pointer = ui
            .ctx()
            .input(|i| i.pointer.hover_pos())
            .map(|p| Point2::new(p.x, p.y));
        let tilt = match self.hero_rect {
            Some(rect) => Tilt::toward(
                pointer,
                Point2::new(rect.min.x, rect.min.y),
                Vector2::new(rect.width(), rect.height()),
            ),
            None => Tilt::default(),
        };
        let offset = tilt.shadow_offset();
        let shadow = egui::Shadow {
            offset: egui::vec2(offset.x, offset.y),
            blur: 18.0,
            spread: 0.0,
            color: egui::Color32::from_black_alpha(if tilt.active { 140 } else { 60 }),
        };

        let card = egui::Frame::group(ui.style())
            .fill(PAGE_COLOR.gamma_multiply(0.85))
            .inner_margin(20.0)
            .shadow(shadow)
            .show(ui, |ui| {
                ui.label(
                    egui::RichText::new("Full Stack Developer & Trainer")
                        .size(32.0)
                        .strong(),
                );
                ui.label("Building clean, responsive web experiences.");
                ui.add_space(16.0);
                self.stats_row(ui, now);
            });
        self.hero_rect = Some(card.response.rect);
    }

    /// Whether any stat is still counting up
    fn counters_running(&self, now: f64) -> bool {
        self.stats
            .iter()
            .filter_map(|stat| stat.counter.as_ref())
            .any(|counter| !counter.is_finished(now))
    }

    fn stats_row(&mut self, ui: &mut egui::Ui, now: f64) {
        if !self.stats_started {
            for stat in &mut self.stats {
                stat.counter = Counter::parse(stat.raw, now);
            }
            self.stats_started = true;
        }

        ui.horizontal(|ui| {
            for stat in &self.stats {
                ui.vertical(|ui| {
                    let label = match &stat.counter {
                        Some(counter) => counter.label(now),
                        None => stat.raw.to_string(),
                    };
                    ui.label(egui::RichText::new(label).size(28.0).strong().color(ACCENT));
                    ui.small(stat.caption);
                });
                ui.add_space(24.0);
            }
        });
    }

    fn projects_grid(&mut self, ui: &mut egui::Ui) {
        ui.heading("Projects");
        ui.add_space(8.0);

        ui.horizontal_wrapped(|ui| {
            for (i, project) in catalog().iter().enumerate() {
                let card = egui::Frame::group(ui.style())
                    .fill(PAGE_COLOR.gamma_multiply(0.85))
                    .show(ui, |ui| {
                        ui.set_width(240.0);
                        ui.label(egui::RichText::new(project.slides[0]).size(32.0));
                        ui.strong(project.title);
                        ui.small(project.tags.join(" · "));
                    });
                let response = card.response.interact(egui::Sense::click());
                if response.on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
                    self.modal.open(i);
                }
            }
        });
    }

    fn project_modal(&mut self, ctx: &egui::Context) {
        let Some(project) = self.modal.project() else {
            return;
        };

        let mut open = true;
        egui::Window::new(project.title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.set_max_width(420.0);

                let (rect, response) =
                    ui.allocate_exact_size(egui::vec2(420.0, 160.0), egui::Sense::drag());
                ui.painter().rect_filled(rect, 8.0, PAGE_COLOR);
                if let Some(slide) = self.modal.slide() {
                    ui.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        slide,
                        egui::FontId::proportional(64.0),
                        egui::Color32::WHITE,
                    );
                }

                let pointer_x = ctx.input(|i| i.pointer.interact_pos()).map(|p| p.x);
                if response.drag_started() {
                    self.swipe_start = pointer_x;
                }
                if response.drag_stopped() {
                    if let (Some(start), Some(end)) = (self.swipe_start.take(), pointer_x) {
                        self.modal.carousel.swipe(start, end);
                    }
                }

                ui.horizontal(|ui| {
                    if ui.button("◀").clicked() {
                        self.modal.carousel.prev();
                    }
                    ui.label(self.modal.carousel.counter_label());
                    if ui.button("▶").clicked() {
                        self.modal.carousel.next();
                    }
                });

                ui.separator();
                ui.label(project.description);
                ui.horizontal_wrapped(|ui| {
                    for tag in project.tags {
                        ui.label(egui::RichText::new(*tag).small().color(ACCENT));
                    }
                });

                ui.horizontal(|ui| {
                    if let Some(demo) = project.demo {
                        ui.hyperlink_to("Live Demo ↗", demo);
                    }
                    if let Some(repo) = project.repository {
                        ui.hyperlink_to("GitHub ↗", repo);
                    }
                });
            });

        if !open {
            self.modal.close();
        }
    }

    fn contact_form(&mut self, ui: &mut egui::Ui, now: f64) {
        ui.heading("Contact");
        ui.add_space(8.0);

        let error_hint = |ui: &mut egui::Ui, form: &ContactForm, field: FieldError| {
            if form.has_error(field) {
                ui.colored_label(egui::Color32::from_rgb(220, 38, 38), field.hint());
            }
        };

        ui.label("Name");
        ui.text_edit_singleline(&mut self.contact.name);
        error_hint(ui, &self.contact, FieldError::Name);

        ui.label("Email");
        ui.text_edit_singleline(&mut self.contact.email);
        error_hint(ui, &self.contact, FieldError::Email);

        ui.label("Message");
        ui.text_edit_multiline(&mut self.contact.message);
        error_hint(ui, &self.contact, FieldError::Message);

        ui.add_space(6.0);
        if ui.button("Send Message").clicked() {
            self.contact.submit(&mut self.outbox, now);
        }

        if let Some(banner) = self.contact.banner(now) {
            let color = if banner.success {
                egui::Color32::from_rgb(22, 163, 74)
            } else {
                egui::Color32::from_rgb(220, 38, 38)
            };
            ui.colored_label(color, &banner.text);
        }
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);

        self.paint_background(ctx);
        self.handle_keys(ctx);

        // Top panel
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Thirumoorthi");
                ui.separator();
                for (i, name) in SECTIONS.iter().enumerate() {
                    if ui.selectable_label(self.active_section == Some(i), *name).clicked() {
                        self.scroll_to = Some(i);
                    }
                }
                ui.separator();
                ui.toggle_value(&mut self.show_settings, "⚙ Settings");
            });
            ui.add(
                egui::ProgressBar::new(self.scroll_pct / 100.0)
                    .desired_height(2.0)
                    .fill(ACCENT),
            );
        });

        if self.show_settings {
            self.settings_panel(ctx);
        }

        // Page content over the background
        egui::CentralPanel::default()
            .frame(egui::Frame::none().inner_margin(24.0))
            .show(ctx, |ui| {
                let output = egui::ScrollArea::vertical().show(ui, |ui| {
                    let mut sections = Vec::with_capacity(SECTIONS.len());
                    sections.push(ui.scope(|ui| self.hero(ui, now)).response.rect);
                    ui.add_space(24.0);
                    sections.push(ui.scope(|ui| self.projects_grid(ui)).response.rect);
                    ui.add_space(24.0);
                    sections.push(ui.scope(|ui| self.contact_form(ui, now)).response.rect);

                    let target = self.scroll_to.take().and_then(|i| sections.get(i).copied());
                    if let Some(rect) = target {
                        ui.scroll_to_rect(rect, Some(egui::Align::TOP));
                    }
                    sections
                });

                self.scroll_pct = scroll_progress(
                    output.state.offset.y,
                    output.content_size.y,
                    output.inner_rect.height(),
                );

                let viewport_top = output.inner_rect.top();
                let tops: Vec<(f32, f32)> = output
                    .inner
                    .iter()
                    .map(|rect| (rect.top() - viewport_top, rect.height()))
                    .collect();
                self.active_section = active_section(&tops);
            });

        // Counters and banners animate even when nothing else repaints
        if self.counters_running(now) {
            ctx.request_repaint();
        }
        if let Some(secs) = self.contact.banner_remaining(now) {
            ctx.request_repaint_after(Duration::from_secs_f64(secs));
        }

        self.project_modal(ctx);
        self.paint_cursor_ring(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let BackgroundState::Active(animator) = &mut self.background {
            animator.stop();
        }
        self.settings.save();
    }
}
