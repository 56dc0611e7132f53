// ui.rs - egui front end: input translation, controls and the board painter

use std::time::Instant;

use conway::{patterns, Canvas, CellRect, Color, Control, Fill, InputEvent, Mode, Session};
use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use tracing::warn;

pub struct LifeApp {
    session: Session,
    selected_pattern: usize,
    random_seed: u64,
}

impl LifeApp {
    pub fn new(session: Session) -> Self {
        Self { session, selected_pattern: 0, random_seed: 0 }
    }

    fn dispatch(&mut self, ctx: &egui::Context, event: &InputEvent) {
        if self.session.handle_event(event) == Control::Quit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("Conway's Game of Life");

        ui.horizontal(|ui| {
            let button_text = if self.session.grid().is_running() { "⏸ Pause" } else { "▶ Start" };
            if ui.button(button_text).clicked() {
                self.session.toggle_running();
            }

            if ui.button("⏹ Clear").clicked() {
                self.session.clear();
            }

            if ui.button("🎲 Random").clicked() {
                self.random_seed = self.random_seed.wrapping_add(1);
                self.session.randomize(self.random_seed);
            }

            ui.separator();

            // Pattern dropdown
            ui.label("Pattern:");
            egui::ComboBox::from_id_source("pattern_selector")
                .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                .show_ui(ui, |ui| {
                    for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                    }
                });

            if ui.button("Apply Pattern").clicked() {
                self.session.load_pattern(&patterns::PATTERNS[self.selected_pattern]);
            }

            ui.separator();

            ui.label(format!("Generation: {}", self.session.grid().generation()));
        });

        ui.horizontal(|ui| {
            ui.label("Speed:");
            let mut speed = self.session.tick_rate();
            if ui.add(egui::Slider::new(&mut speed, 0.5..=60.0).suffix(" gen/sec")).changed() {
                if let Err(err) = self.session.set_tick_rate(speed) {
                    warn!(%err, "speed rejected");
                }
            }

            ui.separator();

            let palette = self.session.palette_mut();
            ui.label("Live:");
            let mut live = to_color32(palette.live);
            if ui.color_edit_button_srgba(&mut live).changed() {
                palette.live = from_color32(live);
            }
            ui.label("Grid:");
            let mut grid_line = to_color32(palette.grid_line);
            if ui.color_edit_button_srgba(&mut grid_line).changed() {
                palette.grid_line = from_color32(grid_line);
            }

            ui.separator();

            ui.checkbox(&mut self.session.pause_on_repeat, "Pause on repeat");
        });

        ui.label("Click cells to toggle them while paused. Space starts or pauses, Escape quits.");
    }

    fn stats(&self, ui: &mut egui::Ui) {
        let grid = self.session.grid();
        let total = grid.width() * grid.height();
        let live_cells = grid.live_count();
        let mode = match grid.mode() {
            Mode::Editing => "Editing",
            Mode::Running => "Running",
        };

        ui.horizontal(|ui| {
            ui.label(format!("Mode: {mode}"));
            ui.label(format!("Live cells: {live_cells}"));
            ui.label(format!("Dead cells: {}", total - live_cells));
            ui.label(format!("Population: {:.1}%", live_cells as f32 / total as f32 * 100.0));
        });
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for event in key_events(ctx) {
            self.dispatch(ctx, &event);
        }

        // Auto-update if a tick is due
        self.session.tick(Instant::now());

        egui::TopBottomPanel::top("controls").show(ctx, |ui| self.controls(ui));
        egui::TopBottomPanel::bottom("stats").show(ctx, |ui| self.stats(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::click());
            let origin = response.rect.min;

            let pressed_at = ctx.input(|i| {
                if i.pointer.primary_pressed() { i.pointer.interact_pos() } else { None }
            });
            if let Some(event) = press_event(pressed_at, response.hovered(), origin) {
                self.dispatch(ctx, &event);
            }

            painter.rect_filled(response.rect, 0.0, to_color32(self.session.palette().background));
            self.session.render(&mut PainterCanvas { painter: &painter, origin });
        });

        // Wake up for the next generation even without input
        if let Some(wait) = self.session.until_next_tick(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}

/// Key presses for this frame. Escape quits; everything else is passed on
/// by name and ignored by the session unless it is the toggle key.
fn key_events(ctx: &egui::Context) -> Vec<InputEvent> {
    ctx.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Key { key: egui::Key::Escape, pressed: true, .. } => Some(InputEvent::Quit),
                egui::Event::Key { key, pressed: true, repeat: false, .. } => {
                    Some(InputEvent::KeyDown(key.name().to_owned()))
                }
                _ => None,
            })
            .collect()
    })
}

/// Button-down on the board, in board-local pixels. Presses over other
/// layers (an open combo box, a colour picker) do not reach the board.
fn press_event(pressed_at: Option<egui::Pos2>, hovered: bool, origin: egui::Pos2) -> Option<InputEvent> {
    let pos = pressed_at.filter(|_| hovered)?;
    let local = pos - origin;
    Some(InputEvent::MouseButtonDown { x: local.x, y: local.y })
}

/// Draws board rectangles through an egui painter, offset to the panel.
struct PainterCanvas<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
}

impl Canvas for PainterCanvas<'_> {
    fn draw_rect(&mut self, color: Color, rect: CellRect, fill: Fill) {
        let rect = Rect::from_min_size(
            self.origin + Vec2::new(rect.x as f32, rect.y as f32),
            Vec2::new(rect.w as f32, rect.h as f32),
        );
        let color = to_color32(color);
        match fill {
            Fill::Solid => {
                self.painter.rect_filled(rect, 0.0, color);
            }
            Fill::Outline => {
                self.painter.rect_stroke(rect, 0.0, Stroke::new(1.0, color));
            }
        }
    }
}

fn to_color32(color: Color) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

fn from_color32(color: Color32) -> Color {
    Color::rgb(color.r(), color.g(), color.b())
}
