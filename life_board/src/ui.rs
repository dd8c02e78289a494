// ui.rs - Control panel and board surface

use eframe::egui;
use egui::{Color32, Rect, Sense, pos2};
use life_engine::SimulationState;
use life_engine::clock::{MAX_INTERVAL_MS, MIN_INTERVAL_MS};

use crate::LifeApp;

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Catch up on clock ticks delivered since the last frame
        self.game.advance(&mut self.board);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                if ui.button("▶ Start").clicked() {
                    self.game.start();
                }
                if ui.button("⏸ Pause").clicked() {
                    self.game.pause();
                }
                if ui.button("⏹ Reset").clicked() {
                    self.game.reset(&mut self.board);
                }
                if ui.button("🎲 Random").clicked() {
                    self.game.randomize(&mut self.board);
                }

                ui.separator();
                let status = match self.game.state() {
                    SimulationState::Running => "Running",
                    SimulationState::Idle => "Idle",
                };
                ui.label(status);
                ui.label(format!("Generation: {}", self.game.generation()));
            });

            ui.separator();

            // Speed control
            ui.horizontal(|ui| {
                ui.label("Delay:");
                let mut interval = self.game.interval_ms();
                let slider = egui::Slider::new(&mut interval, MIN_INTERVAL_MS..=MAX_INTERVAL_MS)
                    .logarithmic(true)
                    .suffix(" ms");
                if ui.add(slider).changed() {
                    self.game.set_interval(interval);
                }
            });

            ui.label("Click a cell to toggle it, drag to paint. Editing only works while paused.");

            ui.separator();

            // Board surface
            let (response, painter) = ui.allocate_painter(self.board.size(), Sense::click_and_drag());
            let texture_id = self.board.texture(ctx).id();
            painter.image(
                texture_id,
                response.rect,
                Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
                Color32::WHITE,
            );

            if let Some(pos) = response.interact_pointer_pos() {
                if let Some((row, col)) = self.board.cell_at(pos - response.rect.min) {
                    if response.clicked() {
                        self.game.toggle(row, col, &mut self.board);
                    } else if response.dragged() {
                        self.game.set_alive(row, col, &mut self.board);
                    }
                }
            }

            ui.separator();

            // Statistics
            let grid = self.game.grid();
            let live_cells = grid.live_count();
            let total = grid.len();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!("Population: {:.1}%", (live_cells as f32 / total as f32) * 100.0));
            });
        });
    }
}
