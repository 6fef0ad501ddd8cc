use super::{App, Config};
use crate::{NiceInt, Settings, PRESETS};
use eframe::egui::{
    load::SizedTexture, Button, ColorImage, ComboBox, Image, RichText, Slider, Stroke,
    TextureOptions, Ui, Vec2,
};

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button {
        Button::new(Self::new_text(text))
            .fill(Config::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Config::BUTTON_STROKE_WIDTH,
                Config::BUTTON_STROKE_COLOR,
            ))
    }

    fn draw_simulation_controls(&mut self, ui: &mut Ui) {
        let text = if self.is_paused { "Play" } else { "Pause" };
        if ui.add(Self::new_button(text)).clicked() {
            self.is_paused = !self.is_paused;
        }

        ui.add_enabled_ui(self.is_paused, |ui| {
            if ui.add(Self::new_button("Next step")).clicked() {
                self.do_one_step = true;
            }
        });

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Speed: "));
            ui.add(Slider::new(&mut self.updates_per_second, 1.0..=60.0).logarithmic(true));
            ui.label(Self::new_text("gen/s"));
        });

        ui.horizontal(|ui| {
            if ui.add(Self::new_button("Reset")).clicked() {
                self.reset();
            }
            if ui.add(Self::new_button("Random fill")).clicked() {
                self.random_fill();
            }
        });

        ui.horizontal(|ui| {
            ComboBox::from_id_source("preset")
                .selected_text(Self::new_text(PRESETS[self.selected_preset].name))
                .show_ui(ui, |ui| {
                    for (i, preset) in PRESETS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_preset, i, preset.name);
                    }
                });
            if ui.add(Self::new_button("Place")).clicked() {
                self.place_selected_preset();
            }
        });

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Fill rate: "));
            ui.add(Slider::new(&mut self.settings.fill_rate, 0.0..=1.0));
        });
    }

    fn draw_stats(&mut self, ui: &mut Ui) {
        let grid = self.game.grid();
        ui.label(Self::new_text(&format!(
            "Grid: {} x {}",
            grid.rows(),
            grid.cols()
        )));
        ui.label(Self::new_text(&format!(
            "Generation: {}",
            NiceInt::from(self.game.generation())
        )));
        ui.label(Self::new_text(&format!(
            "Population: {}",
            NiceInt::from_usize(grid.population())
        )));
        ui.label(Self::new_text(&format!(
            "Last update: {:.3} ms",
            self.last_update_duration * 1e3
        )));
        ui.label(Self::new_text(&format!(
            "FPS: {:3}",
            self.fps_limiter.fps().round() as u32
        )));

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Max FPS: "));
            let range = Settings::MIN_MAX_FPS..=Settings::MAX_MAX_FPS;
            ui.add(Slider::new(&mut self.max_fps, range).logarithmic(true));
        });

        if let Some(error) = &self.last_error {
            ui.label(Self::new_text(error).color(Config::ERROR_COLOR));
        }
    }

    fn draw_controls(&mut self, ui: &mut Ui) {
        ui.vertical(|ui| {
            ui.set_width(Config::CONTROL_PANEL_WIDTH);
            ui.group(|ui| {
                ui.vertical(|ui| {
                    self.draw_simulation_controls(ui);

                    ui.add_space(Config::GAP_ABOVE_STATS);

                    self.draw_stats(ui);
                });
            });
        });
    }

    fn draw_grid(&mut self, ui: &mut Ui, area: Vec2) {
        let grid = self.game.grid();
        let (rows, cols) = (grid.rows(), grid.cols());
        let gray = grid
            .cells()
            .map(|c| {
                if c.is_alive() {
                    Config::LIVE_CELL_BRIGHTNESS
                } else {
                    Config::DEAD_CELL_BRIGHTNESS
                }
            })
            .collect::<Vec<_>>();
        self.texture
            .set(ColorImage::from_gray([cols, rows], &gray), TextureOptions::NEAREST);

        let cell_px = (area.x / cols as f32).min(area.y / rows as f32);
        let source = SizedTexture::new(
            self.texture.id(),
            [cell_px * cols as f32, cell_px * rows as f32],
        );
        ui.add(Image::from_texture(source));
    }

    pub fn draw(&mut self, ui: &mut Ui) {
        let area = ui.available_size();
        let field = Vec2::new(
            (area.x - Config::CONTROL_PANEL_WIDTH - Config::FRAME_MARGIN).max(0.),
            area.y,
        );
        ui.horizontal(|ui| {
            self.draw_controls(ui);

            ui.add_space(Config::FRAME_MARGIN);

            ui.vertical_centered(|ui| {
                self.draw_grid(ui, field);
            });
        });
    }
}
