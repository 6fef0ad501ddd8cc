use super::{Config, FpsLimiter};
use crate::{Game, Settings, PRESETS};
use eframe::egui::{
    CentralPanel, Color32, ColorImage, Context, Frame, Key, Margin, TextureHandle, TextureOptions,
};
use std::time::{Duration, Instant};

pub struct App {
    pub(super) game: Game,                // Current game.
    pub(super) settings: Settings,        // Used to rebuild the field.
    pub(super) is_paused: bool,           // Flag indicating whether the simulation is paused.
    pub(super) do_one_step: bool,         // Do one step and pause.
    pub(super) updates_per_second: f64,   // Generations per second while running.
    pub(super) last_update: Instant,      // Time of the last generation.
    pub(super) last_update_duration: f64, // Duration of the last tick in seconds.
    pub(super) selected_preset: usize,    // Index into `PRESETS`.
    pub(super) last_error: Option<String>,
    pub(super) texture: TextureHandle, // Texture of the grid, one texel per cell.
    pub(super) fps_limiter: FpsLimiter,
    pub(super) max_fps: f64,
}

impl App {
    pub fn new(ctx: &Context, settings: Settings, game: Game) -> Self {
        Self {
            game,
            is_paused: true,
            do_one_step: false,
            updates_per_second: Config::UPDATES_PER_SECOND,
            last_update: Instant::now(),
            last_update_duration: 0.,
            selected_preset: 0,
            last_error: None,
            texture: ctx.load_texture("grid", ColorImage::default(), TextureOptions::NEAREST),
            fps_limiter: FpsLimiter::default(),
            max_fps: settings
                .max_fps
                .clamp(Settings::MIN_MAX_FPS, Settings::MAX_MAX_FPS),
            settings,
        }
    }

    /// Rebuilds the field from the current settings.
    pub(super) fn rebuild(&mut self) {
        match self.settings.build_game() {
            Ok(game) => {
                tracing::info!(
                    rows = self.settings.rows,
                    cols = self.settings.cols,
                    population = game.grid().population(),
                    "field rebuilt"
                );
                self.game = game;
                self.is_paused = true;
                self.last_error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to rebuild the field");
                self.last_error = Some(e.to_string());
            }
        }
    }

    pub(super) fn place_selected_preset(&mut self) {
        let preset = &PRESETS[self.selected_preset];
        tracing::info!(preset = preset.name, "placing preset");
        self.settings.pattern = Some(preset.pattern());
        self.rebuild();
    }

    pub(super) fn random_fill(&mut self) {
        self.settings.pattern = None;
        self.rebuild();
    }

    pub(super) fn reset(&mut self) {
        tracing::info!(generation = self.game.generation(), "reset to generation 0");
        self.game.reset();
        self.is_paused = true;
    }

    fn update_engine(&mut self) {
        if self.is_paused && !self.do_one_step {
            return;
        }
        let interval = Duration::from_secs_f64(1. / self.updates_per_second);
        if !self.do_one_step && self.last_update.elapsed() < interval {
            return;
        }

        let timer = Instant::now();
        self.game.tick();
        self.last_update_duration = timer.elapsed().as_secs_f64();
        self.last_update = Instant::now();
        self.do_one_step = false;

        let population = self.game.grid().population();
        tracing::debug!(generation = self.game.generation(), population, "tick");
        if population == 0 && !self.is_paused {
            tracing::info!(
                generation = self.game.generation(),
                "population died out, pausing"
            );
            self.is_paused = true;
        }
    }

    fn handle_keys(&mut self, ctx: &Context) {
        ctx.input(|input| {
            if input.key_pressed(Key::Space) {
                self.do_one_step = true;
            }
            if input.key_pressed(Key::E) && !input.modifiers.ctrl {
                self.is_paused = !self.is_paused;
            }
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Color32::LIGHT_GRAY),
            )
            .show(ctx, |ui| {
                ctx.request_repaint();

                self.handle_keys(ctx);

                self.draw(ui);

                self.update_engine();
            });

        self.fps_limiter.sleep(self.max_fps);
    }
}
