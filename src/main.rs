#![warn(clippy::all)]

use anyhow::Context;
use bounded_life::{parse_rle, Game, Pattern, Settings};
use clap::Parser;
use std::path::PathBuf;

/// Conway's Game of Life on a bounded grid.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Number of rows
    #[arg(long, default_value_t = Settings::DEFAULT_ROWS)]
    rows: usize,
    /// Number of columns
    #[arg(long, default_value_t = Settings::DEFAULT_COLS)]
    cols: usize,
    /// Random seed for the initial fill
    #[arg(long)]
    seed: Option<u64>,
    /// Probability of a cell to be alive in the initial fill
    #[arg(long, default_value_t = Settings::DEFAULT_FILL_RATE)]
    fill_rate: f64,
    /// Preset pattern to center in the grid (block, blinker, toad, beacon, glider)
    #[arg(long, conflicts_with = "rle")]
    pattern: Option<String>,
    /// RLE file with a pattern to center in the grid
    #[arg(long)]
    rle: Option<PathBuf>,
    /// Generations to print in headless mode
    #[arg(long, default_value_t = Settings::DEFAULT_GENERATIONS)]
    generations: u64,
    /// Print generations to stdout instead of opening a window
    #[arg(long)]
    headless: bool,
    /// Frame rate limit of the window
    #[arg(long, default_value_t = Settings::DEFAULT_MAX_FPS)]
    max_fps: f64,
}

impl Args {
    fn into_settings(self) -> anyhow::Result<Settings> {
        let pattern = match (self.pattern, self.rle) {
            (Some(name), _) => Some(Pattern::preset(&name)?),
            (None, Some(path)) => {
                let data = std::fs::read(&path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                let pattern = parse_rle(&data)
                    .with_context(|| format!("failed to parse {}", path.display()))?;
                tracing::info!(
                    name = %pattern.name,
                    rows = pattern.rows,
                    cols = pattern.cols,
                    "loaded RLE pattern"
                );
                Some(pattern)
            }
            (None, None) => None,
        };
        Ok(Settings {
            rows: self.rows,
            cols: self.cols,
            rng_seed: self.seed,
            fill_rate: self.fill_rate,
            pattern,
            generations: self.generations,
            max_fps: self.max_fps,
        })
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_headless(settings: &Settings, mut game: Game) {
    println!("Generation 0:\n{}", game.grid());
    for _ in 0..settings.generations {
        game.tick();
        println!("Generation {}:\n{}", game.generation(), game.grid());
        if game.is_extinct() {
            tracing::info!(generation = game.generation(), "population died out");
            break;
        }
    }
}

fn run_window(settings: Settings, game: Game) -> anyhow::Result<()> {
    use eframe::egui::{vec2, ViewportBuilder};

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(vec2(1280., 800.))
            .with_min_inner_size(vec2(640.0, 360.0)),
        follow_system_theme: false,
        default_theme: eframe::Theme::Light,
        ..Default::default()
    };
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |cc| Ok(Box::new(bounded_life::App::new(&cc.egui_ctx, settings, game)))),
    )
    .map_err(|e| anyhow::anyhow!("window closed with an error: {e}"))
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();
    let headless = args.headless;
    let settings = args.into_settings()?;
    tracing::info!(
        rows = settings.rows,
        cols = settings.cols,
        seed = ?settings.rng_seed,
        fill_rate = settings.fill_rate,
        pattern = settings.pattern.as_ref().map(|p| p.name.as_str()),
        headless,
        "starting"
    );

    let game = settings
        .build_game()
        .context("failed to build the initial field")?;

    if headless {
        run_headless(&settings, game);
        Ok(())
    } else {
        run_window(settings, game)
    }
}
