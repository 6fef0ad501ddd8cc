mod error;
mod game;
mod grid;
mod gui;
mod pattern;
pub mod populate;
mod settings;
mod simulator;
mod utils;

pub use error::{Error, Result};
pub use game::Game;
pub use grid::{Cell, Grid};
pub use gui::{App, Config};
pub use pattern::{Pattern, Preset, PRESETS};
pub use settings::Settings;
pub use simulator::{Rule, Simulator, Transitions};
pub use utils::{parse_rle, NiceInt};
