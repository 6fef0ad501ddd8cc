use crate::{populate, Error, Game, Grid, Pattern, Result};

/// Parameters of a single run.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub rows: usize,
    pub cols: usize,
    /// RNG seed for the random fill; `None` means a fresh one every time.
    pub rng_seed: Option<u64>,
    pub fill_rate: f64,
    /// Centered in the grid instead of a random fill, if present.
    pub pattern: Option<Pattern>,
    /// Number of generations printed in headless mode.
    pub generations: u64,
    pub max_fps: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rows: Self::DEFAULT_ROWS,
            cols: Self::DEFAULT_COLS,
            rng_seed: None,
            fill_rate: Self::DEFAULT_FILL_RATE,
            pattern: None,
            generations: Self::DEFAULT_GENERATIONS,
            max_fps: Self::DEFAULT_MAX_FPS,
        }
    }
}

impl Settings {
    pub const DEFAULT_ROWS: usize = 32;
    pub const DEFAULT_COLS: usize = 32;
    pub const DEFAULT_FILL_RATE: f64 = 0.3;
    pub const DEFAULT_GENERATIONS: u64 = 10;
    pub const DEFAULT_MAX_FPS: f64 = 30.;
    pub const MIN_MAX_FPS: f64 = 5.;
    pub const MAX_MAX_FPS: f64 = 240.;

    /// Checks the values that are not checked when the field is built.
    pub fn validate(&self) -> Result<()> {
        if !(Self::MIN_MAX_FPS..=Self::MAX_MAX_FPS).contains(&self.max_fps) {
            return Err(Error::InvalidMaxFps(self.max_fps));
        }
        Ok(())
    }

    /// Seeds for a fresh game: the pattern centered, or a random fill.
    pub fn seeds(&self) -> Result<Vec<(usize, usize)>> {
        match &self.pattern {
            Some(pattern) => {
                if pattern.rows > self.rows || pattern.cols > self.cols {
                    return Err(Error::OutOfBounds {
                        row: pattern.rows.saturating_sub(1),
                        col: pattern.cols.saturating_sub(1),
                        rows: self.rows,
                        cols: self.cols,
                    });
                }
                let row = (self.rows - pattern.rows) / 2;
                let col = (self.cols - pattern.cols) / 2;
                Ok(pattern.seeds_at(row, col))
            }
            None => populate::random_seeds(self.rows, self.cols, self.rng_seed, self.fill_rate),
        }
    }

    pub fn build_game(&self) -> Result<Game> {
        self.validate()?;
        let grid = Grid::new(self.rows, self.cols)?;
        Game::new(grid, self.seeds()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_is_centered() {
        let settings = Settings {
            rows: 5,
            cols: 5,
            pattern: Some(Pattern::preset("blinker").unwrap()),
            ..Default::default()
        };
        let game = settings.build_game().unwrap();
        assert_eq!(game.seeds(), [(2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn test_pattern_too_large() {
        let settings = Settings {
            rows: 3,
            cols: 3,
            pattern: Some(Pattern::preset("beacon").unwrap()),
            ..Default::default()
        };
        assert!(matches!(
            settings.build_game(),
            Err(Error::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_random_fill_is_reproducible() {
        let settings = Settings {
            rng_seed: Some(7),
            ..Default::default()
        };
        let a = settings.build_game().unwrap();
        let b = settings.build_game().unwrap();
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn test_invalid_dimensions() {
        let settings = Settings {
            rows: 0,
            ..Default::default()
        };
        assert!(matches!(
            settings.build_game(),
            Err(Error::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_max_fps_range() {
        for max_fps in [1e-300, 0., -30., 1., 241., f64::NAN, f64::INFINITY] {
            let settings = Settings {
                max_fps,
                ..Default::default()
            };
            assert!(
                matches!(settings.build_game(), Err(Error::InvalidMaxFps(_))),
                "max_fps={}",
                max_fps
            );
        }
        for max_fps in [Settings::MIN_MAX_FPS, 60., Settings::MAX_MAX_FPS] {
            let settings = Settings {
                max_fps,
                ..Default::default()
            };
            assert_eq!(settings.validate(), Ok(()));
        }
    }
}
