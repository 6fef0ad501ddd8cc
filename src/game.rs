use crate::{Grid, Result, Simulator};

/// A grid together with the seeds it was started from and a generation counter.
#[derive(Clone, Debug)]
pub struct Game {
    grid: Grid,
    initial: Grid,
    seeds: Vec<(usize, usize)>,
    generation: u64,
}

impl Default for Game {
    fn default() -> Self {
        let grid = Grid::default();
        Self {
            initial: grid.clone(),
            grid,
            seeds: vec![],
            generation: 0,
        }
    }
}

impl Game {
    /// Plants `seeds` (as `(row, col)`) into `grid`.
    ///
    /// Fails with `OutOfBounds` if any seed is outside the grid.
    pub fn new(mut grid: Grid, seeds: Vec<(usize, usize)>) -> Result<Self> {
        grid.apply_seeds(&seeds)?;
        Ok(Self {
            initial: grid.clone(),
            grid,
            seeds,
            generation: 0,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn seeds(&self) -> &[(usize, usize)] {
        &self.seeds
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_extinct(&self) -> bool {
        self.grid.population() == 0
    }

    pub fn tick(&mut self) {
        Simulator::step(&mut self.grid);
        self.generation += 1;
    }

    /// Advances the game by `generations` ticks.
    pub fn run(&mut self, generations: u64) {
        for _ in 0..generations {
            self.tick();
        }
    }

    /// Returns to the seeded state of generation 0.
    pub fn reset(&mut self) {
        self.grid.clone_from(&self.initial);
        self.generation = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_default() {
        let game = Game::default();
        assert_eq!((game.grid().rows(), game.grid().cols()), (3, 3));
        assert!(game.seeds().is_empty());
        assert_eq!(game.generation(), 0);
    }

    #[test]
    fn test_plants_seeds() {
        let game = Game::new(Grid::default(), vec![(1, 2), (0, 2)]).unwrap();
        assert_eq!(game.grid().is_alive(1, 2), Ok(true));
        assert_eq!(game.grid().is_alive(0, 2), Ok(true));
        assert_eq!(game.grid().population(), 2);
    }

    #[test]
    fn test_bad_seed_fails() {
        assert!(matches!(
            Game::new(Grid::default(), vec![(0, 0), (3, 0)]),
            Err(Error::OutOfBounds { row: 3, col: 0, .. })
        ));
    }

    #[test]
    fn test_tick_and_reset() {
        let mut game = Game::new(Grid::default(), vec![(1, 0), (2, 0)]).unwrap();
        game.tick();
        assert_eq!(game.generation(), 1);
        assert!(game.is_extinct());

        game.reset();
        assert_eq!(game.generation(), 0);
        assert_eq!(game.grid().population(), 2);
    }
}
