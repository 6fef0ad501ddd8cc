use crate::{populate, Error, Pattern, Result, Transitions};
use std::fmt;

/// A single lattice position. `x` is the column and `y` is the row.
///
/// Cells are only created by [`Grid`]; their state can't be changed from outside.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    x: usize,
    y: usize,
    alive: bool,
}

impl Cell {
    fn dead(x: usize, y: usize) -> Self {
        Self { x, y, alive: false }
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    /// `(row, col)` of the cell.
    pub fn position(&self) -> (usize, usize) {
        (self.y, self.x)
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn is_dead(&self) -> bool {
        !self.alive
    }
}

/// Bounded (non-wrapping) rectangular field of cells.
///
/// Cells are stored in row-major order: the cell at `(row, col)` lives at
/// index `col + row * cols`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::blank(3, 3)
    }
}

impl Grid {
    /// Largest number of cells a grid may hold.
    pub const MAX_CELLS: usize = 1 << 24;

    /// Creates a grid of `rows x cols` dead cells.
    ///
    /// Fails with `InvalidDimension` if a side is zero or there would be more
    /// than [`Grid::MAX_CELLS`] cells.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let size = rows.checked_mul(cols);
        if rows == 0 || cols == 0 || size.map_or(true, |n| n > Self::MAX_CELLS) {
            return Err(Error::InvalidDimension { rows, cols });
        }
        Ok(Self::blank(rows, cols))
    }

    /// Creates a grid that fits the pattern exactly, with the pattern planted.
    pub fn from_pattern(pattern: &Pattern) -> Result<Self> {
        let mut grid = Self::new(pattern.rows, pattern.cols)?;
        grid.apply_seeds(&pattern.cells)?;
        Ok(grid)
    }

    fn blank(rows: usize, cols: usize) -> Self {
        let cells = (0..rows)
            .flat_map(|y| (0..cols).map(move |x| Cell::dead(x, y)))
            .collect();
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        col + row * self.cols
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize> {
        if row < self.rows && col < self.cols {
            Ok(self.index(row, col))
        } else {
            Err(Error::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<&Cell> {
        let i = self.checked_index(row, col)?;
        Ok(&self.cells[i])
    }

    pub fn is_alive(&self, row: usize, col: usize) -> Result<bool> {
        self.cell(row, col).map(Cell::is_alive)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Row-major snapshot of cell states.
    pub fn get_cells(&self) -> Vec<bool> {
        self.cells.iter().map(Cell::is_alive).collect()
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.alive).count()
    }

    /// Number of live cells in the Moore neighborhood of `cell`.
    ///
    /// Positions outside the grid are skipped, so corner cells have at most
    /// 3 neighbors and edge cells at most 5.
    pub fn live_neighbor_count(&self, cell: &Cell) -> usize {
        let (x, y) = (cell.x, cell.y);
        debug_assert!(x < self.cols && y < self.rows);
        let (x1, x2) = (x.saturating_sub(1), (x + 1).min(self.cols - 1));
        let (y1, y2) = (y.saturating_sub(1), (y + 1).min(self.rows - 1));
        let mut count = 0;
        for ny in y1..=y2 {
            for nx in x1..=x2 {
                if (nx, ny) != (x, y) && self.cells[self.index(ny, nx)].alive {
                    count += 1;
                }
            }
        }
        count
    }

    /// Marks every `(row, col)` in `seeds` alive.
    ///
    /// All coordinates are checked first: on `OutOfBounds` no cell is touched.
    pub fn apply_seeds(&mut self, seeds: &[(usize, usize)]) -> Result<()> {
        let indices = seeds
            .iter()
            .map(|&(row, col)| self.checked_index(row, col))
            .collect::<Result<Vec<_>>>()?;
        for i in indices {
            self.cells[i].alive = true;
        }
        Ok(())
    }

    /// Flips a random subset of cells alive, each with probability `fill_rate`.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn randomly_populate(&mut self, seed: Option<u64>, fill_rate: f64) -> Result<()> {
        let seeds = populate::random_seeds(self.rows, self.cols, seed, fill_rate)?;
        self.apply_seeds(&seeds)
    }

    /// Applies one generation worth of changes: revivals first, then deaths.
    ///
    /// Cells positioned outside this grid are ignored.
    pub fn apply_transitions(&mut self, transitions: &Transitions) {
        debug_assert!(
            transitions.is_disjoint(),
            "a cell is marked both to revive and to die"
        );
        for (cells, alive) in [(transitions.to_revive(), true), (transitions.to_die(), false)] {
            for cell in cells {
                if let Ok(i) = self.checked_index(cell.y, cell.x) {
                    self.cells[i].alive = alive;
                }
            }
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks_exact(self.cols) {
            for cell in row {
                f.write_str(if cell.alive { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_dimensions() {
        assert_eq!(
            Grid::new(0, 3),
            Err(Error::InvalidDimension { rows: 0, cols: 3 })
        );
        assert_eq!(
            Grid::new(3, 0),
            Err(Error::InvalidDimension { rows: 3, cols: 0 })
        );
        assert!(matches!(
            Grid::new(usize::MAX, 2),
            Err(Error::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_cell_count_is_capped() {
        assert_eq!(
            Grid::new(1 << 31, 1 << 31),
            Err(Error::InvalidDimension {
                rows: 1 << 31,
                cols: 1 << 31
            })
        );
        assert!(Grid::new(Grid::MAX_CELLS + 1, 1).is_err());
        assert!(Grid::new(2, Grid::MAX_CELLS / 2 + 1).is_err());
    }

    #[test]
    fn test_cells_are_row_major_with_column_as_x() {
        let grid = Grid::new(2, 3).unwrap();
        let positions = grid.cells().map(|c| (c.x(), c.y())).collect::<Vec<_>>();
        assert_eq!(positions, [(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
        assert!(grid.cells().all(Cell::is_dead));
    }

    #[test]
    fn test_default_is_3x3() {
        let grid = Grid::default();
        assert_eq!((grid.rows(), grid.cols()), (3, 3));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_neighbor_to_the_north_and_south() {
        let mut grid = Grid::default();
        grid.apply_seeds(&[(0, 1)]).unwrap();
        let center = *grid.cell(1, 1).unwrap();
        assert_eq!(grid.live_neighbor_count(&center), 1);

        grid.apply_seeds(&[(2, 1)]).unwrap();
        assert_eq!(grid.live_neighbor_count(&center), 2);
    }

    #[test]
    fn test_each_direction_counts_once() {
        for seed in [
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 2),
            (2, 0),
            (2, 1),
            (2, 2),
        ] {
            let mut grid = Grid::default();
            grid.apply_seeds(&[seed]).unwrap();
            let center = *grid.cell(1, 1).unwrap();
            assert_eq!(grid.live_neighbor_count(&center), 1, "seed={:?}", seed);
        }
    }

    #[test]
    fn test_cell_does_not_count_itself() {
        let mut grid = Grid::default();
        grid.apply_seeds(&[(1, 1)]).unwrap();
        let center = *grid.cell(1, 1).unwrap();
        assert_eq!(grid.live_neighbor_count(&center), 0);
    }

    #[test]
    fn test_single_cell_grid() {
        let mut grid = Grid::new(1, 1).unwrap();
        grid.apply_seeds(&[(0, 0)]).unwrap();
        let cell = *grid.cell(0, 0).unwrap();
        assert_eq!(grid.live_neighbor_count(&cell), 0);
    }

    #[test]
    fn test_queries_out_of_bounds() {
        let grid = Grid::new(2, 4).unwrap();
        assert_eq!(
            grid.is_alive(2, 0),
            Err(Error::OutOfBounds {
                row: 2,
                col: 0,
                rows: 2,
                cols: 4
            })
        );
        assert!(grid.cell(0, 4).is_err());
        assert_eq!(grid.is_alive(1, 3), Ok(false));
    }

    #[test]
    fn test_transitions_from_a_larger_grid() {
        let mut large = Grid::new(5, 5).unwrap();
        large.apply_seeds(&[(0, 1), (1, 1), (2, 1), (3, 3), (4, 3)]).unwrap();
        let transitions = crate::Simulator::evaluate(&large);
        assert!(transitions
            .to_die()
            .iter()
            .any(|c| c.position() == (4, 3)));

        let mut small = Grid::new(2, 2).unwrap();
        small.apply_seeds(&[(0, 1), (1, 1)]).unwrap();
        small.apply_transitions(&transitions);
        // (1, 0) revived; (0, 1) died; (1, 1) survived; the rest is off-grid
        assert_eq!(small.get_cells(), [false, false, true, true]);
    }

    #[test]
    fn test_display() {
        let mut grid = Grid::new(2, 3).unwrap();
        grid.apply_seeds(&[(0, 0), (1, 2)]).unwrap();
        assert_eq!(grid.to_string(), "#..\n..#\n");
    }
}
