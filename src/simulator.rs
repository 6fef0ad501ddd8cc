use crate::{Cell, Grid};
use std::collections::HashSet;

/// Transition rules of Conway's Game of Life, in the order they are checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// Live cell with fewer than two live neighbors dies.
    UnderPopulation,
    /// Live cell with two or three live neighbors lives on.
    Survival,
    /// Live cell with more than three live neighbors dies.
    Overcrowding,
    /// Dead cell with exactly three live neighbors becomes alive.
    Reproduction,
}

impl Rule {
    /// Picks the rule that applies to a cell, or `None` if the cell stays dead.
    pub fn classify(alive: bool, live_neighbors: usize) -> Option<Self> {
        match (alive, live_neighbors) {
            (true, 0..=1) => Some(Self::UnderPopulation),
            (true, 2..=3) => Some(Self::Survival),
            (true, _) => Some(Self::Overcrowding),
            (false, 3) => Some(Self::Reproduction),
            (false, _) => None,
        }
    }

    /// State of the cell after the rule is applied.
    pub fn next_state(self) -> bool {
        matches!(self, Self::Survival | Self::Reproduction)
    }
}

/// Changes computed from one frozen generation, applied by [`Grid::apply_transitions`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transitions {
    to_revive: Vec<Cell>,
    to_die: Vec<Cell>,
    survivors: Vec<Cell>,
}

impl Transitions {
    #[cfg(test)]
    fn revive(&mut self, cell: Cell) {
        self.to_revive.push(cell);
    }

    #[cfg(test)]
    fn kill(&mut self, cell: Cell) {
        self.to_die.push(cell);
    }

    fn record(&mut self, cell: Cell, rule: Rule) {
        match rule {
            Rule::UnderPopulation | Rule::Overcrowding => self.to_die.push(cell),
            Rule::Survival => self.survivors.push(cell),
            Rule::Reproduction => self.to_revive.push(cell),
        }
    }

    pub fn to_revive(&self) -> &[Cell] {
        &self.to_revive
    }

    pub fn to_die(&self) -> &[Cell] {
        &self.to_die
    }

    /// Live cells left untouched by Rule 2.
    pub fn survivors(&self) -> &[Cell] {
        &self.survivors
    }

    /// `true` if applying these transitions changes nothing.
    pub fn is_empty(&self) -> bool {
        self.to_revive.is_empty() && self.to_die.is_empty()
    }

    /// No position is both revived and killed.
    pub fn is_disjoint(&self) -> bool {
        let revived = self
            .to_revive
            .iter()
            .map(Cell::position)
            .collect::<HashSet<_>>();
        self.to_die.iter().all(|c| !revived.contains(&c.position()))
    }
}

/// Tick engine: computes generation N+1 from generation N.
///
/// Rules are evaluated against an immutable borrow of the grid, so no cell
/// changes until every cell has been classified.
#[derive(Clone, Copy, Debug, Default)]
pub struct Simulator;

impl Simulator {
    /// Classifies every cell of the current generation in row-major order.
    pub fn evaluate(grid: &Grid) -> Transitions {
        let mut transitions = Transitions::default();
        for cell in grid.cells() {
            let neighbors = grid.live_neighbor_count(cell);
            if let Some(rule) = Rule::classify(cell.is_alive(), neighbors) {
                transitions.record(*cell, rule);
            }
        }
        transitions
    }

    /// Advances the grid by one generation.
    pub fn step(grid: &mut Grid) {
        let transitions = Self::evaluate(grid);
        grid.apply_transitions(&transitions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        use Rule::*;

        let expected_alive = [
            UnderPopulation,
            UnderPopulation,
            Survival,
            Survival,
            Overcrowding,
            Overcrowding,
            Overcrowding,
            Overcrowding,
            Overcrowding,
        ];
        for (n, rule) in expected_alive.into_iter().enumerate() {
            assert_eq!(Rule::classify(true, n), Some(rule), "n={}", n);
        }
        for n in 0..=8 {
            let expected = if n == 3 { Some(Reproduction) } else { None };
            assert_eq!(Rule::classify(false, n), expected, "n={}", n);
        }
    }

    #[test]
    fn test_next_state_matches_b3s23() {
        for alive in [false, true] {
            for n in 0..=8 {
                let next = Rule::classify(alive, n).is_some_and(Rule::next_state);
                let expected = if alive { n == 2 || n == 3 } else { n == 3 };
                assert_eq!(next, expected, "alive={} n={}", alive, n);
            }
        }
    }

    #[test]
    fn test_evaluate_does_not_mutate() {
        let mut grid = Grid::default();
        grid.apply_seeds(&[(1, 0), (1, 1), (1, 2)]).unwrap();
        let before = grid.clone();

        let transitions = Simulator::evaluate(&grid);
        assert_eq!(grid, before);

        let positions = |cells: &[Cell]| cells.iter().map(Cell::position).collect::<Vec<_>>();
        assert_eq!(positions(transitions.to_revive()), [(0, 1), (2, 1)]);
        assert_eq!(positions(transitions.to_die()), [(1, 0), (1, 2)]);
        assert_eq!(positions(transitions.survivors()), [(1, 1)]);
        assert!(transitions.is_disjoint());
    }

    #[test]
    fn test_lone_cell_dies_of_under_population() {
        let mut grid = Grid::default();
        grid.apply_seeds(&[(1, 0), (2, 0)]).unwrap();
        Simulator::step(&mut grid);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_conflicting_transitions_are_detected() {
        let grid = Grid::default();
        let cell = *grid.cell(0, 0).unwrap();
        let mut transitions = Transitions::default();
        transitions.revive(cell);
        assert!(transitions.is_disjoint());
        transitions.kill(cell);
        assert!(!transitions.is_disjoint());
    }
}
