use crate::{Error, Result};

/// A finite arrangement of live cells with its bounding box.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: String,
    pub rows: usize,
    pub cols: usize,
    /// `(row, col)` of live cells, relative to the top left corner.
    pub cells: Vec<(usize, usize)>,
}

impl Pattern {
    /// Pattern cells shifted so that its top left corner lands on `(row, col)`.
    pub fn seeds_at(&self, row: usize, col: usize) -> Vec<(usize, usize)> {
        self.cells.iter().map(|&(r, c)| (r + row, c + col)).collect()
    }

    /// Looks up a preset by name, ignoring case.
    pub fn preset(name: &str) -> Result<Self> {
        PRESETS
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .map(Preset::pattern)
            .ok_or_else(|| Error::UnknownPattern(name.to_string()))
    }
}

pub struct Preset {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl Preset {
    pub fn pattern(&self) -> Pattern {
        let rows = self.cells.iter().map(|&(r, _)| r + 1).max().unwrap_or(0);
        let cols = self.cells.iter().map(|&(_, c)| c + 1).max().unwrap_or(0);
        Pattern {
            name: self.name.to_string(),
            rows,
            cols,
            cells: self.cells.to_vec(),
        }
    }
}

pub const PRESETS: &[Preset] = &[
    Preset {
        name: "Block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Preset {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Preset {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Preset {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Preset {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
];
