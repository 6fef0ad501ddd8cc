use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    /// Grid sides must be positive and `rows * cols` at most `Grid::MAX_CELLS`.
    #[error("invalid grid dimensions {rows}x{cols}")]
    InvalidDimension { rows: usize, cols: usize },
    /// Coordinate outside `[0, rows) x [0, cols)`.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("fill rate {0} is not within [0, 1]")]
    InvalidFillRate(f64),
    #[error("max FPS {0} is not within [5, 240]")]
    InvalidMaxFps(f64),
    /// Malformed RLE pattern; `pos` is the byte offset of the problem.
    #[error("invalid RLE at byte {pos}: {reason}")]
    Rle { pos: usize, reason: &'static str },
    #[error("unknown pattern {0:?}")]
    UnknownPattern(String),
}

pub type Result<T> = std::result::Result<T, Error>;
