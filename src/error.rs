use thiserror::Error;

/// Contract violations reported by the engine.
///
/// None of these are retryable: each one means the caller handed the engine
/// something it should never have been given.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A negative dimension, or one whose cell count does not fit in memory.
    #[error("invalid grid size {rows}x{cols}")]
    InvalidSize { rows: i64, cols: i64 },

    /// Coordinate access outside `[0, rows) x [0, cols)`.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: i64,
        col: i64,
        rows: usize,
        cols: usize,
    },

    /// The cell buffer and the activity buffer passed to a step disagree in shape.
    #[error("cell buffer is {grid:?} but activity buffer is {activity:?}")]
    ShapeMismatch {
        grid: (usize, usize),
        activity: (usize, usize),
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
