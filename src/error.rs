use thiserror::Error;

/// Everything that can go wrong while building an automaton or starting the viewer.
///
/// Stepping a constructed engine never fails, so all of these surface either
/// at construction or while the command line is being turned into settings.
#[derive(Debug, Error)]
pub enum Error {
    #[error("rule number {0} is outside 0..=255")]
    InvalidRule(i64),

    #[error("rule `{0}` is not a decimal number")]
    ParseRule(String),

    #[error("initial row has {actual} cells, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("size must be at least 1")]
    InvalidSize,

    #[error("unexpected character {0:?} in row, use 0/1 or ./#")]
    ParseRow(char),

    #[error("grid `{0}` is not of the form ROWSxCOLS")]
    ParseGrid(String),

    #[error("random source unavailable: {0}")]
    Entropy(#[from] rand::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("viewer failed: {0}")]
    Viewer(String),
}

pub type Result<T> = std::result::Result<T, Error>;
