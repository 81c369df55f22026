use thiserror::Error;

use crate::grid::Position;


/// Startup configuration problems, fatal before any grid is built
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("invalid row count {0}: must be between {min} and {max}", min = crate::config::MIN_ROWS, max = crate::config::MAX_ROWS)]
    InvalidRows(usize),
    #[error("invalid row count {0:?}: not an integer")]
    UnparsableRows(String),
    #[error("unknown algorithm {0:?}: valid algorithms are a_star, dijkstra")]
    UnknownAlgorithm(String),
}

#[derive(Error, Debug, PartialEq)]
pub enum GridError {
    #[error("cell ({row}, {col}) is outside a {rows}x{rows} grid")]
    OutOfRange { row: usize, col: usize, rows: usize },
    #[error("pixel ({x}, {y}) is outside the board")]
    PixelOutOfRange { x: u32, y: u32 },
    #[error("grid size {0} is out of range")]
    InvalidSize(usize),
    #[error("cell width must be positive")]
    ZeroCellWidth,
    #[error("barrier density {0} is not within [0, 1]")]
    InvalidDensity(f64),
}

/// Contract violations reported by the search engine
/// An unreachable goal is not an error, see `SearchOutcome::NoPathExists`
#[derive(Error, Debug, PartialEq)]
pub enum SearchError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("endpoint {0} is a barrier")]
    BlockedEndpoint(Position),
    #[error("predecessor chain from {0} does not reach the start")]
    CorruptedPath(Position),
}
