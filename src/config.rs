use crate::errors::ConfigError;
use crate::graph_algos::Algorithm;

/// Smallest board side accepted at startup
pub const MIN_ROWS: usize = 2;
/// Largest board side accepted at startup
pub const MAX_ROWS: usize = 50;
/// Side of the square board in pixels
pub const WINDOW_WIDTH: u32 = 800;


/// Validated startup parameters
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub rows: usize,
    pub algorithm: Algorithm,
    pub window_width: u32,
}

impl Config {

    /// Validate the row count and algorithm selector eagerly
    pub fn new(rows: usize, algorithm: &str) -> Result<Self, ConfigError> {
        if !(MIN_ROWS..=MAX_ROWS).contains(&rows) {
            return Err(ConfigError::InvalidRows(rows));
        }
        let algorithm = algorithm.parse::<Algorithm>()?;

        Ok(Self {
            rows,
            algorithm,
            window_width: WINDOW_WIDTH,
        })
    }

    /// Same as `new` but takes the row count as raw text, the way it arrives on the command line
    pub fn parse(rows: &str, algorithm: &str) -> Result<Self, ConfigError> {
        let rows = rows
            .trim()
            .parse::<usize>()
            .map_err(|_| ConfigError::UnparsableRows(rows.to_string()))?;
        Self::new(rows, algorithm)
    }

    /// Pixel size of one cell
    pub fn cell_width(&self) -> u32 {
        // rows is at most MAX_ROWS so this never truncates to zero
        self.window_width / self.rows as u32
    }
}
