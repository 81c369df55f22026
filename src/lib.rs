//! Grid shortest-path engine for interactive path visualizers.
//!
//! A [`Grid`] of [`Node`]s is edited through a [`Session`] (start, end,
//! barriers), then searched with A* or Dijkstra. The search reports every
//! cell state change through a caller-supplied closure and polls a second
//! closure for cancellation, so any front end can animate it.
//!
//! ```
//! use pathviz::{Algorithm, Grid, Position};
//!
//! let mut grid = Grid::new(5, 10).unwrap();
//! grid.refresh_all_adjacency();
//! let outcome = Algorithm::AStar
//!     .run(&mut grid, Position::new(0, 0), Position::new(4, 4), |_| {}, || false)
//!     .unwrap();
//! assert_eq!(outcome.path_len(), Some(8));
//! ```

pub mod config;
pub mod errors;
pub mod geometry;
pub mod graph_algos;
pub mod grid;
pub mod session;

mod collections;

pub use config::Config;
pub use errors::{ConfigError, GridError, SearchError};
pub use graph_algos::{Algorithm, SearchOutcome};
pub use grid::{Grid, Node, NodeState, Position};
pub use session::{Edit, Session};
