pub mod a_star;
pub mod dijkstra;
mod frontier;
mod search;
mod shortest_path;

use std::{fmt, str::FromStr};

use crate::errors::{ConfigError, SearchError};
use crate::grid::{Grid, Node, Position};


/// Terminal result of a search run
/// An unreachable goal and a cancelled run both end as `NoPathExists`
#[derive(Clone, Debug, PartialEq)]
pub enum SearchOutcome {
    PathFound(Vec<Position>), // start to end inclusive
    NoPathExists,
}

impl SearchOutcome {

    pub fn path(&self) -> Option<&[Position]> {
        match self {
            SearchOutcome::PathFound(path) => Some(path),
            SearchOutcome::NoPathExists => None,
        }
    }

    /// Number of moves on the path
    pub fn path_len(&self) -> Option<usize> {
        self.path().map(|p| p.len() - 1)
    }
}


/// Search algorithms selectable at startup
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    AStar,
    Dijkstra,
}

impl Algorithm {

    /// Run the selected search; see `AStar::run` and `dijkstra::dijkstra`
    pub fn run<F, C>(&self, grid: &mut Grid, start: Position, end: Position, on_change: F, is_cancelled: C) -> Result<SearchOutcome, SearchError>
    where
        F: FnMut(&Node),
        C: FnMut() -> bool,
    {
        match self {
            Algorithm::AStar => a_star::AStar {}.run(grid, start, end, on_change, is_cancelled),
            Algorithm::Dijkstra => dijkstra::dijkstra(grid, start, end, on_change, is_cancelled),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::AStar => "a_star",
            Algorithm::Dijkstra => "dijkstra",
        }
    }
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "a_star" => Ok(Algorithm::AStar),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            other => Err(ConfigError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
