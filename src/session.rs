use rand::Rng;

use crate::config::Config;
use crate::errors::{GridError, SearchError};
use crate::graph_algos::{Algorithm, SearchOutcome};
use crate::grid::{Grid, Node, NodeState, Position};


/// What a click did to the board
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edit {
    StartPlaced,
    EndPlaced,
    BarrierPlaced,
    BarrierRemoved,
    Cleared,
    Ignored,
}


/// One editing session: a board, its endpoints and the chosen algorithm
/// Edits are locked once a search has run, until `reset`
pub struct Session {
    grid: Grid,
    algorithm: Algorithm,
    start: Option<Position>,
    end: Option<Position>,
    searched: bool,
}

impl Session {

    pub fn new(config: &Config) -> Result<Self, GridError> {
        Ok(Self {
            grid: Grid::new(config.rows, config.cell_width())?,
            algorithm: config.algorithm,
            start: None,
            end: None,
            searched: false,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn start(&self) -> Option<Position> {
        self.start
    }

    pub fn end(&self) -> Option<Position> {
        self.end
    }

    pub fn has_searched(&self) -> bool {
        self.searched
    }

    /// Main click: first places start, then end, then toggles barriers
    pub fn primary(&mut self, pos: Position) -> Result<Edit, GridError> {
        let node = self.grid.cell_at_mut(pos.row, pos.col)?;
        if self.searched {
            return Ok(Edit::Ignored);
        }

        // start and end never share a cell
        let edit = if self.start == Some(pos) || self.end == Some(pos) {
            Edit::Ignored
        } else if self.start.is_none() {
            node.classify(NodeState::Start);
            self.start = Some(pos);
            Edit::StartPlaced
        } else if self.end.is_none() {
            node.classify(NodeState::End);
            self.end = Some(pos);
            Edit::EndPlaced
        } else if node.is_barrier() {
            node.classify(NodeState::Unvisited);
            Edit::BarrierRemoved
        } else {
            node.classify(NodeState::Barrier);
            Edit::BarrierPlaced
        };

        log::info!("{edit:?} at {pos}");
        Ok(edit)
    }

    /// Alternate click: put a cell back to unvisited, forgetting it as an endpoint
    pub fn secondary(&mut self, pos: Position) -> Result<Edit, GridError> {
        let node = self.grid.cell_at_mut(pos.row, pos.col)?;
        if self.searched {
            return Ok(Edit::Ignored);
        }

        node.classify(NodeState::Unvisited);
        if self.start == Some(pos) {
            self.start = None;
        }
        if self.end == Some(pos) {
            self.end = None;
        }

        log::info!("cleared {pos}");
        Ok(Edit::Cleared)
    }

    /// Paint random barriers on free cells, leaving the endpoints alone
    pub fn scatter_barriers<R: Rng + ?Sized>(&mut self, density: f64, rng: &mut R) -> Result<usize, GridError> {
        if self.searched {
            return Ok(0);
        }
        let keep: Vec<Position> = self.start.into_iter().chain(self.end).collect();
        self.grid.scatter_barriers(density, rng, &keep)
    }

    /// Throw the board away and start over with a fresh one of the same size
    pub fn reset(&mut self) -> Result<(), GridError> {
        self.grid = Grid::new(self.grid.rows(), self.grid.cell_width())?;
        self.start = None;
        self.end = None;
        self.searched = false;
        log::info!("board reset");
        Ok(())
    }

    /// Refresh adjacency and run the configured search
    /// Returns `Ok(None)` when start or end is missing, or a search already ran
    pub fn run<F, C>(&mut self, on_change: F, is_cancelled: C) -> Result<Option<SearchOutcome>, SearchError>
    where
        F: FnMut(&Node),
        C: FnMut() -> bool,
    {
        if self.searched {
            return Ok(None);
        }
        let (Some(start), Some(end)) = (self.start, self.end) else {
            return Ok(None);
        };

        self.grid.refresh_all_adjacency();
        let outcome = self.algorithm.run(&mut self.grid, start, end, on_change, is_cancelled)?;
        self.searched = true;

        match outcome.path_len() {
            Some(len) => log::info!("{}: path of {len} moves from {start} to {end}", self.algorithm),
            None => log::info!("{}: no path from {start} to {end}", self.algorithm),
        }
        Ok(Some(outcome))
    }
}
