use crate::collections::FxIndexMap;
use crate::errors::SearchError;
use crate::geometry::cell_euclidean;
use crate::grid::{Grid, Node, Position};
use super::search::{best_first, Scoring};
use super::SearchOutcome;


/// g + h bookkeeping for A*
struct AStarScoring {
    end: Position,
    f_score: FxIndexMap<Position, f64>, // g + straight-line distance to end, missing = infinity
}

impl Scoring for AStarScoring {
    type Priority = f64;

    fn start_priority(&self) -> f64 {
        0.0
    }

    fn relax(&mut self, pos: Position, g: u32) -> f64 {
        let f = g as f64 + cell_euclidean(pos, self.end);
        self.f_score.insert(pos, f);
        f
    }
}


/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
pub struct AStar {}

impl AStar {

    /// Search from `start` to `end` over the grid's cached adjacency
    /// The straight-line heuristic never overestimates 4-way grid distance,
    /// so a returned path is always a shortest one.
    /// Adjacency must have been refreshed since the last barrier change.
    pub fn run<F, C>(&self, grid: &mut Grid, start: Position, end: Position, mut on_change: F, mut is_cancelled: C) -> Result<SearchOutcome, SearchError>
    where
        F: FnMut(&Node), // called after every state change
        C: FnMut() -> bool, // polled once per dequeue
    {
        log::debug!("a_star: {start} -> {end} on a {0}x{0} grid", grid.rows());

        let mut f_score = FxIndexMap::default();
        f_score.insert(start, cell_euclidean(start, end));
        let scoring = AStarScoring { end, f_score };

        best_first(grid, start, end, scoring, &mut on_change, &mut is_cancelled)
    }
}
