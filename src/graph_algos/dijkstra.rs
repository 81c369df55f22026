use crate::errors::SearchError;
use crate::grid::{Grid, Node, Position};
use super::search::{best_first, Scoring};
use super::SearchOutcome;


/// Uniform-cost ranking: the frontier is ordered by cost from start alone
struct UniformCost;

impl Scoring for UniformCost {
    type Priority = u32;

    fn start_priority(&self) -> u32 {
        0
    }

    fn relax(&mut self, _pos: Position, g: u32) -> u32 {
        g
    }
}


/// Identify the shortest path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// From start cell, expand outward in order of cost until the end cell is dequeued
/// Adjacency must have been refreshed since the last barrier change.
pub fn dijkstra<F, C>(grid: &mut Grid, start: Position, end: Position, mut on_change: F, mut is_cancelled: C) -> Result<SearchOutcome, SearchError>
where
    F: FnMut(&Node), // called after every state change
    C: FnMut() -> bool, // polled once per dequeue
    {
    log::debug!("dijkstra: {start} -> {end} on a {0}x{0} grid", grid.rows());
    best_first(grid, start, end, UniformCost, &mut on_change, &mut is_cancelled)
}
