use crate::collections::FxIndexMap;
use crate::errors::SearchError;
use crate::grid::{Grid, Node, NodeState, Position};
use super::frontier::Frontier;
use super::shortest_path::reconstruct_path;
use super::SearchOutcome;

use std::fmt::Debug;


/// How a best-first search ranks frontier cells
pub(crate) trait Scoring {
    type Priority: PartialOrd + Copy + Debug;

    /// Priority the start cell is queued with
    fn start_priority(&self) -> Self::Priority;

    /// Record an improved cost `g` for `pos` and return its frontier priority
    fn relax(&mut self, pos: Position, g: u32) -> Self::Priority;
}


/// Best-first search from `start` until `end` is dequeued, the frontier runs dry,
/// or `is_cancelled` says stop.
/// Every state change is reported through `on_change` before the search moves on.
pub(crate) fn best_first<S, F, C>(
    grid: &mut Grid,
    start: Position,
    end: Position,
    mut scoring: S,
    on_change: &mut F,
    is_cancelled: &mut C,
) -> Result<SearchOutcome, SearchError>
where
    S: Scoring,
    F: FnMut(&Node),
    C: FnMut() -> bool,
{
    check_endpoint(grid, start)?;
    check_endpoint(grid, end)?;

    // best known cost from start, a missing entry means unreached
    let mut g_score: FxIndexMap<Position, u32> = FxIndexMap::default();
    g_score.insert(start, 0);

    // cell -> cell it was reached from
    let mut previous: FxIndexMap<Position, Position> = FxIndexMap::default();

    let mut frontier: Frontier<S::Priority> = Frontier::new();
    frontier.push(start, scoring.start_priority());

    let mut dequeued = 0usize;

    loop {
        if is_cancelled() {
            log::debug!("search cancelled after {dequeued} dequeues");
            return Ok(SearchOutcome::NoPathExists);
        }

        let Some(current) = frontier.pop() else {
            break;
        };
        dequeued += 1;

        if current == end {
            let path = reconstruct_path(grid, &previous, start, end, on_change)?;
            log::debug!("reached {end} after {dequeued} dequeues, path has {} cells", path.len());
            return Ok(SearchOutcome::PathFound(path));
        }

        // every edge costs 1
        let candidate = g_score[&current] + 1;

        // the node list is cloned so cells can be re-classified while iterating
        let neighbors = grid[current].neighbors().to_vec();
        for neighbor in neighbors {
            let improved = g_score.get(&neighbor).is_none_or(|&g| candidate < g);
            if !improved {
                continue;
            }

            previous.insert(neighbor, current);
            g_score.insert(neighbor, candidate);
            let priority = scoring.relax(neighbor, candidate);

            if !frontier.contains(&neighbor) {
                frontier.push(neighbor, priority);
                mark(grid, neighbor, NodeState::Open, on_change);
            }
        }

        log::trace!("expanded {current}, frontier holds {}", frontier.len());

        if current != start {
            mark(grid, current, NodeState::Closed, on_change);
        }
    }

    log::debug!("frontier exhausted after {dequeued} dequeues, {end} unreachable");
    Ok(SearchOutcome::NoPathExists)
}


/// Classify a cell and report it to the observer
pub(crate) fn mark<F>(grid: &mut Grid, pos: Position, state: NodeState, on_change: &mut F)
where
    F: FnMut(&Node),
{
    grid[pos].classify(state);
    on_change(&grid[pos]);
}

fn check_endpoint(grid: &Grid, pos: Position) -> Result<(), SearchError> {
    let node = grid.cell_at(pos.row, pos.col)?;
    if node.is_barrier() {
        return Err(SearchError::BlockedEndpoint(pos));
    }
    Ok(())
}
