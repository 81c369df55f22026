use crate::collections::FxIndexMap;
use crate::errors::SearchError;
use crate::grid::{Grid, Node, NodeState, Position};
use super::search::mark;

/// Construct the shortest path from the goal node back to the start node
/// Cells strictly between start and goal are marked Path as they are walked,
/// then start and goal are re-marked so they stay visible.
/// Returns the ordered path as a vector of cells from start to goal
pub(crate) fn reconstruct_path<F>(
    grid: &mut Grid,
    previous: &FxIndexMap<Position, Position>,
    start: Position,
    end: Position,
    on_change: &mut F,
) -> Result<Vec<Position>, SearchError>
where
    F: FnMut(&Node),
{
    let mut path = vec![end];
    let mut current = end;

    // Trace back from goal to start
    while let Some(&parent) = previous.get(&current) {
        // a path can never visit more cells than the grid holds
        if path.len() >= grid.cell_count() {
            return Err(SearchError::CorruptedPath(end));
        }
        if parent != start {
            mark(grid, parent, NodeState::Path, on_change);
        }
        path.push(parent);
        current = parent;
    }

    if current != start {
        return Err(SearchError::CorruptedPath(end));
    }

    mark(grid, start, NodeState::Start, on_change);
    mark(grid, end, NodeState::End, on_change);

    // The path is in reverse order, so reverse it
    path.reverse();
    Ok(path)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_reconstruction() {
        let mut grid = Grid::new(3, 10).unwrap();
        let mut previous: FxIndexMap<Position, Position> = FxIndexMap::default();

        // (0,0) -> (0,1) -> (1,1) -> (2,1)
        previous.insert(Position::new(0, 1), Position::new(0, 0));
        previous.insert(Position::new(1, 1), Position::new(0, 1));
        previous.insert(Position::new(2, 1), Position::new(1, 1));
        // branch that is not on the path
        previous.insert(Position::new(1, 0), Position::new(0, 0));

        let mut seen = Vec::new();
        let path = reconstruct_path(
            &mut grid,
            &previous,
            Position::new(0, 0),
            Position::new(2, 1),
            &mut |n: &Node| seen.push((n.position(), n.state())),
        ).unwrap();

        assert_eq!(path, vec![
            Position::new(0, 0),
            Position::new(0, 1),
            Position::new(1, 1),
            Position::new(2, 1),
        ]);
        assert_eq!(seen, vec![
            (Position::new(1, 1), NodeState::Path),
            (Position::new(0, 1), NodeState::Path),
            (Position::new(0, 0), NodeState::Start),
            (Position::new(2, 1), NodeState::End),
        ]);
        assert_eq!(grid.count(NodeState::Path), 2);
        assert_eq!(grid[Position::new(1, 0)].state(), NodeState::Unvisited);
    }

    #[test]
    fn test_start_equals_end() {
        let mut grid = Grid::new(2, 10).unwrap();
        let previous: FxIndexMap<Position, Position> = FxIndexMap::default();
        let pos = Position::new(1, 1);

        let path = reconstruct_path(&mut grid, &previous, pos, pos, &mut |_: &Node| {}).unwrap();
        assert_eq!(path, vec![pos]);
        assert_eq!(grid[pos].state(), NodeState::End);
    }

    #[test]
    fn test_cycle_is_reported() {
        let mut grid = Grid::new(2, 10).unwrap();
        let mut previous: FxIndexMap<Position, Position> = FxIndexMap::default();
        previous.insert(Position::new(1, 1), Position::new(1, 0));
        previous.insert(Position::new(1, 0), Position::new(1, 1));

        let result = reconstruct_path(
            &mut grid,
            &previous,
            Position::new(0, 0),
            Position::new(1, 1),
            &mut |_: &Node| {},
        );
        assert_eq!(result, Err(SearchError::CorruptedPath(Position::new(1, 1))));
    }

    #[test]
    fn test_chain_not_reaching_start() {
        let mut grid = Grid::new(3, 10).unwrap();
        let mut previous: FxIndexMap<Position, Position> = FxIndexMap::default();
        previous.insert(Position::new(2, 2), Position::new(2, 1));

        let result = reconstruct_path(
            &mut grid,
            &previous,
            Position::new(0, 0),
            Position::new(2, 2),
            &mut |_: &Node| {},
        );
        assert!(matches!(result, Err(SearchError::CorruptedPath(_))));
    }
}
