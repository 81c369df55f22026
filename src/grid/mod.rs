mod node;

pub use node::{Node, NodeState, Position};

use std::ops::{Index, IndexMut};
use rand::Rng;

use crate::config::{MAX_ROWS, MIN_ROWS};
use crate::errors::GridError;


/// Square board of cells
/// Nodes are stored row-major and live exactly as long as the grid
#[derive(Clone, Debug)]
pub struct Grid {
    rows: usize,
    cell_width: u32, // pixel size of one cell, only used to map shell coordinates
    nodes: Vec<Node>,
}

impl Grid {

    /// Create a `rows x rows` grid of unvisited cells
    pub fn new(rows: usize, cell_width: u32) -> Result<Self, GridError> {
        if !(MIN_ROWS..=MAX_ROWS).contains(&rows) {
            return Err(GridError::InvalidSize(rows));
        }
        if cell_width == 0 {
            return Err(GridError::ZeroCellWidth);
        }

        let mut nodes = Vec::with_capacity(rows * rows);
        for i in 0..rows {
            for j in 0..rows {
                nodes.push(Node::new(i, j));
            }
        }

        Ok(Self { rows, cell_width, nodes })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell_width(&self) -> u32 {
        self.cell_width
    }

    /// Total number of cells, also the upper bound on any path length
    pub fn cell_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.rows
    }

    /// Bounds-checked lookup
    pub fn cell_at(&self, row: usize, col: usize) -> Result<&Node, GridError> {
        let idx = self.index_of(row, col)?;
        Ok(&self.nodes[idx])
    }

    pub fn cell_at_mut(&mut self, row: usize, col: usize) -> Result<&mut Node, GridError> {
        let idx = self.index_of(row, col)?;
        Ok(&mut self.nodes[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Number of cells currently in `state`
    pub fn count(&self, state: NodeState) -> usize {
        self.nodes.iter().filter(|n| n.state() == state).count()
    }

    /// Map a pixel inside the shell's board to the cell under it
    /// The x axis runs along rows, matching how cells are laid out on screen
    pub fn position_at_pixel(&self, x: u32, y: u32) -> Result<Position, GridError> {
        let row = (x / self.cell_width) as usize;
        let col = (y / self.cell_width) as usize;
        let pos = Position::new(row, col);
        if !self.contains(pos) {
            return Err(GridError::PixelOutOfRange { x, y });
        }
        Ok(pos)
    }

    /// Open cells next to `pos` in down, up, left, right order
    fn open_neighbors(&self, pos: Position) -> Vec<Position> {
        let Position { row, col } = pos;
        let mut found = Vec::with_capacity(4);

        let candidates = [
            (row + 1 < self.rows).then(|| Position::new(row + 1, col)), // down
            (row > 0).then(|| Position::new(row - 1, col)), // up
            (col > 0).then(|| Position::new(row, col - 1)), // left
            (col + 1 < self.rows).then(|| Position::new(row, col + 1)), // right
        ];

        for candidate in candidates.into_iter().flatten() {
            if !self[candidate].is_barrier() {
                found.push(candidate);
            }
        }
        found
    }

    /// Rebuild the adjacency cache of a single cell from the current barrier layout
    pub fn compute_neighbors(&mut self, pos: Position) -> Result<(), GridError> {
        let idx = self.index_of(pos.row, pos.col)?;
        let neighbors = self.open_neighbors(pos);
        self.nodes[idx].set_neighbors(neighbors);
        Ok(())
    }

    /// Recompute adjacency for every cell
    /// Must run after the barrier layout is final and before each search
    pub fn refresh_all_adjacency(&mut self) {
        let lists: Vec<Vec<Position>> = self.nodes
            .iter()
            .map(|n| self.open_neighbors(n.position()))
            .collect();

        for (node, neighbors) in self.nodes.iter_mut().zip(lists) {
            node.set_neighbors(neighbors);
        }
    }

    /// Turn unvisited cells into barriers with probability `density`
    /// Cells listed in `keep` are never touched. Returns how many barriers were placed.
    pub fn scatter_barriers<R: Rng + ?Sized>(&mut self, density: f64, rng: &mut R, keep: &[Position]) -> Result<usize, GridError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(GridError::InvalidDensity(density));
        }

        let mut placed = 0;
        for node in self.nodes.iter_mut() {
            if node.state() != NodeState::Unvisited || keep.contains(&node.position()) {
                continue;
            }
            if rng.random_bool(density) {
                node.classify(NodeState::Barrier);
                placed += 1;
            }
        }
        Ok(placed)
    }

    fn index_of(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row >= self.rows || col >= self.rows {
            return Err(GridError::OutOfRange { row, col, rows: self.rows });
        }
        Ok(row * self.rows + col)
    }
}

/// Unchecked access for positions already known to be on the grid
impl Index<Position> for Grid {
    type Output = Node;

    fn index(&self, pos: Position) -> &Node {
        &self.nodes[pos.row * self.rows + pos.col]
    }
}

impl IndexMut<Position> for Grid {
    fn index_mut(&mut self, pos: Position) -> &mut Node {
        &mut self.nodes[pos.row * self.rows + pos.col]
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(4, 200).unwrap();
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.cell_count(), 16);
        assert_eq!(grid.count(NodeState::Unvisited), 16);

        // row-major coordinates
        let coords: Vec<_> = grid.iter().take(5).map(|n| n.position()).collect();
        assert_eq!(coords, vec![
            Position::new(0, 0),
            Position::new(0, 1),
            Position::new(0, 2),
            Position::new(0, 3),
            Position::new(1, 0),
        ]);
    }

    #[test]
    fn test_invalid_sizes() {
        assert_eq!(Grid::new(1, 10).unwrap_err(), GridError::InvalidSize(1));
        assert_eq!(Grid::new(51, 10).unwrap_err(), GridError::InvalidSize(51));
        assert_eq!(Grid::new(5, 0).unwrap_err(), GridError::ZeroCellWidth);
    }

    #[test]
    fn test_cell_at_out_of_range() {
        let grid = Grid::new(3, 10).unwrap();
        assert!(grid.cell_at(2, 2).is_ok());
        assert_eq!(grid.cell_at(3, 0).unwrap_err(), GridError::OutOfRange { row: 3, col: 0, rows: 3 });
        assert!(matches!(grid.cell_at(0, 7), Err(GridError::OutOfRange { .. })));
    }

    #[test]
    fn test_neighbor_order_and_bounds() {
        let mut grid = Grid::new(3, 10).unwrap();
        grid.refresh_all_adjacency();

        // centre sees all four, in down, up, left, right order
        assert_eq!(grid.cell_at(1, 1).unwrap().neighbors(), &[
            Position::new(2, 1),
            Position::new(0, 1),
            Position::new(1, 0),
            Position::new(1, 2),
        ]);

        // corners only have two
        assert_eq!(grid.cell_at(0, 0).unwrap().neighbors(), &[
            Position::new(1, 0),
            Position::new(0, 1),
        ]);
        assert_eq!(grid.cell_at(2, 2).unwrap().neighbors(), &[
            Position::new(1, 2),
            Position::new(2, 1),
        ]);
    }

    #[test]
    fn test_barriers_excluded_from_adjacency() {
        let mut grid = Grid::new(3, 10).unwrap();
        grid.cell_at_mut(0, 1).unwrap().classify(NodeState::Barrier);
        grid.cell_at_mut(2, 1).unwrap().classify(NodeState::Barrier);
        grid.refresh_all_adjacency();

        let centre = grid.cell_at(1, 1).unwrap();
        assert_eq!(centre.neighbors(), &[Position::new(1, 0), Position::new(1, 2)]);

        for node in grid.iter() {
            assert!(!node.neighbors().contains(&node.position()));
            for &n in node.neighbors() {
                assert!(!grid[n].is_barrier());
            }
        }
    }

    #[test]
    fn test_adjacency_is_a_snapshot() {
        let mut grid = Grid::new(3, 10).unwrap();
        grid.refresh_all_adjacency();
        grid.cell_at_mut(1, 0).unwrap().classify(NodeState::Barrier);

        // stale until recomputed
        assert!(grid.cell_at(0, 0).unwrap().neighbors().contains(&Position::new(1, 0)));
        grid.compute_neighbors(Position::new(0, 0)).unwrap();
        assert_eq!(grid.cell_at(0, 0).unwrap().neighbors(), &[Position::new(0, 1)]);
    }

    #[test]
    fn test_refresh_is_idempotent() {
        let mut grid = Grid::new(6, 10).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        grid.scatter_barriers(0.3, &mut rng, &[]).unwrap();

        grid.refresh_all_adjacency();
        let first: Vec<Vec<Position>> = grid.iter().map(|n| n.neighbors().to_vec()).collect();
        grid.refresh_all_adjacency();
        let second: Vec<Vec<Position>> = grid.iter().map(|n| n.neighbors().to_vec()).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_position_at_pixel() {
        let grid = Grid::new(8, 100).unwrap();
        assert_eq!(grid.position_at_pixel(0, 0).unwrap(), Position::new(0, 0));
        assert_eq!(grid.position_at_pixel(250, 799).unwrap(), Position::new(2, 7));
        assert_eq!(grid.position_at_pixel(800, 10).unwrap_err(), GridError::PixelOutOfRange { x: 800, y: 10 });
    }

    #[test]
    fn test_scatter_barriers() {
        let mut grid = Grid::new(10, 10).unwrap();
        let keep = [Position::new(0, 0), Position::new(9, 9)];
        let mut rng = StdRng::seed_from_u64(42);

        let placed = grid.scatter_barriers(1.0, &mut rng, &keep).unwrap();
        assert_eq!(placed, 98);
        assert_eq!(grid.count(NodeState::Barrier), 98);
        assert!(!grid[keep[0]].is_barrier());
        assert!(!grid[keep[1]].is_barrier());

        assert_eq!(
            grid.scatter_barriers(1.5, &mut rng, &[]).unwrap_err(),
            GridError::InvalidDensity(1.5)
        );
    }
}
