use std::fmt;


/// Cell coordinates, row-major
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}


/// Traversal classification of a cell
/// The shell picks glyphs/colours from this, the engine never renders
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NodeState {
    #[default]
    Unvisited,
    Open, // on the frontier
    Closed, // expanded
    Barrier,
    Start,
    End,
    Path,
}


/// A single grid cell
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    row: usize,
    col: usize,
    state: NodeState,
    neighbors: Vec<Position>, // cached adjacency, see Grid::refresh_all_adjacency
}

impl Node {

    pub(crate) fn new(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            state: NodeState::Unvisited,
            neighbors: Vec::with_capacity(4),
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn state(&self) -> NodeState {
        self.state
    }

    pub fn classify(&mut self, state: NodeState) {
        self.state = state;
    }

    pub fn is_barrier(&self) -> bool {
        self.state == NodeState::Barrier
    }

    /// Adjacent open cells in down, up, left, right order
    /// Only valid as of the last adjacency refresh
    pub fn neighbors(&self) -> &[Position] {
        &self.neighbors
    }

    pub(crate) fn set_neighbors(&mut self, neighbors: Vec<Position>) {
        self.neighbors = neighbors;
    }
}
