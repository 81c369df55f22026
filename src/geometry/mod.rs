use num_traits::{Float, Num, Signed};

use crate::grid::Position;


/// Manhattan distance
pub fn manhattan_distance<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Num + Copy + Signed,
    {
    (x1 - x2).abs() + (y1 - y2).abs()
}

/// Euclidean distance
pub fn euclidean<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Float,
    {
    ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt()
}

/// Straight-line distance between two cells, treating (row, col) as plane coordinates.
/// Never larger than the grid distance, so it is admissible for 4-way movement.
pub fn cell_euclidean(a: Position, b: Position) -> f64 {
    euclidean(a.row as f64, a.col as f64, b.row as f64, b.col as f64)
}

/// Number of unit moves between two cells on an open grid
pub fn cell_manhattan(a: Position, b: Position) -> usize {
    manhattan_distance(a.row as i64, a.col as i64, b.row as i64, b.col as i64) as usize
}
