mod cell;
mod coord;
mod edge;
mod grid;
mod path;

pub use cell::Cell;
pub use coord::Coord;
pub use edge::Edge;
pub use grid::Grid;
pub use path::Path;

/// Cardinal step directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Up,
    Down,
    Right,
}

impl Direction {
    /// All directions, in the priority order used by the recursive solver.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Down,
        Direction::Right,
    ];
}
