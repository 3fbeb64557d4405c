use thiserror::Error;

use crate::maze::Coord;
use crate::solvers::Solver;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("Invalid maze dimensions {rows}x{cols}; both must be at least 1")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("Malformed grid; {0}")]
    MalformedGrid(String),
    #[error("No path from entrance to exit ({solver})")]
    Unreachable { solver: Solver },
    #[error("Path step {coord} is not a passage of this grid")]
    PathGridMismatch { coord: Coord },
}
