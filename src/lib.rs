pub mod config;
pub mod error;
pub mod generators;
pub mod logging;
pub mod maze;
pub mod solvers;

pub use error::MazeError;
pub use generators::generate_maze;
pub use maze::{Cell, Coord, Grid, Path};
pub use solvers::{Solver, find_path};

/// Accepts an externally supplied matrix verbatim, 0 being a passage and 1 a wall.
pub fn load_maze<R: AsRef<[u8]>>(cells: &[R]) -> Result<Grid, MazeError> {
    Grid::from_cells(cells)
}
