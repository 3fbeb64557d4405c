use rand::{Rng, SeedableRng, rngs::StdRng};

mod kruskal;

use kruskal::randomized_spanning_tree;

use crate::{
    error::MazeError,
    maze::{Cell, Coord, Grid},
};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Generates a `rows` x `cols` perfect maze.
///
/// Cells at even row and even column are junctions and always come out as
/// passages. Every junction is reachable from every other one through
/// exactly one simple path.
pub fn generate_maze(rows: usize, cols: usize, seed: Option<u64>) -> Result<Grid, MazeError> {
    let mut rng = get_rng(seed);
    generate_maze_with_rng(rows, cols, &mut rng)
}

pub fn generate_maze_with_rng<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    rng: &mut R,
) -> Result<Grid, MazeError> {
    let mut grid = Grid::new(rows, cols, Cell::Wall)?;
    (0..rows).step_by(2).for_each(|row| {
        (0..cols)
            .step_by(2)
            .for_each(|col| grid.set(Coord::new(row, col), Cell::Passage));
    });

    let tree = randomized_spanning_tree(rows, cols, rng);
    tracing::debug!(
        "[generate] {}x{} maze, carving {} tree edges",
        rows,
        cols,
        tree.len()
    );
    for edge in &tree {
        grid.set(edge.midpoint(), Cell::Passage);
    }

    carve_border_corridor(&mut grid);
    Ok(grid)
}

/// Even dimensions leave a double wall along the bottom/right border that the
/// tree never reaches; open it so the exit stays connected.
fn carve_border_corridor(grid: &mut Grid) {
    let (rows, cols) = (grid.rows(), grid.cols());
    let last_col = if cols % 2 == 0 { cols - 2 } else { cols - 1 };
    if rows % 2 == 0 {
        grid.set(Coord::new(rows - 1, last_col), Cell::Passage);
    }
    if cols % 2 == 0 {
        grid.set(Coord::new(rows - 1, last_col + 1), Cell::Passage);
    }
}
