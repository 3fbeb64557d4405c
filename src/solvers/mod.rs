mod dfs;
pub mod graph;
mod recursive;
mod wave;

use crate::error::MazeError;
use crate::maze::{Coord, Edge, Grid, Path};
use dfs::solve_dfs;
use recursive::solve_recursive;
use wave::solve_wave;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Solver {
    Wave,
    DepthFirst,
    Recursive,
}

impl Solver {
    pub const ALL: [Solver; 3] = [Solver::Wave, Solver::DepthFirst, Solver::Recursive];
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Wave => write!(f, "Wave Algorithm (BFS)"),
            Solver::DepthFirst => write!(f, "Depth-First Search (DFS)"),
            Solver::Recursive => write!(f, "Recursive Backtracking"),
        }
    }
}

/// Finds a path from the top-left entrance to the bottom-right exit.
///
/// The grid is only read. Solving is deterministic: the same grid and
/// solver always give the same path.
pub fn find_path(grid: &Grid, solver: Solver) -> Result<Path, MazeError> {
    let start = grid.entrance();
    let goal = grid.exit();
    if !grid.is_passage(start) || !grid.is_passage(goal) {
        return Err(MazeError::Unreachable { solver });
    }

    let steps = match solver {
        Solver::Wave => solve_wave(grid, start, goal),
        Solver::DepthFirst => solve_dfs(grid, start, goal),
        Solver::Recursive => solve_recursive(grid, start, goal),
    }
    .ok_or(MazeError::Unreachable { solver })?;

    tracing::debug!("[solve] {} found a path of {} steps", solver, steps.len());
    Ok(Path::new(steps))
}

/// Expands key-node control points into every cell walked between them.
fn expand_control_points(points: &[Coord]) -> Vec<Coord> {
    let mut steps = Vec::with_capacity(points.len());
    steps.extend(points.first().copied());
    points.windows(2).for_each(|pair| {
        steps.extend(Edge::steps_between(pair[0], pair[1]));
        steps.push(pair[1]);
    });
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::generate_maze;

    fn open_field() -> Grid {
        Grid::from_cells(&[[0u8; 5]; 5]).unwrap()
    }

    fn coords(pairs: &[(usize, usize)]) -> Vec<Coord> {
        pairs.iter().map(|&p| p.into()).collect()
    }

    fn assert_valid(grid: &Grid, path: &Path) {
        assert_eq!(path.steps().first(), Some(&grid.entrance()));
        assert_eq!(path.steps().last(), Some(&grid.exit()));
        assert!(path.is_contiguous(), "gap in {}", path);
        assert!(grid.mark_path(path.clone()).is_ok(), "wall in {}", path);
    }

    #[test]
    fn test_expand_control_points() {
        let points = coords(&[(0, 0), (0, 3), (2, 3)]);
        assert_eq!(
            expand_control_points(&points),
            coords(&[(0, 0), (0, 1), (0, 2), (0, 3), (1, 3), (2, 3)])
        );
        assert!(expand_control_points(&[]).is_empty());
    }

    #[test]
    fn test_single_cell() {
        let grid = generate_maze(1, 1, None).unwrap();
        for solver in Solver::ALL {
            let path = find_path(&grid, solver).unwrap();
            assert_eq!(path.steps(), &[Coord::new(0, 0)]);
        }
    }

    #[test]
    fn test_walled_entrance() {
        let grid = Grid::from_cells(&[[1u8, 0], [0, 0]]).unwrap();
        for solver in Solver::ALL {
            assert_eq!(
                find_path(&grid, solver),
                Err(MazeError::Unreachable { solver })
            );
        }
    }

    #[test]
    fn test_open_field_shortest() {
        let grid = open_field();
        let expected = coords(&[
            (0, 0),
            (1, 0),
            (2, 0),
            (3, 0),
            (4, 0),
            (4, 1),
            (4, 2),
            (4, 3),
            (4, 4),
        ]);
        for solver in [Solver::Wave, Solver::Recursive] {
            let path = find_path(&grid, solver).unwrap();
            assert_valid(&grid, &path);
            assert_eq!(path.steps(), expected.as_slice(), "{solver}");
        }
    }

    #[test]
    fn test_open_field_depth_first_sweeps() {
        // First unconsumed edge in scan order prefers rows, so the search snakes
        let grid = open_field();
        let path = find_path(&grid, Solver::DepthFirst).unwrap();
        assert_valid(&grid, &path);
        let expected = (0..5)
            .flat_map(|row| {
                let cols: Vec<usize> = if row % 2 == 0 {
                    (0..5).collect()
                } else {
                    (0..5).rev().collect()
                };
                cols.into_iter().map(move |col| Coord::new(row, col))
            })
            .collect::<Vec<_>>();
        assert_eq!(path.steps(), expected.as_slice());
    }

    #[test]
    fn test_bisected_grid_is_unreachable() {
        let grid: Grid = "0 0 0 0 0\n0 0 0 0 0\n1 1 1 1 1\n0 0 0 0 0\n0 0 0 0 0"
            .parse()
            .unwrap();
        for solver in Solver::ALL {
            assert_eq!(
                find_path(&grid, solver),
                Err(MazeError::Unreachable { solver })
            );
        }
    }

    #[test]
    fn test_isolated_exit_is_unreachable() {
        let grid = Grid::from_cells(&[[0u8, 0, 0], [0, 0, 1], [0, 1, 0]]).unwrap();
        for solver in Solver::ALL {
            assert!(find_path(&grid, solver).is_err());
        }
    }

    #[test]
    fn test_solvers_agree_on_generated_mazes() {
        // A perfect maze has exactly one simple route between entrance and exit
        for seed in 0..10 {
            let (rows, cols) = (9 + seed as usize, 14 - seed as usize / 2);
            let grid = generate_maze(rows, cols, Some(seed)).unwrap();
            let paths = Solver::ALL.map(|solver| find_path(&grid, solver).unwrap());
            for path in &paths {
                assert_valid(&grid, path);
            }
            assert_eq!(paths[0].steps(), paths[1].steps());
            assert_eq!(paths[1].steps(), paths[2].steps());
        }
    }

    #[test]
    fn test_solving_is_idempotent() {
        let grid = generate_maze(31, 17, Some(11)).unwrap();
        let before = grid.clone();
        for solver in Solver::ALL {
            assert_eq!(find_path(&grid, solver), find_path(&grid, solver));
        }
        assert_eq!(grid, before);
    }

    #[test]
    fn test_loop_around_pillar() {
        // 0 0 0
        // 0 1 0
        // 0 0 0
        let grid = Grid::from_cells(&[[0u8, 0, 0], [0, 1, 0], [0, 0, 0]]).unwrap();
        for solver in Solver::ALL {
            let path = find_path(&grid, solver).unwrap();
            assert_valid(&grid, &path);
            assert_eq!(path.len(), 5, "{solver}");
        }
    }

    #[test]
    fn test_large_maze() {
        let grid = generate_maze(200, 200, Some(2024)).unwrap();
        for solver in Solver::ALL {
            let path = find_path(&grid, solver).unwrap();
            assert_valid(&grid, &path);
        }
    }
}
