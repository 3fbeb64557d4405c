use std::{fmt, str::FromStr};

use super::{Cell, Coord, Direction, Path};
use crate::error::MazeError;

/// Row-major backing store of the maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    data: Box<[Cell]>,
    rows: usize,
    cols: usize,
}

impl Grid {
    pub fn new(rows: usize, cols: usize, cell: Cell) -> Result<Self, MazeError> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }
        let data = vec![cell; rows * cols].into_boxed_slice();
        Ok(Grid { data, rows, cols })
    }

    /// Loads an externally supplied matrix verbatim, 0 being a passage and 1 a wall.
    ///
    /// Connectivity is not checked here; an unsolvable grid only shows up
    /// when a solver fails to reach the exit.
    pub fn from_cells<R: AsRef<[u8]>>(cells: &[R]) -> Result<Self, MazeError> {
        let rows = cells.len();
        let cols = cells.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if rows == 0 || cols == 0 {
            return Err(MazeError::MalformedGrid(format!(
                "grid must have at least one row and one column, got {rows}x{cols}"
            )));
        }

        let mut data = Vec::with_capacity(rows * cols);
        for (row, codes) in cells.iter().enumerate() {
            let codes = codes.as_ref();
            if codes.len() != cols {
                return Err(MazeError::MalformedGrid(format!(
                    "row {row} has {} cells, expected {cols}",
                    codes.len()
                )));
            }
            for (col, &code) in codes.iter().enumerate() {
                let cell = Cell::from_code(code).ok_or_else(|| {
                    MazeError::MalformedGrid(format!(
                        "invalid cell code {code} at {}",
                        Coord::new(row, col)
                    ))
                })?;
                data.push(cell);
            }
        }

        Ok(Grid {
            data: data.into_boxed_slice(),
            rows,
            cols,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn entrance(&self) -> Coord {
        Coord::new(0, 0)
    }

    pub fn exit(&self) -> Coord {
        Coord::new(self.rows - 1, self.cols - 1)
    }

    fn ravel_index(&self, coord: Coord) -> usize {
        coord.row * self.cols + coord.col
    }

    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Checks if the coordinate is inside the grid and holds a passage.
    pub fn is_passage(&self, coord: Coord) -> bool {
        self.is_in_bounds(coord) && self[coord].is_passage()
    }

    pub fn set(&mut self, coord: Coord, cell: Cell) {
        let idx = self.ravel_index(coord);
        self.data[idx] = cell;
    }

    /// The neighbour one step away in `direction`, if it lies inside the grid.
    pub fn step(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        let next = match direction {
            Direction::Left => Coord::new(coord.row, coord.col.checked_sub(1)?),
            Direction::Up => Coord::new(coord.row.checked_sub(1)?, coord.col),
            Direction::Down => Coord::new(coord.row + 1, coord.col),
            Direction::Right => Coord::new(coord.row, coord.col + 1),
        };
        self.is_in_bounds(next).then_some(next)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.data
    }

    pub fn row(&self, row: usize) -> &[Cell] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Returns a copy of the grid with every step of `path` marked.
    ///
    /// The path is consumed. Fails on the first step that is not a passage.
    pub fn mark_path(&self, path: Path) -> Result<Grid, MazeError> {
        let mut marked = self.clone();
        for step in path {
            if !self.is_passage(step) {
                return Err(MazeError::PathGridMismatch { coord: step });
            }
            marked.set(step, Cell::MarkedPath);
        }
        Ok(marked)
    }

    fn write_border(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (0..self.cols + 2).try_for_each(|_| write!(f, "{}", Cell::Wall))?;
        writeln!(f)
    }

    /// Tab-separated matrix of cell codes, one row per line.
    pub fn matrix(&self) -> String {
        let mut out = String::new();
        for row in 0..self.rows {
            let line = self
                .row(row)
                .iter()
                .map(|cell| cell.code().to_string())
                .collect::<Vec<_>>()
                .join("\t");
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

impl std::ops::Index<Coord> for Grid {
    type Output = Cell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.data[self.ravel_index(index)]
    }
}

impl FromStr for Grid {
    type Err = MazeError;

    /// Parses whitespace-separated 0/1 codes, one row per non-empty line.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(row, line)| {
                line.split_whitespace()
                    .map(|token| {
                        token.parse::<u8>().map_err(|_| {
                            MazeError::MalformedGrid(format!(
                                "row {row}: {token:?} is not a cell code"
                            ))
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Grid::from_cells(&cells)
    }
}

/// Framed picture with openings beside the entrance and the exit.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let opening = |cell: Cell| {
            if cell == Cell::MarkedPath {
                Cell::MarkedPath
            } else {
                Cell::Passage
            }
        };

        self.write_border(f)?;
        for row in 0..self.rows {
            let left = if row == 0 {
                opening(self[self.entrance()])
            } else {
                Cell::Wall
            };
            write!(f, "{}", left)?;
            self.row(row)
                .iter()
                .try_for_each(|cell| write!(f, "{}", cell))?;
            let right = if row == self.rows - 1 {
                opening(self[self.exit()])
            } else {
                Cell::Wall
            };
            writeln!(f, "{}", right)?;
        }
        self.write_border(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_dimensions() {
        assert_eq!(
            Grid::new(0, 5, Cell::Wall),
            Err(MazeError::InvalidDimensions { rows: 0, cols: 5 })
        );
        assert!(Grid::new(3, 0, Cell::Wall).is_err());
    }

    #[test]
    fn test_from_cells() {
        let grid = Grid::from_cells(&[[0u8, 1, 0], [0, 0, 0]]).unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid[Coord::new(0, 1)], Cell::Wall);
        assert_eq!(grid[Coord::new(1, 1)], Cell::Passage);
        assert_eq!(grid.exit(), Coord::new(1, 2));
    }

    #[test]
    fn test_from_cells_malformed() {
        let ragged: Vec<Vec<u8>> = vec![vec![0, 0], vec![0]];
        assert!(matches!(
            Grid::from_cells(&ragged),
            Err(MazeError::MalformedGrid(_))
        ));
        assert!(matches!(
            Grid::from_cells(&[[0u8, 2]]),
            Err(MazeError::MalformedGrid(_))
        ));
        let empty: Vec<Vec<u8>> = vec![];
        assert!(matches!(
            Grid::from_cells(&empty),
            Err(MazeError::MalformedGrid(_))
        ));
    }

    #[test]
    fn test_from_str() {
        let grid: Grid = "0 1 0\n0 0 0\n\n".parse().unwrap();
        assert_eq!(grid, Grid::from_cells(&[[0u8, 1, 0], [0, 0, 0]]).unwrap());
        assert!("0 x\n0 0".parse::<Grid>().is_err());
    }

    #[test]
    fn test_step_stays_in_bounds() {
        let grid = Grid::new(2, 2, Cell::Passage).unwrap();
        let origin = Coord::new(0, 0);
        assert_eq!(grid.step(origin, Direction::Left), None);
        assert_eq!(grid.step(origin, Direction::Up), None);
        assert_eq!(grid.step(origin, Direction::Down), Some(Coord::new(1, 0)));
        assert_eq!(grid.step(origin, Direction::Right), Some(Coord::new(0, 1)));
        assert_eq!(grid.step(Coord::new(1, 1), Direction::Down), None);
    }

    #[test]
    fn test_mark_path_copies() {
        let grid = Grid::from_cells(&[[0u8, 0], [1, 0]]).unwrap();
        let path = Path::new(vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 1)]);
        let marked = grid.mark_path(path).unwrap();
        assert_eq!(marked[Coord::new(0, 1)], Cell::MarkedPath);
        assert_eq!(marked[Coord::new(1, 0)], Cell::Wall);
        // The source grid is untouched
        assert_eq!(grid[Coord::new(0, 1)], Cell::Passage);
    }

    #[test]
    fn test_mark_path_mismatch() {
        let grid = Grid::from_cells(&[[0u8, 0], [1, 0]]).unwrap();
        let path = Path::new(vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(1, 1)]);
        assert_eq!(
            grid.mark_path(path),
            Err(MazeError::PathGridMismatch {
                coord: Coord::new(1, 0)
            })
        );
        let outside = Path::new(vec![Coord::new(0, 0), Coord::new(0, 2)]);
        assert!(grid.mark_path(outside).is_err());
    }

    #[test]
    fn test_matrix() {
        let grid = Grid::from_cells(&[[0u8, 1], [0, 0]]).unwrap();
        assert_eq!(grid.matrix(), "0\t1\n0\t0\n");
    }

    #[test]
    fn test_display_has_frame() {
        let grid = Grid::from_cells(&[[0u8, 1], [0, 0]]).unwrap();
        let rendered = grid.to_string();
        // Two border lines around two maze rows
        assert_eq!(rendered.lines().count(), 4);
    }
}
