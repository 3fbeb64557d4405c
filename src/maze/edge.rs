use std::hash::{Hash, Hasher};

use super::Coord;

/// Undirected connection between two distinct coordinates.
///
/// During solving an edge stands for a straight corridor: every cell
/// strictly between the endpoints is a passage with no side branches.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    first: Coord,
    second: Coord,
}

impl Edge {
    /// Returns `None` when both endpoints are the same cell.
    pub fn new(first: Coord, second: Coord) -> Option<Self> {
        (first != second).then_some(Edge { first, second })
    }

    pub fn first(&self) -> Coord {
        self.first
    }

    pub fn second(&self) -> Coord {
        self.second
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.first == coord || self.second == coord
    }

    /// Given one endpoint, returns the other one.
    pub fn other(&self, coord: Coord) -> Option<Coord> {
        if self.first == coord {
            Some(self.second)
        } else if self.second == coord {
            Some(self.first)
        } else {
            None
        }
    }

    /// The cell physically between two junctions two steps apart.
    pub fn midpoint(&self) -> Coord {
        Coord::new(
            (self.first.row + self.second.row) / 2,
            (self.first.col + self.second.col) / 2,
        )
    }

    /// Cells strictly between `from` and `to` on a straight line, ordered from `from`.
    ///
    /// Both points must share a row or a column.
    pub fn steps_between(from: Coord, to: Coord) -> Vec<Coord> {
        debug_assert!(
            from.row == to.row || from.col == to.col,
            "Corridor endpoints {from} and {to} are not aligned"
        );
        if from.row == to.row {
            let row = from.row;
            if from.col < to.col {
                (from.col + 1..to.col)
                    .map(|col| Coord::new(row, col))
                    .collect()
            } else {
                (to.col + 1..from.col)
                    .rev()
                    .map(|col| Coord::new(row, col))
                    .collect()
            }
        } else {
            let col = from.col;
            if from.row < to.row {
                (from.row + 1..to.row)
                    .map(|row| Coord::new(row, col))
                    .collect()
            } else {
                (to.row + 1..from.row)
                    .rev()
                    .map(|row| Coord::new(row, col))
                    .collect()
            }
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        (self.first == other.first && self.second == other.second)
            || (self.first == other.second && self.second == other.first)
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (lo, hi) = if self.first <= self.second {
            (self.first, self.second)
        } else {
            (self.second, self.first)
        };
        lo.hash(state);
        hi.hash(state);
    }
}
