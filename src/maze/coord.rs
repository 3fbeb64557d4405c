use std::fmt;

/// A position in the grid, `row` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }

    pub fn manhattan(&self, other: Coord) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Checks if `other` is exactly one step away in a cardinal direction.
    pub fn is_adjacent(&self, other: Coord) -> bool {
        self.manhattan(other) == 1
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}; {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacency() {
        let c = Coord::new(2, 3);
        assert!(c.is_adjacent(Coord::new(1, 3)));
        assert!(c.is_adjacent(Coord::new(2, 4)));
        assert!(!c.is_adjacent(Coord::new(3, 4)));
        assert!(!c.is_adjacent(c));
        assert_eq!(c.manhattan(Coord::new(0, 0)), 5);
    }

    #[test]
    fn test_display() {
        assert_eq!(Coord::new(4, 0).to_string(), "(4; 0)");
    }
}
