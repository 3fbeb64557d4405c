use std::fmt;

use super::Coord;

/// Solution trail from the entrance to the exit, both inclusive.
///
/// Consumption is one pass: `next_step` advances a cursor that never rewinds.
/// `steps` and the `Display` rendering always see the whole trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    steps: Vec<Coord>,
    cursor: usize,
}

impl Path {
    pub fn new(steps: Vec<Coord>) -> Self {
        Path { steps, cursor: 0 }
    }

    /// Checks if there are steps left to take.
    pub fn has_next(&self) -> bool {
        self.cursor < self.steps.len()
    }

    /// Takes the next step, or `None` once the trail is used up.
    pub fn next_step(&mut self) -> Option<Coord> {
        let step = self.steps.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(step)
    }

    pub fn steps(&self) -> &[Coord] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn to_pairs(&self) -> Vec<(usize, usize)> {
        self.steps.iter().map(|c| (c.row, c.col)).collect()
    }

    /// Checks that every consecutive pair of steps is grid-adjacent.
    pub fn is_contiguous(&self) -> bool {
        self.steps.windows(2).all(|w| w[0].is_adjacent(w[1]))
    }
}

impl Iterator for Path {
    type Item = Coord;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_step()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.steps.len() - self.cursor;
        (left, Some(left))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.steps.iter().try_for_each(|step| write!(f, "{}", step))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Path {
        Path::new(vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 1)])
    }

    #[test]
    fn test_one_pass_consumption() {
        let mut path = sample();
        assert!(path.has_next());
        assert_eq!(path.next_step(), Some(Coord::new(0, 0)));
        assert_eq!(path.next_step(), Some(Coord::new(0, 1)));
        assert_eq!(path.next_step(), Some(Coord::new(1, 1)));
        assert!(!path.has_next());
        assert_eq!(path.next_step(), None);
        // The full trail stays available for rendering
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn test_rendering() {
        let path = sample();
        assert_eq!(path.to_string(), "(0; 0)(0; 1)(1; 1)");
        assert_eq!(path.to_pairs(), vec![(0, 0), (0, 1), (1, 1)]);
        assert!(path.is_contiguous());
    }

    #[test]
    fn test_gap_is_not_contiguous() {
        let path = Path::new(vec![Coord::new(0, 0), Coord::new(0, 2)]);
        assert!(!path.is_contiguous());
    }
}
