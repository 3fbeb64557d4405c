use std::collections::HashSet;

use crate::maze::{Coord, Direction, Grid};

enum Probe {
    Blocked,
    Entrance,
    Entered,
}

/// Backtracking from `goal` towards `start` over raw cells.
///
/// Neighbours are tried left, up, down, right. The search keeps its own
/// frame stack instead of recursing, visiting cells in exactly the order the
/// recursive formulation would, so grid size is bounded by memory only.
pub fn solve_recursive(grid: &Grid, start: Coord, goal: Coord) -> Option<Vec<Coord>> {
    let mut visited = HashSet::new();
    let mut probe = |cell: Coord| {
        if !grid.is_passage(cell) || visited.contains(&cell) {
            Probe::Blocked
        } else if cell == start {
            Probe::Entrance
        } else {
            visited.insert(cell);
            Probe::Entered
        }
    };

    // Each frame holds a cell and how many directions it has tried
    let mut frames: Vec<(Coord, usize)> = Vec::new();
    match probe(goal) {
        Probe::Blocked => return None,
        Probe::Entrance => return Some(vec![start]),
        Probe::Entered => frames.push((goal, 0)),
    }

    while let Some(frame) = frames.last_mut() {
        let (cell, tried) = *frame;
        let Some(&direction) = Direction::ALL.get(tried) else {
            frames.pop();
            continue;
        };
        frame.1 += 1;

        let Some(next) = grid.step(cell, direction) else {
            continue;
        };
        match probe(next) {
            Probe::Blocked => {}
            Probe::Entrance => {
                // Unwinding pushes the deepest frame first
                let mut trail = Vec::with_capacity(frames.len() + 1);
                trail.push(start);
                trail.extend(frames.iter().rev().map(|&(c, _)| c));
                tracing::debug!(
                    "[recursive] entrance reached {} cells from the exit",
                    frames.len()
                );
                return Some(trail);
            }
            Probe::Entered => frames.push((next, 0)),
        }
    }

    None
}
