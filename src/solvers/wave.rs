use std::collections::{HashMap, VecDeque};

use super::graph::CorridorGraph;
use crate::maze::{Coord, Edge, Grid};

/// Breadth-first wave over the corridor graph.
///
/// Every discovered key node gets its order (hop distance from `start`).
/// The wave stops as soon as `goal` is discovered, then the route is read
/// back from `goal` by always stepping to the first neighbour, in scan
/// order, whose order is one less.
pub fn solve_wave(grid: &Grid, start: Coord, goal: Coord) -> Option<Vec<Coord>> {
    let graph = CorridorGraph::new(grid);

    let mut order: HashMap<Coord, usize> = HashMap::from([(start, 0)]);
    let mut queue = VecDeque::from([(start, 0)]);
    'wave: while let Some((current, current_order)) = queue.pop_front() {
        for next in graph.neighbors(current) {
            if order.contains_key(&next) {
                continue;
            }
            order.insert(next, current_order + 1);
            if next == goal {
                break 'wave;
            }
            queue.push_back((next, current_order + 1));
        }
    }

    let mut remaining = *order.get(&goal)?;
    tracing::debug!(
        "[wave] goal reached at order {} after labelling {} nodes",
        remaining,
        order.len()
    );

    let mut control = goal;
    let mut trail = vec![goal];
    while remaining > 0 {
        remaining -= 1;
        let previous = graph
            .neighbors(control)
            .find(|n| order.get(n) == Some(&remaining))?;
        trail.extend(Edge::steps_between(control, previous));
        trail.push(previous);
        control = previous;
    }

    trail.reverse();
    Some(trail)
}
