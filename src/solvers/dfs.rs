use super::{expand_control_points, graph::CorridorGraph};
use crate::maze::{Coord, Grid};

/// Iterative depth-first search over the corridor graph.
///
/// The top of the stack follows its first unconsumed edge in scan order and
/// the edge is consumed; a node with nothing left is popped. A consumed edge
/// is never walked again, but a node may come back onto the stack through
/// another edge, so on grids with loops the route can pass a cell twice.
pub fn solve_dfs(grid: &Grid, start: Coord, goal: Coord) -> Option<Vec<Coord>> {
    let graph = CorridorGraph::new(grid);
    let mut consumed = vec![false; graph.edges().len()];
    let mut stack = vec![start];

    while let Some(&top) = stack.last() {
        if top == goal {
            tracing::debug!("[dfs] goal reached through {} key nodes", stack.len());
            return Some(expand_control_points(&stack));
        }

        let step = graph.incident(top).iter().find_map(|&idx| {
            let next = graph.edge(idx).other(top)?;
            (!consumed[idx]).then_some((idx, next))
        });
        match step {
            Some((idx, next)) => {
                consumed[idx] = true;
                stack.push(next);
            }
            // Dead end
            None => {
                stack.pop();
            }
        }
    }

    None
}
