use std::collections::HashMap;

use crate::maze::{Coord, Edge, Grid};

/// Corridor graph of a carved grid.
///
/// Nodes are key cells (run ends, dead ends, turns and branch points); each
/// edge spans one straight corridor. Edge order is the scan order: every row
/// left to right, then every column top to bottom. Solvers break ties by it.
pub struct CorridorGraph {
    edges: Vec<Edge>,
    incident: HashMap<Coord, Vec<usize>>,
}

impl CorridorGraph {
    pub fn new(grid: &Grid) -> Self {
        let edges = extract(grid);
        let mut incident: HashMap<Coord, Vec<usize>> = HashMap::new();
        for (idx, edge) in edges.iter().enumerate() {
            incident.entry(edge.first()).or_default().push(idx);
            incident.entry(edge.second()).or_default().push(idx);
        }
        tracing::debug!(
            "[graph] {} corridor edges over {} key nodes",
            edges.len(),
            incident.len()
        );
        CorridorGraph { edges, incident }
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge(&self, idx: usize) -> Edge {
        self.edges[idx]
    }

    /// Indices of the edges touching `node`, in scan order.
    pub fn incident(&self, node: Coord) -> &[usize] {
        self.incident.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Far endpoints of the edges touching `node`, in scan order.
    pub fn neighbors(&self, node: Coord) -> impl Iterator<Item = Coord> + '_ {
        self.incident(node)
            .iter()
            .filter_map(move |&idx| self.edges[idx].other(node))
    }
}

/// Walks every row, then every column, linking consecutive key cells.
pub fn extract(grid: &Grid) -> Vec<Edge> {
    let mut edges = Vec::new();
    for row in 0..grid.rows() {
        scan_run(
            (0..grid.cols()).map(|col| Coord::new(row, col)),
            |c| {
                [
                    c.row.checked_sub(1).map(|r| Coord::new(r, c.col)),
                    Some(Coord::new(c.row + 1, c.col)),
                ]
            },
            grid,
            &mut edges,
        );
    }
    for col in 0..grid.cols() {
        scan_run(
            (0..grid.rows()).map(|row| Coord::new(row, col)),
            |c| {
                [
                    c.col.checked_sub(1).map(|k| Coord::new(c.row, k)),
                    Some(Coord::new(c.row, c.col + 1)),
                ]
            },
            grid,
            &mut edges,
        );
    }
    edges
}

/// Scans one line of cells. `sides` yields the two cells perpendicular to the line.
fn scan_run<L, S>(line: L, sides: S, grid: &Grid, edges: &mut Vec<Edge>)
where
    L: Iterator<Item = Coord>,
    S: Fn(Coord) -> [Option<Coord>; 2],
{
    let mut line = line.peekable();
    let mut previous: Option<Coord> = None;

    while let Some(cell) = line.next() {
        if !grid.is_passage(cell) {
            previous = None;
            continue;
        }
        let Some(prev) = previous else {
            // First passage of a run
            previous = Some(cell);
            continue;
        };

        let run_ends = line.peek().is_none_or(|&next| !grid.is_passage(next));
        if run_ends {
            edges.extend(Edge::new(prev, cell));
            previous = None;
        } else if sides(cell)
            .into_iter()
            .flatten()
            .any(|side| grid.is_passage(side))
        {
            edges.extend(Edge::new(prev, cell));
            previous = Some(cell);
        }
    }
}
