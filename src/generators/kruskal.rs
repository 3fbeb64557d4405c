use std::{cmp::Reverse, collections::BinaryHeap};

use rand::Rng;

use crate::maze::{Coord, Edge};

/// Candidate edge between two neighbouring junctions.
///
/// The ids are dense row-major indices into the junction lattice and the
/// weight is a random sort key; neither means anything once the maze is carved.
#[derive(Debug, Clone, Copy)]
struct WeightedEdge {
    edge: Edge,
    first_id: usize,
    second_id: usize,
    weight: i32,
}

/// Junctions sit at every (even row, even column) cell.
struct JunctionLattice {
    junction_rows: usize,
    per_row: usize,
}

impl JunctionLattice {
    fn new(rows: usize, cols: usize) -> Self {
        JunctionLattice {
            junction_rows: rows.div_ceil(2),
            per_row: cols.div_ceil(2),
        }
    }

    fn count(&self) -> usize {
        self.junction_rows * self.per_row
    }

    fn coord(&self, id: usize) -> Coord {
        Coord::new(id / self.per_row * 2, id % self.per_row * 2)
    }

    fn link<R: Rng + ?Sized>(
        &self,
        first_id: usize,
        second_id: usize,
        rng: &mut R,
    ) -> Option<WeightedEdge> {
        let edge = Edge::new(self.coord(first_id), self.coord(second_id))?;
        Some(WeightedEdge {
            edge,
            first_id,
            second_id,
            weight: rng.random(),
        })
    }

    /// Links every junction to its right neighbour, then to the one below.
    fn candidate_edges<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<WeightedEdge> {
        let mut edges = Vec::with_capacity(self.count() * 2);
        for id in 0..self.count() {
            if (id + 1) % self.per_row != 0 {
                edges.extend(self.link(id, id + 1, rng));
            }
            if id / self.per_row + 1 != self.junction_rows {
                edges.extend(self.link(id, id + self.per_row, rng));
            }
        }
        edges
    }
}

/// Builds a random spanning tree over the junctions of a `rows` x `cols` grid.
///
/// Candidates are sorted by their random weight; growing from junction 0,
/// each step takes the lightest edge with exactly one endpoint in the tree.
/// A min-heap over sorted ranks finds that edge without rescanning the list.
pub fn randomized_spanning_tree<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    rng: &mut R,
) -> Vec<Edge> {
    let lattice = JunctionLattice::new(rows, cols);
    let count = lattice.count();

    let mut candidates = lattice.candidate_edges(rng);
    candidates.sort_by_key(|c| c.weight);

    let mut incident = vec![Vec::new(); count];
    for (rank, c) in candidates.iter().enumerate() {
        incident[c.first_id].push(rank);
        incident[c.second_id].push(rank);
    }

    let mut connected = vec![false; count];
    let mut frontier = BinaryHeap::new();
    let mut tree = Vec::with_capacity(count.saturating_sub(1));

    join(0, &mut connected, &incident, &mut frontier);

    while tree.len() + 1 < count {
        // The lattice is connected, so the frontier cannot drain early
        let Some(Reverse(rank)) = frontier.pop() else {
            break;
        };
        let candidate = &candidates[rank];
        let first_in = connected[candidate.first_id];
        let second_in = connected[candidate.second_id];
        let newcomer = match (first_in, second_in) {
            (true, false) => candidate.second_id,
            (false, true) => candidate.first_id,
            _ => continue,
        };
        tree.push(candidate.edge);
        join(newcomer, &mut connected, &incident, &mut frontier);
    }
    debug_assert_eq!(tree.len() + 1, count);

    tree
}

/// Adds a junction to the tree and queues every edge touching it.
fn join(
    id: usize,
    connected: &mut [bool],
    incident: &[Vec<usize>],
    frontier: &mut BinaryHeap<Reverse<usize>>,
) {
    connected[id] = true;
    frontier.extend(incident[id].iter().map(|&rank| Reverse(rank)));
}
