//! Owned adjacency-list graphs with undirected normalization.

use rustc_hash::FxHashSet;

use crate::errors::AutError;
use crate::graph::GraphSource;

/// An adjacency-list graph owned by the host side of a run.
///
/// Undirected construction normalizes the rows so that every edge is
/// stored exactly once, on its smaller endpoint: an edge `(u, v)` with
/// `u < v` ends up as target `v` in row `u`, whichever endpoint (or both)
/// listed it. Self-loops are collapsed to a single entry on their node and
/// recorded in [`has_loops`](AdjacencyGraph::has_loops). Directed
/// construction keeps rows exactly as given.
///
/// Node ids are the row indices `0..n`; every listed target must be in
/// that range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyGraph {
    rows: Vec<Vec<usize>>,
    directed: bool,
    edge_count: usize,
    has_loops: bool,
}

impl AdjacencyGraph {
    /// Builds an undirected graph, normalizing the adjacency rows.
    ///
    /// Accepts edges listed from either endpoint or both; the stored form
    /// keeps each edge once. Duplicate mentions of the same edge from the
    /// smaller endpoint are preserved (a multigraph stays a multigraph),
    /// duplicate mentions across both endpoints collapse.
    pub fn undirected(rows: Vec<Vec<usize>>) -> Result<Self, AutError> {
        let n = rows.len();
        validate_rows(&rows)?;

        let mut fixed: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut recorded: FxHashSet<(usize, usize)> = FxHashSet::default();
        let mut has_loops = false;

        for (node, row) in rows.iter().enumerate() {
            let mut saw_loop = false;
            for &target in row {
                if target == node {
                    saw_loop = true;
                } else if target > node {
                    recorded.insert((node, target));
                    fixed[node].push(target);
                } else if recorded.insert((target, node)) {
                    // Lower-triangle mention: move the edge to the smaller
                    // endpoint's row unless it is already recorded there.
                    fixed[target].push(node);
                }
            }
            if saw_loop {
                has_loops = true;
                fixed[node].push(node);
            }
        }

        let edge_count = fixed.iter().map(Vec::len).sum();
        Ok(Self { rows: fixed, directed: false, edge_count, has_loops })
    }

    /// Builds a directed graph; rows are kept as given.
    pub fn directed(rows: Vec<Vec<usize>>) -> Result<Self, AutError> {
        validate_rows(&rows)?;
        let has_loops = rows.iter().enumerate().any(|(node, row)| row.contains(&node));
        let edge_count = rows.iter().map(Vec::len).sum();
        Ok(Self { rows, directed: true, edge_count, has_loops })
    }

    /// The (possibly normalized) adjacency rows.
    pub fn rows(&self) -> &[Vec<usize>] {
        &self.rows
    }

    /// Whether any node had an edge to itself in the input.
    pub fn has_loops(&self) -> bool {
        self.has_loops
    }
}

impl GraphSource for AdjacencyGraph {
    fn node_count(&self) -> usize {
        self.rows.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn out_neighbors(&self, node: usize) -> &[usize] {
        &self.rows[node]
    }
}

fn validate_rows(rows: &[Vec<usize>]) -> Result<(), AutError> {
    let n = rows.len();
    if n == 0 {
        return Err(AutError::EmptyGraph);
    }
    for (node, row) in rows.iter().enumerate() {
        for &target in row {
            if target >= n {
                return Err(AutError::TargetOutOfRange { node, target, n });
            }
        }
    }
    Ok(())
}
