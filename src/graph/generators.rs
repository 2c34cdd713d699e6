//! Stock graph families, mostly for tests and benchmarks.
//!
//! Every constructor emits edges at their smaller endpoint only, so the
//! resulting [`AdjacencyGraph`] normalization is a no-op and the edge
//! count is exactly the sum of row lengths.

use crate::errors::AutError;
use crate::graph::AdjacencyGraph;

/// Complete graph on `n` nodes.
pub fn complete(n: usize) -> Result<AdjacencyGraph, AutError> {
    let rows = (0..n).map(|i| (i + 1..n).collect()).collect();
    AdjacencyGraph::undirected(rows)
}

/// Edgeless graph on `n` nodes.
pub fn empty(n: usize) -> Result<AdjacencyGraph, AutError> {
    AdjacencyGraph::undirected(vec![Vec::new(); n])
}

/// Path 0 - 1 - ... - (n - 1).
pub fn path(n: usize) -> Result<AdjacencyGraph, AutError> {
    let rows = (0..n)
        .map(|i| if i + 1 < n { vec![i + 1] } else { Vec::new() })
        .collect();
    AdjacencyGraph::undirected(rows)
}

/// Cycle on `n` nodes. For n < 3 there is no closing edge to add, so
/// cycle(1) is a single node and cycle(2) a single edge.
pub fn cycle(n: usize) -> Result<AdjacencyGraph, AutError> {
    let mut rows: Vec<Vec<usize>> = (0..n)
        .map(|i| if i + 1 < n { vec![i + 1] } else { Vec::new() })
        .collect();
    if n >= 3 {
        rows[0].push(n - 1);
    }
    AdjacencyGraph::undirected(rows)
}

/// Star with hub 0 and `n - 1` leaves.
pub fn star(n: usize) -> Result<AdjacencyGraph, AutError> {
    let mut rows = vec![Vec::new(); n];
    if n > 0 {
        rows[0] = (1..n).collect();
    }
    AdjacencyGraph::undirected(rows)
}

/// Complete bipartite graph with parts {0, .., a - 1} and {a, .., a + b - 1}.
pub fn complete_bipartite(a: usize, b: usize) -> Result<AdjacencyGraph, AutError> {
    let n = a + b;
    let rows = (0..n)
        .map(|i| if i < a { (a..n).collect() } else { Vec::new() })
        .collect();
    AdjacencyGraph::undirected(rows)
}

/// The Petersen graph: outer 5-cycle on 0..5, inner pentagram on 5..10,
/// spokes i - (i + 5).
pub fn petersen() -> Result<AdjacencyGraph, AutError> {
    let rows = vec![
        vec![1, 4, 5],
        vec![2, 6],
        vec![3, 7],
        vec![4, 8],
        vec![9],
        vec![7, 8],
        vec![8, 9],
        vec![9],
        vec![],
        vec![],
    ];
    AdjacencyGraph::undirected(rows)
}
