use autograf::graph::{AdjacencyGraph, CsrGraph, GraphSource};

fn sorted(slice: &[usize]) -> Vec<usize> {
    let mut v = slice.to_vec();
    v.sort_unstable();
    v
}

#[test]
fn adjacency_triangle_compacts_to_symmetric_blocks() {
    let g = AdjacencyGraph::undirected(vec![vec![1, 2], vec![2], vec![]]).unwrap();
    let csr = CsrGraph::from_source(&g).unwrap();

    assert_eq!(csr.node_count(), 3);
    assert_eq!(csr.edge_count(), 3);
    assert!(!csr.is_directed());
    assert_eq!(csr.out_offsets(), &[0, 2, 4, 6]);
    for node in 0..3 {
        assert_eq!(csr.out_degree(node), 2);
        assert!(!csr.out_neighbors(node).contains(&node));
    }
}

#[test]
fn directed_arc_lands_in_both_regions() {
    let g = AdjacencyGraph::directed(vec![vec![1], vec![]]).unwrap();
    let csr = CsrGraph::from_source(&g).unwrap();

    assert_eq!(csr.out_offsets(), &[0, 1, 1]);
    assert_eq!(csr.in_offsets().unwrap(), &[0, 0, 1]);
    assert_eq!(csr.out_neighbors(0), &[1]);
    assert_eq!(csr.in_neighbors(1), &[0]);
    assert_eq!(csr.out_degree(1), 0);
    assert_eq!(csr.in_degree(0), 0);
}

#[test]
fn lower_triangle_input_is_normalized_before_compaction() {
    // The same triangle, listed entirely from the larger endpoints.
    let g = AdjacencyGraph::undirected(vec![vec![], vec![0], vec![0, 1]]).unwrap();
    assert_eq!(g.edge_count(), 3);

    let csr = CsrGraph::from_source(&g).unwrap();
    assert_eq!(sorted(csr.out_neighbors(0)), vec![1, 2]);
    assert_eq!(sorted(csr.out_neighbors(1)), vec![0, 2]);
    assert_eq!(sorted(csr.out_neighbors(2)), vec![0, 1]);
}

#[test]
fn edge_listed_from_both_endpoints_collapses_to_one() {
    let g = AdjacencyGraph::undirected(vec![vec![1], vec![0]]).unwrap();
    assert_eq!(g.edge_count(), 1);

    let csr = CsrGraph::from_source(&g).unwrap();
    assert_eq!(csr.out_neighbors(0), &[1]);
    assert_eq!(csr.out_neighbors(1), &[0]);
}

#[test]
fn repeated_upper_entries_survive_as_parallel_edges() {
    let g = AdjacencyGraph::undirected(vec![vec![1, 1], vec![]]).unwrap();
    assert_eq!(g.edge_count(), 2);

    let csr = CsrGraph::from_source(&g).unwrap();
    assert_eq!(csr.out_neighbors(0), &[1, 1]);
    assert_eq!(csr.out_neighbors(1), &[0, 0]);
}

#[test]
fn self_loop_collapses_then_stores_two_entries() {
    let g = AdjacencyGraph::undirected(vec![vec![0, 0, 1], vec![]]).unwrap();
    assert!(g.has_loops());
    assert_eq!(g.edge_count(), 2);

    let csr = CsrGraph::from_source(&g).unwrap();
    assert_eq!(sorted(csr.out_neighbors(0)), vec![0, 0, 1]);
    assert_eq!(csr.out_neighbors(1), &[0]);
}

/// A host-side edge list implementing [`GraphSource`] directly, without
/// going through [`AdjacencyGraph`].
struct EdgeList {
    rows: Vec<Vec<usize>>,
    edges: usize,
}

impl EdgeList {
    fn new(n: usize, edges: &[(usize, usize)]) -> Self {
        let mut rows = vec![Vec::new(); n];
        for &(a, b) in edges {
            rows[a].push(b);
        }
        Self {
            rows,
            edges: edges.len(),
        }
    }
}

impl GraphSource for EdgeList {
    fn node_count(&self) -> usize {
        self.rows.len()
    }

    fn edge_count(&self) -> usize {
        self.edges
    }

    fn is_directed(&self) -> bool {
        false
    }

    fn out_neighbors(&self, node: usize) -> &[usize] {
        &self.rows[node]
    }
}

#[test]
fn custom_sources_feed_the_compaction_directly() {
    let source = EdgeList::new(4, &[(0, 1), (1, 2), (2, 3), (0, 3)]);
    let csr = CsrGraph::from_source(&source).unwrap();

    assert_eq!(csr.edge_count(), 4);
    for node in 0..4 {
        assert_eq!(csr.out_degree(node), 2);
    }
    assert_eq!(sorted(csr.out_neighbors(0)), vec![1, 3]);
}

#[test]
fn source_listing_both_directions_yields_parallel_edges() {
    // A source must list each edge on one endpoint only; this one lists
    // both directions, so compaction mirrors them into parallel edges.
    let source = EdgeList::new(2, &[(0, 1), (1, 0)]);
    let csr = CsrGraph::from_source(&source).unwrap();
    assert_eq!(csr.out_neighbors(0), &[1, 1]);
}

#[test]
fn empty_custom_source_is_rejected() {
    let empty = EdgeList::new(0, &[]);
    assert!(CsrGraph::from_source(&empty).is_err());
}
