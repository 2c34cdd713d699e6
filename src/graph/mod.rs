//! Graph representations for automorphism search.
//!
//! Two layers:
//!
//! - [`AdjacencyGraph`]: an owned adjacency-list graph with normalization
//!   for undirected input, the form hosts typically build by hand.
//! - [`CsrGraph`]: the compacted offset/target dual-array form that search
//!   engines consume, built from any [`GraphSource`].
//!
//! The [`generators`] module provides constructors for standard graph
//! families with well-known automorphism groups.

pub mod adjacency;
pub mod csr;
pub mod generators;

pub use adjacency::AdjacencyGraph;
pub use csr::CsrGraph;

/// Capability interface for host graphs.
///
/// Any adjacency-list representation can feed the compaction step by
/// implementing this trait. Validation happens once, inside
/// [`CsrGraph::from_source`], not in the implementors: a source only has
/// to hand over its raw shape.
pub trait GraphSource {
    /// Number of nodes. Must be at least 1 for the graph to be buildable.
    fn node_count(&self) -> usize;

    /// Number of edges as the source counts them: each undirected edge
    /// once, each directed arc once.
    fn edge_count(&self) -> usize;

    /// Whether edges are directed arcs.
    fn is_directed(&self) -> bool;

    /// Out-neighbors of `node`, in source order.
    ///
    /// For undirected graphs each edge must appear on exactly one of its
    /// endpoints; the compaction mirrors it to both.
    fn out_neighbors(&self, node: usize) -> &[usize];
}
