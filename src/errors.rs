//! Error types for graph compaction and automorphism runs.

use thiserror::Error;

/// Errors that can occur while compacting a graph, loading a color
/// partition, or driving an automorphism search.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in the future without breaking changes.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum AutError {
    /// The input graph has no nodes.
    ///
    /// Searches over an empty node set are rejected up front rather than
    /// handed to an engine.
    #[error("empty graph: node count must be at least 1")]
    EmptyGraph,

    /// The adjacency list does not have one row per node.
    #[error("adjacency list has {actual} rows, expected {expected}")]
    AdjacencyLengthMismatch { expected: usize, actual: usize },

    /// An edge names a target id outside `[0, n)`.
    ///
    /// Detected during the counting pass, before anything is placed into
    /// the compacted arrays.
    #[error("node {node} lists target {target}, outside 0..{n}")]
    TargetOutOfRange { node: usize, target: usize, n: usize },

    /// The declared edge count disagrees with the adjacency rows.
    #[error("edge count mismatch: declared {declared}, adjacency lists {actual}")]
    EdgeCountMismatch { declared: usize, actual: usize },

    /// The color vector does not have one entry per node.
    #[error("color partition has {actual} entries, expected {expected}")]
    ColorLengthMismatch { expected: usize, actual: usize },

    /// A color value is outside `[0, n)`.
    ///
    /// A partition of n nodes never needs more than n color classes, and
    /// larger values overrun engines that size their color tables by n.
    #[error("node {node} has color {color}, outside 0..{n}")]
    ColorOutOfRange { node: usize, color: usize, n: usize },

    /// An engine delivered something that is not a permutation of the
    /// node set (wrong length, out-of-range image, or repeated image).
    #[error("invalid generator: {0}")]
    InvalidGenerator(String),

    /// The search engine failed internally.
    ///
    /// Covers engine-side resource exhaustion (for example an exceeded
    /// node budget) and any failure the engine reports that is not a
    /// contract violation at this crate's boundary.
    #[error("engine error: {0}")]
    Engine(String),

    /// The user callback reported a failure.
    ///
    /// Distinct from an early-stop request, which is normal termination;
    /// a callback error aborts the run.
    #[error("callback error: {0}")]
    Callback(String),
}
