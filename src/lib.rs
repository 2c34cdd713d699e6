//! # Autograf - Graph Automorphism Search Harness
//!
//! Autograf is the host side of a graph automorphism search: it compacts
//! graphs into the dual-array form engines consume, tracks node orbits
//! online as generators arrive, and assembles group-order statistics and
//! the final orbit partition into one report.
//!
//! ## Architecture
//!
//! The system is organized into several modules:
//!
//! - **graph**: Adjacency-list input, compacted sparse-row output, and
//!   stock graph families
//! - **colors**: Node color partitions constraining the search
//! - **orbits**: Online orbit tracking across reported generators
//! - **search**: The engine contract, the run driver, and the in-crate
//!   exhaustive reference engine
//! - **errors**: The crate-wide error type
//!
//! ## Usage
//!
//! ```rust,ignore
//! use autograf::{automorphisms, generators};
//!
//! let graph = generators::petersen()?;
//! let report = automorphisms(&graph)?;
//!
//! assert_eq!(report.stats.group_size().round(), 120.0);
//! assert_eq!(report.orbits.orbit_count(), 1);
//! ```

#![forbid(unsafe_code)]

pub mod colors;
pub mod errors;
pub mod graph;
pub mod orbits;
pub mod search;

// Re-export commonly used types
pub use colors::ColorPartition;
pub use errors::AutError;
pub use graph::{generators, AdjacencyGraph, CsrGraph, GraphSource};
pub use orbits::{OrbitPartition, OrbitTracker};
pub use search::{
    run_search, run_search_with_callback, EngineStats, ExhaustiveEngine, GeneratorHook,
    SearchEngine, SearchFlow, SearchReport, SearchStats,
};

/// Computes the automorphism group of a graph with the built-in
/// exhaustive engine.
///
/// Suitable for small graphs only; for anything serious, build an engine
/// of your own behind [`SearchEngine`] and call [`run_search`].
///
/// # Arguments
///
/// * `source` - The graph to search
///
/// # Returns
///
/// * `Ok(SearchReport)` - Group-order statistics and the orbit partition
/// * `Err(AutError)` - The graph was empty or malformed
///
/// # Example
///
/// ```rust,ignore
/// let graph = autograf::generators::complete(4)?;
/// let report = autograf::automorphisms(&graph)?;
/// assert_eq!(report.stats.group_size().round(), 24.0);
/// ```
pub fn automorphisms<G>(source: &G) -> Result<SearchReport, AutError>
where
    G: GraphSource + ?Sized,
{
    run_search(source, None, &mut ExhaustiveEngine::new())
}

/// Computes the color-preserving automorphism group of a graph with the
/// built-in exhaustive engine.
///
/// # Arguments
///
/// * `source` - The graph to search
/// * `colors` - One color per node; automorphisms may only map nodes
///   onto nodes of the same color
///
/// # Returns
///
/// * `Ok(SearchReport)` - Group-order statistics and the orbit partition
/// * `Err(AutError)` - The graph or the color vector was malformed
pub fn automorphisms_with_colors<G>(source: &G, colors: &[usize]) -> Result<SearchReport, AutError>
where
    G: GraphSource + ?Sized,
{
    run_search(source, Some(colors), &mut ExhaustiveEngine::new())
}
