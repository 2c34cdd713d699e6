//! The engine-facing contract of the search layer.
//!
//! An automorphism engine is a black box behind [`SearchEngine`]: it
//! receives a compacted graph and a color partition, reports each
//! discovered generator through a [`GeneratorHook`], and returns its
//! counters when the search ends. The driver owns everything else, so an
//! engine never sees orbit state or user callbacks directly.

use crate::colors::ColorPartition;
use crate::errors::AutError;
use crate::graph::CsrGraph;

/// Verdict a hook returns after each generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFlow {
    /// Keep searching.
    Continue,
    /// Terminate the search early. The engine must unwind and return its
    /// counters as of this point; an early stop is normal termination,
    /// not an error.
    Stop,
}

/// Hook called once per generator, with the permutation (node i maps to
/// `gamma[i]`) and its support (the nodes it moves, ascending).
pub type GeneratorHook<'a> = dyn FnMut(&[usize], &[usize]) -> Result<SearchFlow, AutError> + 'a;

/// Counters reported by an engine when its search finishes.
///
/// The automorphism group order is `group_size_base * 10^group_size_exp`,
/// split into mantissa and exponent because orders outgrow every integer
/// type on unremarkable inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineStats {
    /// Group order mantissa, in `[1, 10)` once anything was found.
    pub group_size_base: f64,
    /// Group order decimal exponent.
    pub group_size_exp: u32,
    /// Depth of the search tree, in levels.
    pub levels: u64,
    /// Tree nodes visited.
    pub nodes: u64,
    /// Candidates rejected without descending.
    pub bads: u64,
}

impl Default for EngineStats {
    fn default() -> Self {
        Self {
            group_size_base: 1.0,
            group_size_exp: 0,
            levels: 0,
            nodes: 0,
            bads: 0,
        }
    }
}

/// A black-box automorphism search engine.
///
/// Contract: `search` must call `on_generator` once per generator it
/// discovers, honor a [`SearchFlow::Stop`] verdict by terminating early
/// with `Ok`, and propagate a hook error unchanged. Every permutation it
/// reports must be a valid permutation of `0..graph.node_count()` that
/// respects `colors`, with a support slice listing exactly the moved
/// nodes in ascending order; the driver rejects a delivery that breaks
/// either half of that shape.
pub trait SearchEngine {
    fn search(
        &mut self,
        graph: &CsrGraph,
        colors: &ColorPartition,
        on_generator: &mut GeneratorHook<'_>,
    ) -> Result<EngineStats, AutError>;
}
