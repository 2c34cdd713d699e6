//! Search orchestration.
//!
//! [`run_search`] owns the full pipeline of one run: compact the host
//! graph, load or default the color partition, hand both to the engine,
//! fold every reported generator into an [`OrbitTracker`], and assemble
//! the final [`SearchReport`]. The engine never touches orbit state, and
//! the user callback (if any) observes generators after they have been
//! merged, so a callback-requested stop still leaves the partition
//! consistent with everything reported so far.

use crate::colors::ColorPartition;
use crate::errors::AutError;
use crate::graph::{CsrGraph, GraphSource};
use crate::orbits::{OrbitPartition, OrbitTracker};
use crate::search::engine::{SearchEngine, SearchFlow};

/// Statistics of one finished (or stopped) search run.
///
/// The engine counters are carried over verbatim; `generators` and
/// `max_support` are counted on this side of the boundary, from what the
/// engine actually delivered.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Group order mantissa.
    pub group_size_base: f64,
    /// Group order decimal exponent.
    pub group_size_exp: u32,
    /// Depth of the engine's search tree.
    pub levels: u64,
    /// Tree nodes the engine visited.
    pub nodes: u64,
    /// Candidates the engine rejected.
    pub bads: u64,
    /// Generators delivered to the hook.
    pub generators: u64,
    /// Largest support among the delivered generators.
    pub max_support: usize,
}

impl SearchStats {
    /// The automorphism group order as a float.
    ///
    /// Exact only while the order fits f64 precision; beyond that, read
    /// the base and exponent fields directly.
    pub fn group_size(&self) -> f64 {
        self.group_size_base * 10f64.powi(self.group_size_exp as i32)
    }
}

/// Everything a search run produces: counters plus the orbit partition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchReport {
    pub stats: SearchStats,
    pub orbits: OrbitPartition,
}

/// What the driver does with a generator after merging it.
trait GeneratorObserver {
    fn observe(&mut self, gamma: &[usize], support: &[usize]) -> Result<SearchFlow, AutError>;
}

/// No user callback: every generator just continues the search.
struct NoCallback;

impl GeneratorObserver for NoCallback {
    fn observe(&mut self, _gamma: &[usize], _support: &[usize]) -> Result<SearchFlow, AutError> {
        Ok(SearchFlow::Continue)
    }
}

/// Forwards each generator to a user closure, which may stop the run.
struct UserCallback<F> {
    callback: F,
}

impl<F> GeneratorObserver for UserCallback<F>
where
    F: FnMut(&[usize], &[usize]) -> Result<SearchFlow, AutError>,
{
    fn observe(&mut self, gamma: &[usize], support: &[usize]) -> Result<SearchFlow, AutError> {
        (self.callback)(gamma, support)
    }
}

/// Runs one automorphism search over `source`.
///
/// `colors` constrains the search to color-preserving automorphisms;
/// `None` means the uniform partition. Input validation happens here,
/// before the engine sees anything.
pub fn run_search<G, E>(
    source: &G,
    colors: Option<&[usize]>,
    engine: &mut E,
) -> Result<SearchReport, AutError>
where
    G: GraphSource + ?Sized,
    E: SearchEngine + ?Sized,
{
    run_search_internal(source, colors, engine, NoCallback)
}

/// Like [`run_search`], with a callback invoked once per generator.
///
/// The callback sees the permutation and its support after the generator
/// has been folded into the orbit partition. Returning
/// [`SearchFlow::Stop`] ends the run normally with everything reported so
/// far (the stopping generator included); returning an error aborts the
/// run with that error.
pub fn run_search_with_callback<G, E, F>(
    source: &G,
    colors: Option<&[usize]>,
    engine: &mut E,
    callback: F,
) -> Result<SearchReport, AutError>
where
    G: GraphSource + ?Sized,
    E: SearchEngine + ?Sized,
    F: FnMut(&[usize], &[usize]) -> Result<SearchFlow, AutError>,
{
    run_search_internal(source, colors, engine, UserCallback { callback })
}

fn run_search_internal<G, E, O>(
    source: &G,
    colors: Option<&[usize]>,
    engine: &mut E,
    mut observer: O,
) -> Result<SearchReport, AutError>
where
    G: GraphSource + ?Sized,
    E: SearchEngine + ?Sized,
    O: GeneratorObserver,
{
    let graph = CsrGraph::from_source(source)?;
    let colors = match colors {
        Some(colors) => ColorPartition::from_colors(colors, graph.node_count())?,
        None => ColorPartition::uniform(graph.node_count()),
    };

    #[cfg(feature = "tracing")]
    tracing::info!(
        "searching {} nodes, {} edges, {} colors",
        graph.node_count(),
        graph.edge_count(),
        colors.color_count()
    );

    let mut tracker = OrbitTracker::new(graph.node_count());
    let mut generators: u64 = 0;
    let mut max_support: usize = 0;

    let engine_stats = {
        let mut on_generator = |gamma: &[usize], support: &[usize]| {
            tracker.merge(gamma)?;
            // Strictly ascending, every entry moved, and as many entries
            // as the permutation moves: together that pins the slice to
            // exactly the moved set.
            let moved = gamma
                .iter()
                .enumerate()
                .filter(|&(i, &image)| image != i)
                .count();
            let listed = support.len() == moved
                && support.windows(2).all(|w| w[0] < w[1])
                && support.iter().all(|&i| i < gamma.len() && gamma[i] != i);
            if !listed {
                return Err(AutError::InvalidGenerator(format!(
                    "support lists {} nodes, but the permutation moves {}",
                    support.len(),
                    moved
                )));
            }
            generators += 1;
            if support.len() > max_support {
                max_support = support.len();
            }
            #[cfg(feature = "tracing")]
            tracing::debug!("generator {} moves {} nodes", generators, support.len());
            observer.observe(gamma, support)
        };
        engine.search(&graph, &colors, &mut on_generator)?
    };

    let stats = SearchStats {
        group_size_base: engine_stats.group_size_base,
        group_size_exp: engine_stats.group_size_exp,
        levels: engine_stats.levels,
        nodes: engine_stats.nodes,
        bads: engine_stats.bads,
        generators,
        max_support,
    };

    let orbits = tracker.into_partition();

    #[cfg(feature = "tracing")]
    tracing::info!(
        "search finished: group size {}e{}, {} generators, {} orbits",
        stats.group_size_base,
        stats.group_size_exp,
        stats.generators,
        orbits.orbit_count()
    );

    Ok(SearchReport { stats, orbits })
}
