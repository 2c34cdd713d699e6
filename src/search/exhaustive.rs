//! A brute-force reference engine.
//!
//! [`ExhaustiveEngine`] enumerates image assignments node by node in index
//! order, pruning candidates that break color, degree, or adjacency
//! consistency with the prefix assigned so far. Every complete assignment
//! is an automorphism; one is reported as a generator only if it lies
//! outside the group generated by the generators already reported, so the
//! hook sees a small generating set rather than the whole group.
//!
//! The engine keeps the entire generated group in memory to decide
//! novelty, which caps it at toy sizes. It exists as the in-crate
//! [`SearchEngine`](crate::search::SearchEngine) so drivers, trackers,
//! and callbacks can be exercised without an external engine; production
//! workloads plug in a partition-refinement engine instead.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::colors::ColorPartition;
use crate::errors::AutError;
use crate::graph::CsrGraph;
use crate::search::engine::{EngineStats, GeneratorHook, SearchEngine, SearchFlow};

/// Exhaustive automorphism search over all color-respecting bijections.
#[derive(Debug, Clone)]
pub struct ExhaustiveEngine {
    node_budget: Option<u64>,
}

impl ExhaustiveEngine {
    /// An engine with no resource cap.
    pub fn new() -> Self {
        Self { node_budget: None }
    }

    /// An engine that fails with [`AutError::Engine`] once the search
    /// tree exceeds `budget` visited nodes.
    pub fn with_node_budget(budget: u64) -> Self {
        Self {
            node_budget: Some(budget),
        }
    }
}

impl Default for ExhaustiveEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchEngine for ExhaustiveEngine {
    fn search(
        &mut self,
        graph: &CsrGraph,
        colors: &ColorPartition,
        on_generator: &mut GeneratorHook<'_>,
    ) -> Result<EngineStats, AutError> {
        let mut searcher = Searcher::new(graph, colors, self.node_budget);
        searcher.descend(0, on_generator)?;
        Ok(searcher.finish())
    }
}

/// One in-flight search. Adjacency lives in a dense row-major count
/// matrix, one multiplicity per node pair, so the prefix-consistency
/// probe is a single compare and parallel edges distinguish graphs the
/// same way the compacted arrays deliver them: a double edge only maps
/// onto another double edge.
struct Searcher<'a> {
    n: usize,
    adjacency: Vec<u32>,
    out_degrees: Vec<usize>,
    in_degrees: Vec<usize>,
    colors: &'a [usize],
    /// Images assigned so far; `sigma[i]` is meaningful for i below the
    /// current depth.
    sigma: Vec<usize>,
    used: Vec<bool>,
    /// Closure of the reported generators, identity included.
    group: FxHashSet<Vec<usize>>,
    generators: Vec<Vec<usize>>,
    count: u128,
    nodes: u64,
    bads: u64,
    max_depth: usize,
    budget: Option<u64>,
}

impl<'a> Searcher<'a> {
    fn new(graph: &CsrGraph, colors: &'a ColorPartition, budget: Option<u64>) -> Self {
        let n = graph.node_count();

        let mut adjacency = vec![0u32; n * n];
        for i in 0..n {
            for &t in graph.out_neighbors(i) {
                adjacency[i * n + t] += 1;
            }
        }

        // Degrees come from the count matrix, not the stored entries, so
        // they weigh parallel edges exactly as the adjacency probe does.
        let mut out_degrees = vec![0usize; n];
        let mut in_degrees = vec![0usize; n];
        for i in 0..n {
            for j in 0..n {
                let entries = adjacency[i * n + j] as usize;
                out_degrees[i] += entries;
                in_degrees[j] += entries;
            }
        }

        let mut group = FxHashSet::default();
        group.insert((0..n).collect::<Vec<usize>>());

        Self {
            n,
            adjacency,
            out_degrees,
            in_degrees,
            colors: colors.as_slice(),
            sigma: vec![0; n],
            used: vec![false; n],
            group,
            generators: Vec::new(),
            count: 0,
            nodes: 0,
            bads: 0,
            max_depth: 0,
            budget,
        }
    }

    fn multiplicity(&self, i: usize, j: usize) -> u32 {
        self.adjacency[i * self.n + j]
    }

    /// Whether mapping node `depth` onto `image` stays consistent with
    /// the prefix assigned so far.
    fn feasible(&self, depth: usize, image: usize) -> bool {
        if self.colors[depth] != self.colors[image]
            || self.out_degrees[depth] != self.out_degrees[image]
            || self.in_degrees[depth] != self.in_degrees[image]
            || self.multiplicity(depth, depth) != self.multiplicity(image, image)
        {
            return false;
        }
        for j in 0..depth {
            if self.multiplicity(depth, j) != self.multiplicity(image, self.sigma[j])
                || self.multiplicity(j, depth) != self.multiplicity(self.sigma[j], image)
            {
                return false;
            }
        }
        true
    }

    fn descend(
        &mut self,
        depth: usize,
        hook: &mut GeneratorHook<'_>,
    ) -> Result<SearchFlow, AutError> {
        if depth == self.n {
            return self.record(hook);
        }
        for image in 0..self.n {
            if self.used[image] {
                continue;
            }
            if !self.feasible(depth, image) {
                self.bads += 1;
                continue;
            }
            self.nodes += 1;
            if let Some(budget) = self.budget {
                if self.nodes > budget {
                    return Err(AutError::Engine(format!(
                        "search node budget {} exhausted",
                        budget
                    )));
                }
            }
            if depth + 1 > self.max_depth {
                self.max_depth = depth + 1;
            }
            self.sigma[depth] = image;
            self.used[image] = true;
            let flow = self.descend(depth + 1, hook)?;
            self.used[image] = false;
            if flow == SearchFlow::Stop {
                return Ok(SearchFlow::Stop);
            }
        }
        Ok(SearchFlow::Continue)
    }

    /// A complete assignment survived every prefix check, so `sigma` is
    /// an automorphism. Report it if it is new to the generated group.
    fn record(&mut self, hook: &mut GeneratorHook<'_>) -> Result<SearchFlow, AutError> {
        self.count += 1;
        if self.group.contains(self.sigma.as_slice()) {
            return Ok(SearchFlow::Continue);
        }
        let gamma = self.sigma.clone();
        let support: SmallVec<[usize; 16]> =
            (0..self.n).filter(|&i| gamma[i] != i).collect();
        let flow = hook(&gamma, &support)?;
        self.generators.push(gamma);
        self.rebuild_group();
        Ok(flow)
    }

    /// Regenerates the closure of the reported generators from scratch:
    /// repeated products starting at the identity reach the whole
    /// generated subgroup.
    fn rebuild_group(&mut self) {
        self.group.clear();
        let identity: Vec<usize> = (0..self.n).collect();
        let mut frontier = vec![identity.clone()];
        self.group.insert(identity);
        while let Some(sigma) = frontier.pop() {
            for generator in &self.generators {
                let composed: Vec<usize> = sigma.iter().map(|&s| generator[s]).collect();
                if !self.group.contains(composed.as_slice()) {
                    self.group.insert(composed.clone());
                    frontier.push(composed);
                }
            }
        }
    }

    fn finish(self) -> EngineStats {
        let (group_size_base, group_size_exp) = split_order(self.count);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            "exhaustive search visited {} nodes, rejected {}, found {} generators",
            self.nodes,
            self.bads,
            self.generators.len()
        );
        EngineStats {
            group_size_base,
            group_size_exp,
            levels: self.max_depth as u64,
            nodes: self.nodes,
            bads: self.bads,
        }
    }
}

/// Splits an order into mantissa and decimal exponent with the mantissa
/// in `[1, 10)`.
fn split_order(count: u128) -> (f64, u32) {
    let mut base = count as f64;
    let mut exp = 0u32;
    while base >= 10.0 {
        base /= 10.0;
        exp += 1;
    }
    (base, exp)
}
