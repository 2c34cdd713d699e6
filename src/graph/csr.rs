//! Compacted sparse-row graph construction.
//!
//! Search engines consume graphs as offset/target array pairs: node i's
//! neighbors sit in `targets[offsets[i]..offsets[i + 1]]`. Construction is
//! the classic two-pass counting sort. The first pass counts degrees into
//! the offset array and validates every target; a shift turns counts into
//! start cursors; the placement pass writes targets while advancing the
//! cursors; a final rewind restores the cursors to block starts.
//!
//! Undirected graphs store each edge twice, once per direction, in a
//! single symmetric array, so no separate in-edge arrays exist for them.
//! Directed graphs carry independently sized out and in regions.

use crate::errors::AutError;
use crate::graph::GraphSource;

/// One offset/target index. Node i's entries occupy
/// `targets[offsets[i]..offsets[i + 1]]`; `offsets` has n + 1 entries.
#[derive(Debug, Clone, PartialEq, Eq)]
struct EdgeIndex {
    offsets: Vec<usize>,
    targets: Vec<usize>,
}

impl EdgeIndex {
    fn zeroed(n: usize, entries: usize) -> Self {
        Self {
            offsets: vec![0; n + 1],
            targets: vec![0; entries],
        }
    }

    fn neighbors(&self, node: usize) -> &[usize] {
        &self.targets[self.offsets[node]..self.offsets[node + 1]]
    }

    /// Converts per-node counts into start cursors: `offsets[0] = 0`,
    /// `offsets[i] = offsets[i - 1] + count[i - 1]`.
    fn shift(&mut self) {
        let n = self.offsets.len() - 1;
        let mut carried = 0;
        for offset in self.offsets.iter_mut().take(n) {
            let count = *offset;
            *offset = carried;
            carried += count;
        }
    }

    /// Undoes the cursor advance of the placement pass: every offset moves
    /// one slot right, `offsets[0]` becomes 0 and `offsets[n]` the total
    /// entry count, so offsets mean "start of block" again.
    fn rewind(&mut self, total: usize) {
        let n = self.offsets.len() - 1;
        for i in (1..=n).rev() {
            self.offsets[i] = self.offsets[i - 1];
        }
        self.offsets[0] = 0;
        self.offsets[n] = total;
    }
}

/// A graph in compacted sparse-row form, ready for a search engine.
///
/// Built from any [`GraphSource`] via [`CsrGraph::from_source`], or from a
/// raw adjacency list via [`CsrGraph::build`]. The represented graph is
/// immutable after construction; engines borrow it read-only for the
/// duration of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrGraph {
    node_count: usize,
    edge_count: usize,
    directed: bool,
    out: EdgeIndex,
    inbound: Option<EdgeIndex>,
}

impl CsrGraph {
    /// Compacts a host graph.
    ///
    /// Validates the source's shape (nonempty node set, every target in
    /// range, declared edge count consistent with the rows) before any
    /// placement happens.
    pub fn from_source<G>(source: &G) -> Result<Self, AutError>
    where
        G: GraphSource + ?Sized,
    {
        let n = source.node_count();
        if n == 0 {
            return Err(AutError::EmptyGraph);
        }
        Self::build_indexed(n, source.edge_count(), source.is_directed(), |i| {
            source.out_neighbors(i)
        })
    }

    /// Compacts a raw adjacency list.
    ///
    /// `adjacency` must have exactly `node_count` rows; `edge_count` must
    /// equal the total number of listed targets (each undirected edge
    /// listed once, each directed arc once).
    pub fn build(
        node_count: usize,
        edge_count: usize,
        directed: bool,
        adjacency: &[Vec<usize>],
    ) -> Result<Self, AutError> {
        if node_count == 0 {
            return Err(AutError::EmptyGraph);
        }
        if adjacency.len() != node_count {
            return Err(AutError::AdjacencyLengthMismatch {
                expected: node_count,
                actual: adjacency.len(),
            });
        }
        Self::build_indexed(node_count, edge_count, directed, |i| adjacency[i].as_slice())
    }

    fn build_indexed<'a, F>(n: usize, e: usize, directed: bool, row: F) -> Result<Self, AutError>
    where
        F: Fn(usize) -> &'a [usize],
    {
        let entries = if directed { e } else { 2 * e };
        let mut out = EdgeIndex::zeroed(n, entries);
        let mut inbound = directed.then(|| EdgeIndex::zeroed(n, e));

        // Counting pass. Every target is validated here, before anything
        // is placed. Undirected edges bump both endpoints in the shared
        // array; directed arcs split across the out and in arrays.
        let mut listed = 0usize;
        for i in 0..n {
            for &target in row(i) {
                if target >= n {
                    return Err(AutError::TargetOutOfRange { node: i, target, n });
                }
                listed += 1;
                out.offsets[i] += 1;
                match inbound.as_mut() {
                    Some(index) => index.offsets[target] += 1,
                    None => out.offsets[target] += 1,
                }
            }
        }
        if listed != e {
            return Err(AutError::EdgeCountMismatch { declared: e, actual: listed });
        }

        out.shift();
        if let Some(index) = inbound.as_mut() {
            index.shift();
        }

        // Placement pass. Each write advances its node's cursor, so after
        // this loop the offsets hold block ends instead of starts.
        for i in 0..n {
            for &target in row(i) {
                out.targets[out.offsets[i]] = target;
                out.offsets[i] += 1;
                match inbound.as_mut() {
                    Some(index) => {
                        index.targets[index.offsets[target]] = i;
                        index.offsets[target] += 1;
                    }
                    None => {
                        out.targets[out.offsets[target]] = i;
                        out.offsets[target] += 1;
                    }
                }
            }
        }

        out.rewind(entries);
        if let Some(index) = inbound.as_mut() {
            index.rewind(e);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("compacted {} nodes, {} edges (directed: {})", n, e, directed);

        Ok(Self {
            node_count: n,
            edge_count: e,
            directed,
            out,
            inbound,
        })
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of edges as declared by the source: each undirected edge
    /// counts once even though it is stored twice.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether edges are directed arcs.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Out-neighbors of `node`.
    ///
    /// For undirected graphs this contains every neighbor, since the
    /// shared array stores both directions of each edge.
    pub fn out_neighbors(&self, node: usize) -> &[usize] {
        self.out.neighbors(node)
    }

    /// In-neighbors of `node`. For undirected graphs this is the same
    /// slice as [`out_neighbors`](CsrGraph::out_neighbors).
    pub fn in_neighbors(&self, node: usize) -> &[usize] {
        match &self.inbound {
            Some(index) => index.neighbors(node),
            None => self.out.neighbors(node),
        }
    }

    /// Out-degree of `node`, counting stored entries.
    pub fn out_degree(&self, node: usize) -> usize {
        self.out_neighbors(node).len()
    }

    /// In-degree of `node`, counting stored entries.
    pub fn in_degree(&self, node: usize) -> usize {
        self.in_neighbors(node).len()
    }

    /// The raw out-offset array (n + 1 entries, non-decreasing).
    pub fn out_offsets(&self) -> &[usize] {
        &self.out.offsets
    }

    /// The raw out-target array.
    pub fn out_targets(&self) -> &[usize] {
        &self.out.targets
    }

    /// The raw in-offset array. `None` for undirected graphs, which never
    /// materialize a separate in region.
    pub fn in_offsets(&self) -> Option<&[usize]> {
        self.inbound.as_ref().map(|index| index.offsets.as_slice())
    }

    /// The raw in-target array. `None` for undirected graphs.
    pub fn in_targets(&self) -> Option<&[usize]> {
        self.inbound.as_ref().map(|index| index.targets.as_slice())
    }
}
