//! Online orbit tracking.
//!
//! The search engine reports automorphisms one at a time, as permutations.
//! [`OrbitTracker`] folds each one into a node partition as it arrives:
//! every cycle of the permutation forces its members into one orbit, and
//! when a cycle bridges two orbits that were previously distinct, the two
//! collapse into one. After the search, [`OrbitTracker::into_partition`]
//! produces the final [`OrbitPartition`], in which every node not moved by
//! any generator sits in a singleton orbit labeled by its own index.
//!
//! Orbit labels are node indices. A label always refers to a member of its
//! own orbit, so `orbit_of(orbit_of(i)) == orbit_of(i)` holds for every
//! node of a finished partition.

use rustc_hash::FxHashSet;

use crate::errors::AutError;

/// Accumulates orbits across the generators of one search run.
#[derive(Debug, Clone)]
pub struct OrbitTracker {
    /// `None` until the node is first moved by a generator.
    ids: Vec<Option<usize>>,
    /// Visit stamps for the current merge; a stamp equal to `epoch` means
    /// the node was already walked during this merge.
    marks: Vec<u64>,
    epoch: u64,
}

impl OrbitTracker {
    /// A tracker for `n` nodes with every node still unassigned.
    pub fn new(n: usize) -> Self {
        Self {
            ids: vec![None; n],
            marks: vec![0; n],
            epoch: 0,
        }
    }

    /// Number of tracked nodes.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True when the tracker covers no nodes.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Folds one generator into the partition.
    ///
    /// `gamma` maps node i to `gamma[i]` and must be a permutation of
    /// `0..self.len()`; anything else is reported as
    /// [`AutError::InvalidGenerator`]. Rejection can happen mid-walk, in
    /// which case the tracker has absorbed part of the permutation; the
    /// search aborts on the first bad generator, so the partial state is
    /// never observed.
    ///
    /// Each nontrivial cycle is walked once. The cycle adopts the orbit
    /// label already carried by its first unvisited node, or that node's
    /// index if it was untouched so far. When the walk runs into a node
    /// labeled for a different orbit, the two orbits merge: the smaller
    /// label wins and every node carrying the larger one is relabeled.
    pub fn merge(&mut self, gamma: &[usize]) -> Result<(), AutError> {
        let n = self.ids.len();
        if gamma.len() != n {
            return Err(AutError::InvalidGenerator(format!(
                "permutation length {} does not match {} nodes",
                gamma.len(),
                n
            )));
        }
        for (node, &image) in gamma.iter().enumerate() {
            if image >= n {
                return Err(AutError::InvalidGenerator(format!(
                    "node {} maps to {}, out of range for {} nodes",
                    node, image, n
                )));
            }
        }

        self.epoch += 1;
        let epoch = self.epoch;
        for i in 0..n {
            if gamma[i] == i || self.marks[i] == epoch {
                continue;
            }
            self.marks[i] = epoch;
            let mut oid = self.ids[i].unwrap_or(i);
            self.ids[i] = Some(oid);

            let mut j = gamma[i];
            while j != i {
                if self.marks[j] == epoch {
                    return Err(AutError::InvalidGenerator(format!(
                        "node {} appears twice among the images; not a permutation",
                        j
                    )));
                }
                self.marks[j] = epoch;
                match self.ids[j] {
                    Some(existing) if existing != oid => {
                        // Two orbits collide on this cycle. Keep the
                        // smaller label and retire the other everywhere.
                        let (winner, loser) = if existing < oid {
                            (existing, oid)
                        } else {
                            (oid, existing)
                        };
                        for entry in self.ids.iter_mut() {
                            if *entry == Some(loser) {
                                *entry = Some(winner);
                            }
                        }
                        self.ids[j] = Some(winner);
                        oid = winner;
                    }
                    _ => self.ids[j] = Some(oid),
                }
                j = gamma[j];
            }
        }
        Ok(())
    }

    /// Finishes the run: unassigned nodes become singleton orbits labeled
    /// by their own index.
    pub fn into_partition(self) -> OrbitPartition {
        let ids = self
            .ids
            .into_iter()
            .enumerate()
            .map(|(i, id)| id.unwrap_or(i))
            .collect();
        OrbitPartition { ids }
    }
}

/// The orbit partition of a finished search.
///
/// `ids[i]` is the label of node i's orbit; labels are node indices and
/// every label belongs to its own orbit.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrbitPartition {
    ids: Vec<usize>,
}

impl OrbitPartition {
    /// Number of nodes covered.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True when the partition covers no nodes.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Per-node orbit labels, indexed by node.
    pub fn ids(&self) -> &[usize] {
        &self.ids
    }

    /// Label of one node's orbit.
    pub fn orbit_of(&self, node: usize) -> usize {
        self.ids[node]
    }

    /// True when `a` and `b` can be mapped onto each other by some
    /// automorphism of the searched graph.
    pub fn same_orbit(&self, a: usize, b: usize) -> bool {
        self.ids[a] == self.ids[b]
    }

    /// Number of distinct orbits.
    pub fn orbit_count(&self) -> usize {
        self.ids.iter().collect::<FxHashSet<_>>().len()
    }

    /// Consumes the partition, yielding the raw label array.
    pub fn into_ids(self) -> Vec<usize> {
        self.ids
    }
}
