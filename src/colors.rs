//! Node color partitions.
//!
//! A color partition constrains the search: an automorphism may only map
//! a node onto nodes of the same color. Colors are small integers indexed
//! by node; the all-zeros partition leaves the search unconstrained.

use rustc_hash::FxHashSet;

use crate::errors::AutError;

/// An assignment of one color per node.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorPartition {
    colors: Vec<usize>,
}

impl ColorPartition {
    /// The trivial partition: every node colored 0.
    pub fn uniform(n: usize) -> Self {
        Self { colors: vec![0; n] }
    }

    /// Builds a partition from explicit per-node colors.
    ///
    /// `colors` must assign exactly one color per node, and every color
    /// must be below `n` (a valid partition can never need more classes
    /// than nodes). Gaps in the color numbering are tolerated, since only
    /// equality of colors matters to the search.
    pub fn from_colors(colors: &[usize], n: usize) -> Result<Self, AutError> {
        if colors.len() != n {
            return Err(AutError::ColorLengthMismatch {
                expected: n,
                actual: colors.len(),
            });
        }
        for (node, &color) in colors.iter().enumerate() {
            if color >= n {
                return Err(AutError::ColorOutOfRange { node, color, n });
            }
        }
        let partition = Self { colors: colors.to_vec() };
        #[cfg(feature = "tracing")]
        if !partition.is_compact_numbering() {
            tracing::warn!(
                "color numbering has gaps ({} distinct colors)",
                partition.color_count()
            );
        }
        Ok(partition)
    }

    /// Per-node colors, indexed by node.
    pub fn as_slice(&self) -> &[usize] {
        &self.colors
    }

    /// Number of nodes covered.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// True when the partition covers no nodes.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color of one node.
    pub fn color_of(&self, node: usize) -> usize {
        self.colors[node]
    }

    /// Number of distinct colors in use.
    pub fn color_count(&self) -> usize {
        self.colors.iter().collect::<FxHashSet<_>>().len()
    }

    /// True when the colors in use are exactly 0..=max with no gaps.
    pub fn is_compact_numbering(&self) -> bool {
        let distinct: FxHashSet<usize> = self.colors.iter().copied().collect();
        match self.colors.iter().max() {
            Some(&max) => distinct.len() == max + 1,
            None => true,
        }
    }
}
