//! Neighbor annotation parameters.
//!
//! Contains AnnotateParams for controlling how nearest neighbors are searched.

use std::fmt;
use std::str::FromStr;

/// How nearest same-layer neighbors are searched.
///
/// Both strategies produce identical annotations; they only differ in cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NeighborStrategy {
    /// Scan every other mark of the layer. O(n²) per layer.
    #[default]
    Pairwise,
    /// Query a per-layer R-tree for large layers.
    Indexed,
}

impl FromStr for NeighborStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pairwise" => Ok(Self::Pairwise),
            "indexed" => Ok(Self::Indexed),
            other => Err(format!("unknown neighbor strategy: {other}")),
        }
    }
}

impl fmt::Display for NeighborStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pairwise => "pairwise",
            Self::Indexed => "indexed",
        })
    }
}

/// Parameters for neighbor annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotateParams {
    /// Search strategy.
    pub strategy: NeighborStrategy,

    /// Layers with fewer marks than this are always scanned pairwise, even
    /// under [`NeighborStrategy::Indexed`].
    pub min_indexed_layer: usize,
}

impl Default for AnnotateParams {
    fn default() -> Self {
        Self {
            strategy: NeighborStrategy::Pairwise,
            min_indexed_layer: 32,
        }
    }
}

impl AnnotateParams {
    /// Creates parameters using `strategy` and the default layer threshold.
    pub fn with_strategy(strategy: NeighborStrategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// Whether a layer of `len` marks should be searched through the R-tree.
    pub(crate) const fn use_index(&self, len: usize) -> bool {
        matches!(self.strategy, NeighborStrategy::Indexed) && len >= self.min_indexed_layer
    }
}
