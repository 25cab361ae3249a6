//! Layout analysis module for mark sets.
//!
//! This module contains:
//! - Annotation parameters (AnnotateParams, NeighborStrategy)
//! - Per-layer spatial index and pairwise nearest search
//! - Nearest-neighbor annotation and final ordering

pub mod neighbors;
pub mod params;
pub mod spatial;

// Re-export params
pub use params::*;

pub use neighbors::annotate;
pub use spatial::{LayerIndex, nearest_other_pairwise};
