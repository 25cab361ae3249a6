//! Line parsing modules.
//!
//! - `tokens`: numeric tail extraction from whitespace-split lines
//! - `layer`: layer code decoding from encoded identifiers
//! - `builder`: per-family mark record construction from raw lines

pub mod builder;
pub mod layer;
pub mod tokens;

// Re-export main types for convenience
pub use builder::{parse_mark_line, parse_marks};
pub use layer::{LayerRule, SplitRule, decode_layer};
pub use tokens::{extract_last_four_floats, parse_float_token};
