//! Mark model types - families, parsed records and annotated records.
//!
//! This module contains the core data model:
//! - `family` - Mark families (TVP, AGA) and their fixed literals
//! - `mark` - Parsed records (MarkRecord), annotated records (AnnotatedMark, Nearest)
//!   and per-family result sets (MarkSet)

pub mod family;
pub mod mark;

// Re-export main types for convenience
pub use family::Family;
pub use mark::{AnnotatedMark, MarkRecord, MarkSet, Nearest};
