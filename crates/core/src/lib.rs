//! markscope - mark extraction, same-layer nearest-neighbor analysis and HTML reporting.
//!
//! The pipeline runs per mark family:
//! raw lines -> [`parser::parse_marks`] -> [`layout::annotate`] -> [`converter::HtmlReportWriter`].
//! [`api::high_level`] wires the stages together for callers that only have text.

pub mod api;
pub mod converter;
pub mod error;
pub mod layout;
pub mod model;
pub mod parser;
pub mod utils;

pub use api::high_level;

pub use error::{MarkError, Result};
pub use model::{AnnotatedMark, Family, MarkRecord, MarkSet, Nearest};
