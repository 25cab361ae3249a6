//! High-level API module for mark analysis.
//!
//! This module provides the main public API for turning text dumps into
//! annotated mark sets and HTML reports.
//!
//! # Example
//!
//! ```ignore
//! use markscope_core::api::{AnalyzeOptions, generate_report};
//!
//! let lines: Vec<String> = read_lines("content.txt")?;
//! let html = generate_report(&lines, &AnalyzeOptions::default())?;
//! ```

pub mod builder;
pub mod high_level;

// Re-export for convenience
pub use builder::AnalyzerBuilder;
pub use high_level::{
    AnalyzeOptions, Analysis, analyze_bytes, analyze_family, analyze_file, analyze_lines,
    analyze_text, generate_report, write_report,
};
