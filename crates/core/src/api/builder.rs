//! Builder pattern for mark analysis.
//!
//! Provides a fluent API for configuring and running an analysis.
//!
//! # Example
//! ```ignore
//! use markscope_core::api::AnalyzerBuilder;
//!
//! let html = AnalyzerBuilder::new("content.txt")
//!     .aga(false)
//!     .strategy(NeighborStrategy::Indexed)
//!     .report()?;
//! ```

use std::path::{Path, PathBuf};

use crate::error::{MarkError, Result};
use crate::layout::{AnnotateParams, NeighborStrategy};

use super::high_level::{AnalyzeOptions, Analysis, analyze_file};

/// A builder for configuring a file analysis.
///
/// Wraps [`AnalyzeOptions`] and the file-based entry points. Unlike the plain
/// functions, running a builder with no family selected is an error.
#[derive(Debug, Clone)]
pub struct AnalyzerBuilder {
    source: PathBuf,
    options: AnalyzeOptions,
}

impl AnalyzerBuilder {
    /// Creates a new AnalyzerBuilder for the given text file path.
    pub fn new(source: impl AsRef<Path>) -> Self {
        Self {
            source: source.as_ref().to_path_buf(),
            options: AnalyzeOptions::default(),
        }
    }

    /// Selects or deselects TVP marks (default: selected).
    pub fn tvp(mut self, enabled: bool) -> Self {
        self.options.tvp = enabled;
        self
    }

    /// Selects or deselects AGA marks (default: selected).
    pub fn aga(mut self, enabled: bool) -> Self {
        self.options.aga = enabled;
        self
    }

    /// Sets the neighbor search strategy.
    pub fn strategy(mut self, strategy: NeighborStrategy) -> Self {
        self.options.annotate.strategy = strategy;
        self
    }

    /// Replaces all neighbor search parameters.
    pub fn annotate_params(mut self, params: AnnotateParams) -> Self {
        self.options.annotate = params;
        self
    }

    /// Enables or disables running the two families on separate threads.
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.options.parallel = enabled;
        self
    }

    /// The options this builder will run with.
    pub const fn options(&self) -> &AnalyzeOptions {
        &self.options
    }

    /// Reads the source file and analyzes it.
    ///
    /// # Errors
    /// [`MarkError::NoFamilySelected`] before touching the file when both
    /// families are deselected; [`MarkError::Io`] when the file cannot be read.
    pub fn analyze(&self) -> Result<Analysis> {
        if !self.options.any_selected() {
            return Err(MarkError::NoFamilySelected);
        }
        analyze_file(&self.source, &self.options)
    }

    /// Analyzes the source file and renders the HTML report.
    pub fn report(&self) -> Result<String> {
        self.analyze()?.render()
    }
}
