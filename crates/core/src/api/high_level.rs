//! High-level mark analysis API
//!
//! Provides the main public API:
//! - `analyze_family()` - Parse and annotate one family from lines
//! - `analyze_lines()` / `analyze_text()` / `analyze_bytes()` - Both families at once
//! - `generate_report()` - Lines in, HTML report out
//! - `write_report()` - Stream a finished analysis to a writer

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::converter::{HtmlReportWriter, render_report};
use crate::error::Result;
use crate::layout::{AnnotateParams, annotate};
use crate::model::{Family, MarkSet};
use crate::parser::parse_marks;
use crate::utils::{decode_text, split_lines};

/// Options for mark analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeOptions {
    /// Analyze TVP marks.
    pub tvp: bool,

    /// Analyze AGA marks.
    pub aga: bool,

    /// Neighbor search parameters.
    pub annotate: AnnotateParams,

    /// Process the two families on separate threads when both are selected.
    pub parallel: bool,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            tvp: true,
            aga: true,
            annotate: AnnotateParams::default(),
            parallel: true,
        }
    }
}

impl AnalyzeOptions {
    /// Whether `family` is selected.
    pub const fn selects(&self, family: Family) -> bool {
        match family {
            Family::Tvp => self.tvp,
            Family::Aga => self.aga,
        }
    }

    /// Whether any family is selected.
    pub const fn any_selected(&self) -> bool {
        self.tvp || self.aga
    }
}

/// Result of one analysis run: one finalized set per family.
///
/// Families that were not selected hold an empty set.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub tvp: MarkSet,
    pub aga: MarkSet,
}

impl Analysis {
    pub const fn set(&self, family: Family) -> &MarkSet {
        match family {
            Family::Tvp => &self.tvp,
            Family::Aga => &self.aga,
        }
    }

    /// Number of marks found for `family`.
    pub fn count(&self, family: Family) -> usize {
        self.set(family).len()
    }

    /// Sets in report order.
    pub fn sets(&self) -> [&MarkSet; 2] {
        Family::ALL.map(|family| self.set(family))
    }

    pub fn is_empty(&self) -> bool {
        self.tvp.is_empty() && self.aga.is_empty()
    }

    /// Render the HTML report for this analysis.
    pub fn render(&self) -> Result<String> {
        render_report(&self.sets())
    }
}

/// Parse and annotate the marks of one family.
pub fn analyze_family<S: AsRef<str>>(
    lines: &[S],
    family: Family,
    params: &AnnotateParams,
) -> MarkSet {
    annotate(family, parse_marks(lines, family), params)
}

fn analyze_selected<S: AsRef<str>>(
    lines: &[S],
    family: Family,
    options: &AnalyzeOptions,
) -> MarkSet {
    if options.selects(family) {
        analyze_family(lines, family, &options.annotate)
    } else {
        MarkSet::empty(family)
    }
}

/// Analyze the selected families of `lines`.
///
/// With no family selected the result is empty rather than an error; callers
/// that require a selection check [`AnalyzeOptions::any_selected`] first.
pub fn analyze_lines<S: AsRef<str> + Sync>(lines: &[S], options: &AnalyzeOptions) -> Analysis {
    let (tvp, aga) = if options.parallel && options.tvp && options.aga {
        rayon::join(
            || analyze_selected(lines, Family::Tvp, options),
            || analyze_selected(lines, Family::Aga, options),
        )
    } else {
        (
            analyze_selected(lines, Family::Tvp, options),
            analyze_selected(lines, Family::Aga, options),
        )
    };

    let analysis = Analysis { tvp, aga };
    info!(
        lines = lines.len(),
        tvp = analysis.count(Family::Tvp),
        aga = analysis.count(Family::Aga),
        "analysis finished"
    );
    analysis
}

/// Analyze text that is already decoded.
///
/// `\r\n`, `\n` and a bare `\r` all end a line.
pub fn analyze_text(text: &str, options: &AnalyzeOptions) -> Analysis {
    analyze_lines(&split_lines(text), options)
}

/// Analyze raw bytes, dropping invalid UTF-8 sequences.
pub fn analyze_bytes(data: &[u8], options: &AnalyzeOptions) -> Analysis {
    analyze_text(&decode_text(data), options)
}

/// Read and analyze a text file.
pub fn analyze_file(path: impl AsRef<Path>, options: &AnalyzeOptions) -> Result<Analysis> {
    let data = std::fs::read(path)?;
    Ok(analyze_bytes(&data, options))
}

/// Lines in, HTML report out.
pub fn generate_report<S: AsRef<str> + Sync>(
    lines: &[S],
    options: &AnalyzeOptions,
) -> Result<String> {
    analyze_lines(lines, options).render()
}

/// Write the HTML report of `analysis` to `writer`.
pub fn write_report<W: Write>(analysis: &Analysis, writer: W) -> Result<W> {
    let present: Vec<Family> = analysis
        .sets()
        .iter()
        .filter(|s| !s.is_empty())
        .map(|s| s.family)
        .collect();

    let mut report = HtmlReportWriter::new(writer, &present)?;
    for set in analysis.sets() {
        report.receive_set(set)?;
    }
    report.close()
}
