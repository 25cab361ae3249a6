//! markscope - Analyze TVP and AGA marks in a text dump
//!
//! A command line tool that extracts marks from a text file, finds each
//! mark's nearest neighbor on the same layer, and writes an HTML report.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, ValueEnum};
use markscope_core::api::{AnalyzeOptions, Analysis, analyze_file, write_report};
use markscope_core::layout::{AnnotateParams, NeighborStrategy};
use markscope_core::model::Family;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Default report file name.
const DEFAULT_OUTFILE: &str = "mark_analysis_report.html";

/// Neighbor search strategy.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum Strategy {
    /// Scan every other mark of the layer (default)
    #[default]
    Pairwise,
    /// Use an R-tree per layer for large layers
    Indexed,
}

impl From<Strategy> for NeighborStrategy {
    fn from(s: Strategy) -> Self {
        match s {
            Strategy::Pairwise => Self::Pairwise,
            Strategy::Indexed => Self::Indexed,
        }
    }
}

/// Extract TVP/AGA marks from a text dump and write a sorted, cross-referenced
/// HTML report with each mark's nearest same-layer neighbor.
#[derive(Parser, Debug)]
#[command(name = "markscope")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the text content file
    input: PathBuf,

    /// Path of the HTML report, or "-" for stdout
    #[arg(short = 'o', long, default_value = DEFAULT_OUTFILE)]
    outfile: String,

    /// Skip TVP marks
    #[arg(long = "no-tvp", action = ArgAction::SetTrue)]
    no_tvp: bool,

    /// Skip AGA marks
    #[arg(long = "no-aga", action = ArgAction::SetTrue)]
    no_aga: bool,

    /// Neighbor search strategy
    #[arg(short = 's', long, value_enum, default_value = "pairwise")]
    strategy: Strategy,

    /// Layers with fewer marks are scanned pairwise even with --strategy indexed
    #[arg(long = "min-indexed-layer", default_value = "32")]
    min_indexed_layer: usize,

    /// Process families one after the other instead of in parallel
    #[arg(long, action = ArgAction::SetTrue)]
    sequential: bool,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,
}

/// Build analysis options from command line arguments.
fn build_options(args: &Args) -> AnalyzeOptions {
    AnalyzeOptions {
        tvp: !args.no_tvp,
        aga: !args.no_aga,
        annotate: AnnotateParams {
            strategy: args.strategy.into(),
            min_indexed_layer: args.min_indexed_layer,
        },
        parallel: !args.sequential,
    }
}

fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Write the report to the requested destination.
fn save_report(analysis: &Analysis, outfile: &str) -> Result<()> {
    if outfile == "-" {
        write_report(analysis, BufWriter::new(io::stdout().lock()))?;
        return Ok(());
    }

    let file = File::create(outfile)
        .with_context(|| format!("Failed to create output file {outfile}"))?;
    write_report(analysis, BufWriter::new(file))
        .with_context(|| format!("Failed to write HTML to {outfile}"))?;
    Ok(())
}

fn summary(analysis: &Analysis, options: &AnalyzeOptions, outfile: &str) -> String {
    let count = |family: Family| {
        if options.selects(family) {
            analysis.count(family)
        } else {
            0
        }
    };
    let dest = if outfile == "-" { "<stdout>" } else { outfile };
    format!(
        "Done. TVP: {}, AGA: {}. Saved to: {}",
        count(Family::Tvp),
        count(Family::Aga),
        dest
    )
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    let options = build_options(&args);
    if !options.any_selected() {
        bail!("Please select at least one mark type (TVP/AGA).");
    }
    debug!(?options, input = %args.input.display(), "starting analysis");

    let analysis = analyze_file(&args.input, &options)
        .with_context(|| format!("Failed to read file {}", args.input.display()))?;
    if analysis.is_empty() {
        warn!(input = %args.input.display(), "no marks found");
    }

    save_report(&analysis, &args.outfile)?;
    info!(outfile = %args.outfile, "report written");

    // The summary goes to stderr when the report itself is on stdout.
    let line = summary(&analysis, &options, &args.outfile);
    if args.outfile == "-" {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
    Ok(())
}
