//! Scoremap: smoothed density heatmaps for paired scores.
//!
//! Scoremap reads pairs of integer scores (say, two test grades per
//! student), bins them into a square 2D histogram, smooths the counts with
//! a Gaussian kernel, and packages the result as a raster ready for a
//! renderer.
//!
//! # Modules
//!
//! - [`data`]: Coordinate pairs, datasets and their readers
//! - [`grid`]: Binning and Gaussian smoothing
//! - [`render`]: Display packaging, colormaps and reports
//! - [`validation`]: Boundary checks for user-entered parameters
//! - [`config`]: Named defaults and YAML configuration
//! - [`error`]: Error types for scoremap operations

pub mod builder;
pub mod config;
pub mod data;
pub mod error;
pub mod grid;
pub mod render;
pub mod validation;

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

pub use builder::{Heatmap, HeatmapBuilder};
pub use config::HeatmapConfig;
pub use data::{CoordinatePair, Dataset, SourceFormat};
pub use error::ScoremapError;

use render::{AsciiPreview, DisplayRaster, HeatmapReport, COLORMAP_NAMES};
use validation::{Field, RawParams, Source};

/// The scoremap CLI application.
#[derive(Parser)]
#[command(name = "scoremap")]
#[command(version, about)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Build a smoothed heatmap from a file of score pairs.
    Render(RenderArgs),
    /// List the colormap names a heatmap can be drawn with.
    Colormaps,
    /// Check a numeric parameter value without building anything.
    CheckField(CheckFieldArgs),
}

/// Arguments for the render subcommand.
#[derive(clap::Args)]
struct RenderArgs {
    /// Pair source: a .csv or plain-text file, or '-' for standard input.
    source: String,

    /// Input format ('auto', 'csv', or 'lines'). 'auto' goes by file extension.
    #[arg(long, default_value = "auto")]
    format: String,

    /// Floor for the axis bound (whole number).
    #[arg(long, env = "SCOREMAP_MAX_SCORE")]
    max_score: Option<String>,

    /// Gaussian smoothing width in bins (0 disables smoothing).
    #[arg(long, env = "SCOREMAP_SIGMA")]
    sigma: Option<String>,

    /// Colormap name (see 'scoremap colormaps').
    #[arg(long)]
    colormap: Option<String>,

    /// YAML file providing max_score, sigma and colormap.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,

    /// Append a character-cell preview to text output.
    #[arg(long)]
    preview: bool,
}

/// Arguments for the check-field subcommand.
#[derive(clap::Args)]
struct CheckFieldArgs {
    /// Parameter to check.
    #[arg(value_parser = ["max-score", "sigma"])]
    field: String,

    /// Text as typed.
    #[arg(allow_hyphen_values = true)]
    text: String,
}

/// JSON document handed to the renderer.
#[derive(Serialize)]
struct RenderDocument<'a> {
    report: &'a HeatmapReport,
    raster: &'a DisplayRaster,
}

/// Run the scoremap CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), ScoremapError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Render(args)) => run_render(args),
        Some(Commands::Colormaps) => {
            run_colormaps();
            Ok(())
        }
        Some(Commands::CheckField(args)) => run_check_field(args),
        None => {
            println!("scoremap {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Smoothed density heatmaps for paired scores.");
            println!();
            println!("Run 'scoremap --help' for usage information.");
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    // Logs go to stderr so JSON on stdout stays parseable.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// Execute the render subcommand.
fn run_render(args: RenderArgs) -> Result<(), ScoremapError> {
    if !matches!(args.output.as_str(), "text" | "json") {
        return Err(ScoremapError::UnsupportedFormat(format!(
            "output '{}' (supported: text, json)",
            args.output
        )));
    }

    let base = match &args.config {
        Some(path) => HeatmapConfig::load(path)?,
        None => HeatmapConfig::default(),
    };
    let defaults = RawParams::from_config(&base);
    let raw = RawParams {
        source: Some(args.source.clone()),
        max_score: args.max_score.unwrap_or(defaults.max_score),
        sigma: args.sigma.unwrap_or(defaults.sigma),
        colormap: args.colormap.or(defaults.colormap),
    };
    let params = validation::preflight(&raw)?;

    let builder = HeatmapBuilder::new(params.config);
    let (heatmap, format) = match &params.source {
        Source::Path(path) => {
            let format = resolve_format(&args.format, Some(path.as_path()))?;
            (builder.build_from_path(path, format)?, format)
        }
        Source::Stdin => {
            let format = resolve_format(&args.format, None)?;
            let stdin = std::io::stdin();
            (
                builder.build_from_reader(stdin.lock(), format, "<stdin>")?,
                format,
            )
        }
    };
    let report = heatmap.report(builder.config(), params.source.label(), format);

    match args.output.as_str() {
        "json" => {
            let doc = RenderDocument {
                report: &report,
                raster: &heatmap.raster,
            };
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            serde_json::to_writer_pretty(&mut out, &doc).map_err(ScoremapError::JsonWrite)?;
            writeln!(out)?;
        }
        _ => {
            print!("{}", report);
            if args.preview {
                println!();
                print!("{}", AsciiPreview::new(&heatmap.raster));
            }
        }
    }

    Ok(())
}

/// Resolves a CLI format name; 'auto' inspects the path once.
fn resolve_format(name: &str, path: Option<&Path>) -> Result<SourceFormat, ScoremapError> {
    if name == "auto" {
        return Ok(path.map(SourceFormat::from_path).unwrap_or_default());
    }
    SourceFormat::from_name(name).ok_or_else(|| {
        ScoremapError::UnsupportedFormat(format!(
            "'{}' (supported: auto, csv, lines)",
            name
        ))
    })
}

/// Execute the colormaps subcommand.
fn run_colormaps() {
    let default = render::Colormap::default();
    for name in COLORMAP_NAMES {
        if *name == default.name() {
            println!("{} (default)", name);
        } else {
            println!("{}", name);
        }
    }
}

/// Execute the check-field subcommand.
fn run_check_field(args: CheckFieldArgs) -> Result<(), ScoremapError> {
    let field = Field::from_name(&args.field)
        .ok_or_else(|| ScoremapError::UnsupportedFormat(format!("field '{}'", args.field)))?;

    let value = validation::validate_field(&args.text, field.kind())
        .map_err(|reason| ScoremapError::IncompleteParameter { field, reason })?;

    println!("{}: {}", field, value);
    Ok(())
}
