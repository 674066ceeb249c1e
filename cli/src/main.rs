//! Triangle classifier CLI
//!
//! Classifies three side lengths given on the command line, or a batch of
//! problems loaded from a JSON file or directory.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use triangle_core::{classify_batch, loader, BatchReport, Triangle, TriangleKind};

const USAGE: &str = "triangle-classify [OPTIONS] <A> <B> <C>
       triangle-classify [OPTIONS] --file <FILE>";

#[derive(Parser)]
#[command(name = "triangle-classify")]
#[command(about = "Classify triangles as equilateral, isosceles or scalene")]
#[command(override_usage = USAGE)]
struct Args {
    /// Three side lengths (take precedence over --file)
    #[arg(num_args = 3, value_names = ["A", "B", "C"], allow_negative_numbers = true)]
    sides: Vec<f64>,

    /// Classify every problem in a JSON file or directory instead
    #[arg(short, long, env = "TRIANGLE_FILE")]
    file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, env = "TRIANGLE_FORMAT", default_value_t = Format::Text)]
    format: Format,

    /// Log at debug level (overrides RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns whether the run succeeded
fn run(args: &Args) -> Result<bool> {
    // TRIANGLE_FILE in the environment must not shadow sides given explicitly
    match &args.file {
        Some(path) if args.sides.is_empty() => run_batch(path, args.format),
        _ => run_single(&args.sides, args.format),
    }
}

fn run_single(sides: &[f64], format: Format) -> Result<bool> {
    let &[a, b, c] = sides else {
        bail!("expected three side lengths or --file");
    };

    debug!(a, b, c, "classifying");
    let triangle = match Triangle::new(a, b, c) {
        Ok(triangle) => triangle,
        Err(e) => {
            eprintln!("{}", e);
            return Ok(false);
        }
    };

    let kind = triangle.kind();
    match format {
        Format::Text => println!("{}", kind),
        Format::Json => println!("{}", single_json(&triangle, kind)),
    }

    Ok(true)
}

fn single_json(triangle: &Triangle<f64>, kind: TriangleKind) -> serde_json::Value {
    serde_json::json!({
        "sides": triangle.sides(),
        "kind": kind,
        "right": triangle.is_right(),
        "perimeter": triangle.perimeter(),
        "area": triangle.area(),
        "angles": triangle.angles(),
    })
}

fn run_batch(path: &Path, format: Format) -> Result<bool> {
    let problems = loader::load_problems(path)
        .with_context(|| format!("loading problems from {}", path.display()))?;
    info!(count = problems.len(), "loaded problems");

    let report = classify_batch(&problems);

    match format {
        Format::Text => print!("{}", render_text(&report)),
        Format::Json => println!("{}", report.to_json().context("serializing report")?),
    }

    Ok(report.all_match())
}

fn render_text(report: &BatchReport) -> String {
    let mut out = String::new();

    for r in &report.reports {
        let outcome = match (&r.kind, &r.error) {
            (Some(kind), _) => kind.to_string(),
            (None, Some(error)) => error.clone(),
            (None, None) => String::from("unclassified"),
        };
        let flag = if r.is_mismatch() { "  MISMATCH" } else { "" };

        out.push_str(&format!("{}: {}{}\n", r.id, outcome, flag));
    }

    out.push_str(&format!(
        "{} problems: {} valid, {} invalid, {} mismatches\n",
        report.len(),
        report.valid,
        report.invalid,
        report.mismatches
    ));

    out
}
