use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use pikalang::{Dialect, FlagScanner, PikalangUnit, UnitConfig};

#[derive(Parser, Debug)]
#[command(name = "pikalang")]
#[command(about = "Run Pikalang programs, falling back to Brainfuck transliteration", long_about = None)]
struct Cli {
    /// Source files to evaluate
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Initial argument pushed onto the primary stack (repeatable, in order)
    #[arg(long = "arg", value_name = "N", allow_negative_numbers = true)]
    args: Vec<i64>,

    /// Interpret files even when they fail the applicability gate
    #[arg(long)]
    force: bool,

    /// Do not retry rejected sources as Brainfuck
    #[arg(long)]
    no_fallback: bool,

    /// Abort the Brainfuck fallback after this many steps
    #[arg(long, value_name = "N")]
    max_steps: Option<u64>,

    /// Report substrings of the output matching this regex
    #[arg(long, value_name = "REGEX")]
    flag_format: Option<String>,

    /// Emit one JSON record per file instead of plain output
    #[arg(long)]
    json: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

/// What was learned about one file.
#[derive(Debug, Serialize)]
struct Record {
    file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    dialect: Option<Dialect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    flags: Vec<String>,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "pikalang=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn evaluate_file(unit: &PikalangUnit, scanner: Option<&FlagScanner>, path: &Path) -> Result<Record> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let evaluation = unit.evaluate_bytes(&bytes);
    let flags = match (&evaluation, scanner) {
        (Some(evaluation), Some(scanner)) => scanner.scan(&evaluation.output),
        _ => Vec::new(),
    };
    Ok(Record {
        file: path.display().to_string(),
        dialect: evaluation.as_ref().map(|e| e.dialect),
        output: evaluation.map(|e| e.output),
        flags,
    })
}

#[cfg(feature = "parallel")]
fn evaluate_all(unit: &PikalangUnit, scanner: Option<&FlagScanner>, files: &[PathBuf]) -> Vec<Result<Record>> {
    use rayon::prelude::*;
    files.par_iter().map(|path| evaluate_file(unit, scanner, path)).collect()
}

#[cfg(not(feature = "parallel"))]
fn evaluate_all(unit: &PikalangUnit, scanner: Option<&FlagScanner>, files: &[PathBuf]) -> Vec<Result<Record>> {
    files.iter().map(|path| evaluate_file(unit, scanner, path)).collect()
}

fn print_record(record: &Record, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(record)?);
        return Ok(());
    }
    if let Some(output) = &record.output {
        println!("{}", output);
    }
    for flag in &record.flags {
        println!("flag: {}", flag);
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = UnitConfig::with_args(cli.args);
    config.force = cli.force;
    config.fallback = !cli.no_fallback;
    config.brainfuck.max_steps = cli.max_steps;

    let scanner = cli
        .flag_format
        .as_deref()
        .map(FlagScanner::new)
        .transpose()
        .context("invalid --flag-format")?;

    let unit = PikalangUnit::new(config);
    let mut failed = false;
    for result in evaluate_all(&unit, scanner.as_ref(), &cli.files) {
        match result {
            Ok(record) => print_record(&record, cli.json)?,
            Err(err) => {
                eprintln!("Error: {:#}", err);
                failed = true;
            }
        }
    }

    if failed {
        std::process::exit(1);
    }
    Ok(())
}
