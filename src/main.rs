use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use coord_swap::{
    Args, Config, OutputFormat, RunReport, generate_run_id, rewrite_in_place, write_diagnostics,
};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();
}

fn emit(report: &RunReport, config: &Config) -> Result<()> {
    let output = match config.format {
        OutputFormat::Json => report.to_json().context("Failed to serialize report")?,
        OutputFormat::Human => report.to_human(),
    };

    match &config.output {
        Some(path) => write_report(path, &output),
        None => {
            println!("{}", output);
            Ok(())
        }
    }
}

fn write_report(path: &Path, output: &str) -> Result<()> {
    fs::write(path, output)
        .with_context(|| format!("Failed to write output to '{}'", path.display()))
}

fn main() {
    init_logging();

    let config = Config::from(Args::parse());
    let run_id = generate_run_id();
    debug!(run_id = %run_id, target = %config.target.display(), "starting run");

    // Diagnostics that cannot be written fail the run, though the file is already rewritten
    let mut diagnostics_failed = false;

    let report = match rewrite_in_place(&config.target) {
        Ok(rewrite) => {
            if config.diagnostic {
                // Keep stdout parseable in JSON mode
                let result = match config.format {
                    OutputFormat::Json => write_diagnostics(&mut io::stderr(), &rewrite),
                    OutputFormat::Human => write_diagnostics(&mut io::stdout(), &rewrite),
                };
                if let Err(e) = result {
                    error!("failed to print diagnostics: {}", e);
                    diagnostics_failed = true;
                }
            }
            RunReport::success(run_id, &rewrite)
        }
        Err(e) => {
            error!("{}", e);
            RunReport::failure(run_id, config.target.display().to_string(), e.to_string())
        }
    };

    if let Err(e) = emit(&report, &config) {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }

    if !report.success || diagnostics_failed {
        std::process::exit(1);
    }
}
