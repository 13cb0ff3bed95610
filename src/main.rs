//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `banned_words_import` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use banned_words_import::initialization::init_logger_with;
use banned_words_import::{run_conversion, Config, ExportOutcome, Opt};

fn main() -> Result<()> {
    let config = Config::from(Opt::parse());

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    println!("🔄 Converting {} ...", config.input.display());

    match run_conversion(&config)
        .with_context(|| format!("Failed to convert {}", config.input.display()))
    {
        Ok(report) => {
            for outcome in &report.outputs {
                match outcome {
                    ExportOutcome::Written {
                        artifact,
                        path,
                        records,
                    } => {
                        println!("✅ {} written: {}", artifact, path.display());
                        println!("📊 {} record{}", records, if *records == 1 { "" } else { "s" });
                    }
                    ExportOutcome::Empty { artifact } => {
                        println!("⚠️  No valid records found, {} not written", artifact);
                    }
                }
            }
            if report.skipped.total() > 0 {
                println!(
                    "Skipped {} of {} row{} (use --log-level debug to list them)",
                    report.skipped.total(),
                    report.rows_read,
                    if report.rows_read == 1 { "" } else { "s" }
                );
            }
            if report.wrote_any() {
                println!("✅ All done!");
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("banned_words_import error: {:#}", e);
            process::exit(1);
        }
    }
}
