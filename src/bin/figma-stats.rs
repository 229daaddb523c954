//! Report entry point.
//!
//! Reads `figma-variables.json` from the current working directory and
//! prints aggregate statistics: collection and variable counts, the local
//! collections with their variable counts, and the resolved-type breakdown.
//! Exits 0 on success, 1 on any failure, each failure with a distinct
//! printed message.

use figma_variables::error::{Error, ReportError};
use figma_variables::{DEFAULT_OUTPUT_FILENAME, report};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let path = PathBuf::from(DEFAULT_OUTPUT_FILENAME);

    match report::analyze(&path).await {
        Ok(stats) => print!("{}", report::render(&stats)),
        Err(e) => {
            print_failure(&e);
            std::process::exit(1);
        }
    }
}

fn print_failure(error: &Error) {
    match error {
        Error::Report(ReportError::NotFound { .. }) => {
            eprintln!("❌ Error: {} file not found.", DEFAULT_OUTPUT_FILENAME);
            eprintln!("   Please make sure the file exists in the working directory.");
        }
        Error::Report(ReportError::Parse(detail)) => {
            eprintln!("❌ Error: Invalid JSON format in {}", DEFAULT_OUTPUT_FILENAME);
            eprintln!("   {}", detail);
        }
        Error::Report(ReportError::MissingMeta) => {
            eprintln!("❌ Error: Invalid JSON structure. Missing \"meta\" property.");
        }
        other => {
            eprintln!("❌ Error: {}", other);
        }
    }
}
