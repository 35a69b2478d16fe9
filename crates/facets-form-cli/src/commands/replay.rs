//! Page replay command
//!
//! Usage: facets-form replay <PAGE> [--output <FILE>]

use clap::Args;
use facets_form_core::errors::ExError;
use facets_form_core::page::{parse_page_file, replay};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ReplayArgs {
    /// Path to the page fixture YAML file
    pub path: PathBuf,

    /// Write the JSON report to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Execute replay command
pub fn execute(args: ReplayArgs) -> Result<(), Box<dyn std::error::Error>> {
    let page = parse_page_file(&args.path).map_err(ExError::from)?;
    let report = replay(&page);
    let json = serde_json::to_string_pretty(&report)?;

    match args.output {
        Some(output) => {
            std::fs::write(&output, json)?;
            tracing::info!(path = %output.display(), steps = report.steps.len(), "report written");
        }
        None => println!("{}", json),
    }

    Ok(())
}
