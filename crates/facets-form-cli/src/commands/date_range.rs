//! Date range command
//!
//! Usage: facets-form date-range parse <INTERVAL> [--config <FILE>] [--delimiter <D>] [--format <F>]

use clap::{Args, Subcommand};
use facets_form_core::errors::ExError;
use facets_form_core::{DateRange, FacetsFormConfig};
use serde_json::json;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct DateRangeArgs {
    #[command(subcommand)]
    pub command: DateRangeCommand,
}

#[derive(Debug, Subcommand)]
pub enum DateRangeCommand {
    /// Parse an interval and print its bounds, condition and summary
    Parse(ParseArgs),
}

#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Interval string, e.g. `2021-08-16~2021-08-17`
    pub interval: String,

    /// Form config file supplying the delimiter and summary format
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Overrides the configured delimiter
    #[arg(long)]
    pub delimiter: Option<String>,

    /// chrono format of the summary dates; overrides the configured one
    #[arg(long)]
    pub format: Option<String>,
}

/// Execute date-range command
pub fn execute(args: DateRangeArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        DateRangeCommand::Parse(parse_args) => execute_parse(parse_args),
    }
}

fn execute_parse(args: ParseArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => FacetsFormConfig::load(path).map_err(ExError::from)?,
        None => FacetsFormConfig::default(),
    };
    let delimiter = args.delimiter.unwrap_or(config.date_range.delimiter);
    let format = args.format.unwrap_or(config.date_range.summary_format);

    let range = DateRange::parse(&args.interval, &delimiter).map_err(ExError::from)?;
    let condition = range.condition().map_err(ExError::from)?;
    let summary = range.summary(&format).map_err(ExError::from)?;

    let report = json!({
        "interval": args.interval,
        "type": range.date_type(),
        "from": range.from().map(|d| d.to_rfc3339()),
        "to": range.to().map(|d| d.to_rfc3339()),
        "from_bound": range.from_bound().map(|d| d.to_rfc3339()),
        "to_bound": range.to_bound().map(|d| d.to_rfc3339()),
        "operator": condition.operator(),
        "values": condition.values(),
        "summary": summary,
        "filter_value": range.to_filter_value(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
