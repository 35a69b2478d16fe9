//! Live total command
//!
//! Usage:
//!   facets-form live-total url <FACETS_SOURCE> [--filter facet:value]...
//!   facets-form live-total check <URL>

use super::filters_from_args;
use clap::{Args, Subcommand};
use facets_form_core::errors::ExError;
use facets_form_core::live_total::{build_url, DEFAULT_ROUTE};
use facets_form_core::LiveTotalRequest;
use serde_json::json;

#[derive(Debug, Args)]
pub struct LiveTotalArgs {
    #[command(subcommand)]
    pub command: LiveTotalCommand,
}

#[derive(Debug, Subcommand)]
pub enum LiveTotalCommand {
    /// Build the refresh URL for a filter state
    Url(UrlArgs),
    /// Parse a refresh URL and apply the endpoint's access check
    Check(CheckArgs),
}

#[derive(Debug, Args)]
pub struct UrlArgs {
    /// Facets source plugin id
    pub facets_source: String,

    /// Active filter as `facet:value`; repeatable
    #[arg(long = "filter", short = 'f')]
    pub filters: Vec<String>,

    #[arg(long, default_value = "/")]
    pub base_path: String,

    #[arg(long, default_value = DEFAULT_ROUTE)]
    pub route: String,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Refresh URL, absolute or site-relative
    pub url: String,
}

/// Execute live-total command
pub fn execute(args: LiveTotalArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        LiveTotalCommand::Url(url_args) => execute_url(url_args),
        LiveTotalCommand::Check(check_args) => execute_check(check_args),
    }
}

fn execute_url(args: UrlArgs) -> Result<(), Box<dyn std::error::Error>> {
    let filters = filters_from_args(&args.filters);
    println!(
        "{}",
        build_url(&args.base_path, &args.route, &args.facets_source, &filters)
    );
    Ok(())
}

fn execute_check(args: CheckArgs) -> Result<(), Box<dyn std::error::Error>> {
    let request = LiveTotalRequest::from_url(&args.url).map_err(ExError::from)?;
    let report = json!({
        "facets_source": request.facets_source,
        "base_plugin_id": request.base_plugin_id(),
        "filters": request.filters,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
