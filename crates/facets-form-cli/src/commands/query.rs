//! Facet query command
//!
//! Usage:
//!   facets-form query encode [--filter facet:value]...
//!   facets-form query decode <QUERY>
//!   facets-form query reset <QUERY>

use super::filters_from_args;
use clap::{Args, Subcommand};
use facets_form_core::query;

#[derive(Debug, Args)]
pub struct QueryArgs {
    #[command(subcommand)]
    pub command: QueryCommand,
}

#[derive(Debug, Subcommand)]
pub enum QueryCommand {
    /// Serialize filters as `f[i]=facet:value` pairs
    Encode {
        /// Active filter as `facet:value`; repeatable
        #[arg(long = "filter", short = 'f')]
        filters: Vec<String>,
    },
    /// Print the filters carried by a query string as JSON
    Decode { query: String },
    /// Drop every filter from a query string, keeping other parameters
    Reset { query: String },
}

/// Execute query command
pub fn execute(args: QueryArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        QueryCommand::Encode { filters } => {
            println!("{}", query::to_query_string(&filters_from_args(&filters)));
        }
        QueryCommand::Decode { query: raw } => {
            let filters = query::decode_query(&raw);
            println!("{}", serde_json::to_string_pretty(&filters)?);
        }
        QueryCommand::Reset { query: raw } => {
            println!("{}", query::strip_filters(&raw));
        }
    }
    Ok(())
}
