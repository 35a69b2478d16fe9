//! facets-form CLI
//!
//! Command-line interface for replaying facets forms and inspecting the
//! values they produce

use clap::{Parser, Subcommand};
use facets_form_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "facets-form")]
#[command(about = "facets-form - Faceted search form state tools", long_about = None)]
struct Cli {
    /// Log as JSON lines instead of human-readable text
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Replay a page fixture and report every change event
    Replay(commands::replay::ReplayArgs),
    /// Date range interval operations
    DateRange(commands::date_range::DateRangeArgs),
    /// Live total URL operations
    LiveTotal(commands::live_total::LiveTotalArgs),
    /// Facet query string operations
    Query(commands::query::QueryArgs),
}

fn main() {
    let cli = Cli::parse();

    init(if cli.json_logs {
        Profile::Production
    } else {
        Profile::Development
    });

    let result = match cli.command {
        Commands::Replay(args) => commands::replay::execute(args),
        Commands::DateRange(args) => commands::date_range::execute(args),
        Commands::LiveTotal(args) => commands::live_total::execute(args),
        Commands::Query(args) => commands::query::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
