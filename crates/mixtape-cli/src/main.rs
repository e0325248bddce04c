//! Mixtape CLI
//!
//! Command-line interface for the mixtape ingester

use clap::{Parser, Subcommand, ValueEnum};
use mixtape_core::logging_facility::{init, Profile};

mod commands;
mod config;

#[derive(Debug, Parser)]
#[command(name = "mixtape")]
#[command(about = "Mixtape - ingest users, songs and playlists, then apply changes", long_about = None)]
struct Cli {
    /// Log output format (logs go to stderr)
    #[arg(long, global = true, value_enum, env = "MIXTAPE_LOG_FORMAT", default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Ingest all collections and write the resulting playlists
    Ingest(commands::ingest::IngestArgs),
    /// Serve a local data directory over HTTP
    Serve(commands::serve::ServeArgs),
}

fn main() {
    let cli = Cli::parse();

    init(match cli.log_format {
        LogFormat::Pretty => Profile::Development,
        LogFormat::Json => Profile::Production,
    });

    let result = match cli.command {
        Commands::Ingest(args) => commands::ingest::execute(args),
        Commands::Serve(args) => commands::serve::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
