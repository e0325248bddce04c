//! Ingest command
//!
//! Usage: mixtape ingest [--source <URL|DIR>] [--output <PATH>] [--config <PATH>]

use clap::Args;
use std::path::PathBuf;

use mixtape_ingest::{source_for, write_playlists_file, Collection, IngestReport, Ingester};

use crate::config;

#[derive(Debug, Args)]
pub struct IngestArgs {
    /// Base URL or local directory holding the collection files
    #[arg(long, env = "MIXTAPE_SOURCE")]
    pub source: Option<String>,

    /// Output file for the resulting playlists
    #[arg(long, env = "MIXTAPE_OUTPUT")]
    pub output: Option<PathBuf>,

    /// TOML file with defaults for the options above
    #[arg(long, env = "MIXTAPE_CONFIG")]
    pub config: Option<PathBuf>,

    /// HTTP connect timeout in seconds
    #[arg(long)]
    pub connect_timeout_secs: Option<u64>,

    /// HTTP overall timeout in seconds, including the body
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

/// Execute ingest command
///
/// The output file is only written once every stage has succeeded.
pub fn execute(args: IngestArgs) -> Result<(), Box<dyn std::error::Error>> {
    let settings = config::resolve_ingest(&args)?;
    tracing::debug!(source = %settings.source, output = %settings.output.display(), "resolved settings");

    let source = source_for(&settings.source, &settings.transport)?;
    let mut ingester = Ingester::new(source);
    let report = ingester.run()?;

    write_playlists_file(ingester.store(), &settings.output)?;

    print_summary(&report);
    println!(
        "The output file {} was successfully created.",
        settings.output.display()
    );
    Ok(())
}

fn print_summary(report: &IngestReport) {
    for stage in &report.stages {
        match stage.collection {
            Collection::Changes => println!(
                "Applied {} Changes ({} skipped)",
                stage.ingested, stage.skipped
            ),
            other => println!("Ingested {} {}", stage.ingested, other.label()),
        }
    }
}
