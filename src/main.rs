//! CLI entry point for the lecture mirror tool.

use anyhow::Result;
use clap::Parser;
use lecture_mirror_core::{ConsoleProgress, HttpClient, NoProgress, Progress, mirror_lectures};
use tracing::{debug, info};

mod cli;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!(?args, "CLI arguments parsed");
    info!("Lecture mirror starting");

    let config = args.mirror_config()?;
    let client = HttpClient::with_timeouts(config.probe_timeout, config.transfer_timeout);

    // Quiet runs drop the per-file progress bar along with the log output
    let progress: Box<dyn Progress> = if args.quiet {
        Box::new(NoProgress)
    } else {
        Box::new(ConsoleProgress)
    };

    // Per-file probe and transfer failures are recorded in the report and
    // logged; they never turn into a non-zero exit code.
    let report = mirror_lectures(&config, &client, progress.as_ref()).await?;

    info!(
        downloaded = report.downloaded(),
        existing = report.skipped_existing(),
        missing = report.skipped_missing(),
        failed = report.failed(),
        total = report.total(),
        "Mirror complete"
    );

    Ok(())
}
