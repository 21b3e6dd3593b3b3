//! Main entry point for the ichs CLI application.
//!
//! Reads a ZIP archive from a URL (or local path), prints its top two
//! directory levels and checks them against SDKMAN!'s packaging rules.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use ichs::output::Reporter;
use ichs::{Cli, DirectoryGroup, HttpStream, LocalFileStream, ReadStream, ZipEntryStream};
use ichs::{layout, rules};

/// Application entry point.
///
/// Exits with 0 when the archive passes every rule and 1 when a rule
/// fails or the archive could not be read.
#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let reporter = Reporter::new();

    // The source is closed as soon as grouping returns, before any output
    let group = match read_group(&cli).await {
        Ok(group) => group,
        Err(e) => {
            reporter.error(&e);
            return ExitCode::FAILURE;
        }
    };

    reporter.tree(&cli.caption(), &group);

    if reporter.checks(rules::check(&group)) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Open the archive and group its directory entries.
async fn read_group(cli: &Cli) -> Result<DirectoryGroup> {
    if cli.is_http_url() {
        // Handle remote ZIP file via a single streamed GET
        let source = HttpStream::open(&cli.url)
            .await
            .with_context(|| format!("failed to download {}", cli.url))?;
        group_entries(source, &cli.url).await
    } else {
        // Handle local ZIP file
        let source = LocalFileStream::open(Path::new(&cli.url))
            .await
            .with_context(|| format!("failed to open {}", cli.url))?;
        group_entries(source, &cli.url).await
    }
}

async fn group_entries<S: ReadStream>(source: S, location: &str) -> Result<DirectoryGroup> {
    let mut entries = ZipEntryStream::new(source);

    let group = layout::read_directory_group(&mut entries)
        .await
        .with_context(|| format!("failed to read the entries of {location}"))?;

    tracing::info!(roots = group.len(), "read {} entries", entries.entries_read());

    Ok(group)
}
