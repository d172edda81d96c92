//! Manual comparison command

use anyhow::{Context, Result};
use manual_diff_core::{ComparisonConfig, HttpFetcher, ManualComparer, PdfTextExtractor};
use std::io::Write;
use tracing::debug;

use crate::cli::app::Cli;

/// Execute the comparison against the two fixed manual URLs
pub async fn execute(_args: Cli) -> Result<()> {
    let config = ComparisonConfig::default();
    debug!("Old manual: {}", config.old.url);
    debug!("New manual: {}", config.new.url);

    let fetcher = HttpFetcher::new().context("Failed to create HTTP client")?;
    let comparer = ManualComparer::new(config, fetcher, PdfTextExtractor::new());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let comparison = comparer.run(&mut out).await.context("Failed to write report")?;
    out.flush()?;

    match comparison {
        Some(comparison) if comparison.is_unchanged() => debug!("Instruction coverage unchanged"),
        Some(_) => debug!("Instruction coverage differs between manuals"),
        None => debug!("Comparison skipped"),
    }

    Ok(())
}
