//! Sequential old/new manual comparison
//!
//! Each manual is fetched, extracted and scanned before the next one starts.
//! Transport and extraction failures stay inside the manual they belong to:
//! they are reported, the manual counts as having no instructions, and the
//! comparison section is skipped.

use std::io::Write;

use tracing::{info, warn};

use crate::comparator::{Comparison, check_key_instructions};
use crate::config::{ComparisonConfig, SourceDescriptor};
use crate::error::Result;
use crate::extractor::TextExtractor;
use crate::fetcher::Fetcher;
use crate::report;
use crate::scanner::{InstructionScanner, MnemonicSet};

/// Drives one comparison run between the configured old and new manuals
pub struct ManualComparer<F, E> {
    config: ComparisonConfig,
    fetcher: F,
    extractor: E,
    scanner: InstructionScanner,
}

impl<F: Fetcher, E: TextExtractor> ManualComparer<F, E> {
    pub fn new(config: ComparisonConfig, fetcher: F, extractor: E) -> Self {
        let scanner = InstructionScanner::new(config.excluded_aliases.iter().cloned());
        Self { config, fetcher, extractor, scanner }
    }

    /// Run the full comparison, writing the report to `out`.
    ///
    /// Returns the comparison when both manuals yielded instructions, `None`
    /// when the comparison section was skipped. Only a failing `out` is an error.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<Option<Comparison>> {
        report::write_banner(out)?;

        let old = self.process_source(&self.config.old, out).await?;
        let new = self.process_source(&self.config.new, out).await?;

        if old.is_empty() || new.is_empty() {
            warn!(
                old = old.len(),
                new = new.len(),
                "Skipping comparison, at least one manual yielded no instructions"
            );
            return Ok(None);
        }

        let comparison = Comparison::new(&old, &new);
        let checklist = check_key_instructions(&self.config.key_instructions, &old, &new);
        report::write_comparison(out, &comparison, &checklist)?;

        let changed = checklist.iter().filter(|status| status.changed()).count();
        info!(
            added = comparison.added.len(),
            removed = comparison.removed.len(),
            common = comparison.common.len(),
            changed_key_instructions = changed,
            "Comparison complete"
        );

        Ok(Some(comparison))
    }

    /// Fetch, extract and scan one manual, reporting progress to `out`.
    ///
    /// A fetch or extraction failure is reported and yields an empty set.
    pub async fn process_source<W: Write>(
        &self,
        source: &SourceDescriptor,
        out: &mut W,
    ) -> Result<MnemonicSet> {
        report::write_source_header(out, source)?;

        match self.scan_source(source, out).await {
            Ok(instructions) => Ok(instructions),
            Err(e) if e.is_source_failure() => {
                warn!(label = %source.label, error = %e, "Manual processing failed");
                report::write_source_error(out, source, &e)?;
                Ok(MnemonicSet::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Fetch, extract and scan one manual, surfacing every failure
    pub async fn scan_source<W: Write>(
        &self,
        source: &SourceDescriptor,
        out: &mut W,
    ) -> Result<MnemonicSet> {
        let pdf_bytes = self.fetcher.fetch(&source.url).await?;
        writeln!(out, "PDF Size: {} bytes", report::with_thousands(pdf_bytes.len()))?;

        writeln!(out, "Extracting text from PDF...")?;
        let text = self.extractor.extract(&pdf_bytes)?;
        drop(pdf_bytes);
        writeln!(out, "Extracted text length: {} characters", report::with_thousands(text.chars().count()))?;

        let instructions = self.scanner.scan(&text);
        info!(label = %source.label, count = instructions.len(), "Scanned manual");
        report::write_source_summary(out, &instructions, self.config.preview_len)?;

        Ok(instructions)
    }
}
