//! Core functionality for manual-diff
//!
//! Downloads two revisions of the AVR instruction-set manual, extracts their
//! text, recovers the documented instruction mnemonics and reports what a
//! switch from one revision to the other would add or lose.

pub mod comparator;
pub mod config;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod pipeline;
pub mod report;
pub mod scanner;

pub use comparator::{Comparison, KeyInstructionStatus, check_key_instructions};
pub use config::{ComparisonConfig, SourceDescriptor};
pub use error::{ManualError, Result};
pub use extractor::{PdfTextExtractor, TextExtractor};
pub use fetcher::{Fetcher, HttpFetcher};
pub use pipeline::ManualComparer;
pub use scanner::{InstructionScanner, MnemonicSet};
