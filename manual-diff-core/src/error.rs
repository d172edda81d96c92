//! Error types for manual processing
//!
//! Fetch and extraction failures are contained per manual by the pipeline;
//! only `Io` (the report sink failing) reaches the caller.

use thiserror::Error;

/// Main error type for fetching, extracting and reporting on a manual
#[derive(Debug, Error)]
pub enum ManualError {
    /// HTTP client could not be built (e.g. TLS backend initialisation)
    #[error("HTTP client setup failed: {message}")]
    Client { message: String },

    /// DNS, connect, TLS or body read failure
    #[error("Transport error fetching {url}: {message}")]
    Transport { url: String, message: String },

    /// Server answered with a non-2xx status
    #[error("HTTP error (status {status}) fetching {url}")]
    HttpStatus { url: String, status: u16 },

    /// PDF content could not be turned into text
    #[error("PDF extraction failed: {message}")]
    Extraction { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ManualError {
    pub fn transport(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport { url: url.into(), message: message.into() }
    }

    pub fn extraction(message: impl Into<String>) -> Self {
        Self::Extraction { message: message.into() }
    }

    /// Whether the error belongs to a single manual rather than the run as a whole
    pub fn is_source_failure(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::HttpStatus { .. } | Self::Extraction { .. })
    }
}

pub type Result<T> = std::result::Result<T, ManualError>;
