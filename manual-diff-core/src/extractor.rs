//! PDF text extraction
//!
//! Text comes out in content-stream order. No column or paragraph-flow
//! reconstruction is attempted, so each instruction's description stays
//! contiguous instead of being interleaved with the neighbouring column.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Mutex, PoisonError};

use tracing::debug;

use crate::error::{ManualError, Result};

/// Turns document bytes into one linear text stream
pub trait TextExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8]) -> Result<String>;
}

/// `pdf-extract` backed extractor
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        // pdf-extract panics on some malformed content streams instead of erroring
        let outcome = quiet_catch_unwind(|| pdf_extract::extract_text_from_mem(bytes));

        match outcome {
            Ok(Ok(text)) => {
                debug!("Extracted {} bytes of text", text.len());
                Ok(text)
            }
            Ok(Err(e)) => Err(ManualError::extraction(e.to_string())),
            Err(payload) => Err(ManualError::extraction(panic_message(&*payload))),
        }
    }
}

/// Serializes swaps of the process-wide panic hook
static PANIC_HOOK_LOCK: Mutex<()> = Mutex::new(());

/// `catch_unwind` with the panic report routed to the debug log instead of
/// stderr; the caught panic is reported as an extraction error.
fn quiet_catch_unwind<T>(f: impl FnOnce() -> T) -> std::thread::Result<T> {
    let _guard = PANIC_HOOK_LOCK.lock().unwrap_or_else(PoisonError::into_inner);

    let previous = panic::take_hook();
    panic::set_hook(Box::new(|info| debug!("PDF parser panicked: {}", info)));
    let outcome = panic::catch_unwind(AssertUnwindSafe(f));
    panic::set_hook(previous);

    outcome
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "PDF parser panicked".to_string()
    }
}
