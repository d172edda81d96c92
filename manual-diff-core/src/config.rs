//! Fixed configuration for a manual comparison run

/// Manual revision currently used by the documentation generator
pub const OLD_MANUAL_URL: &str =
    "https://ww1.microchip.com/downloads/en/DeviceDoc/AVR-InstructionSet-Manual-DS40002198.pdf";

/// Candidate replacement location for the same manual
pub const NEW_MANUAL_URL: &str = "https://ww1.microchip.com/downloads/aemDocuments/documents/MCU08/ProductDocuments/ReferenceManuals/AVR-InstructionSet-Manual-DS40002198.pdf";

/// Instructions the generated documentation must keep covering
pub const KEY_INSTRUCTIONS: [&str; 15] = [
    "ADD", "SUB", "MUL", "AND", "OR", "EOR", "LSL", "LSR", "CLI", "SEI", "NOP", "WDR", "FMULS",
    "MOVW", "ADIW",
];

/// Core-family markers the PDF layout puts where an alias would be
pub const EXCLUDED_ALIASES: [&str; 2] = ["AVRe", "AVRrc"];

/// Entries shown from each end of the instruction preview
pub const PREVIEW_LEN: usize = 10;

/// One manual variant to download and scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDescriptor {
    pub url: String,
    /// Human readable name used in the report
    pub label: String,
}

impl SourceDescriptor {
    pub fn new(url: impl Into<String>, label: impl Into<String>) -> Self {
        Self { url: url.into(), label: label.into() }
    }
}

/// Everything a comparison run needs, built once at startup
#[derive(Debug, Clone)]
pub struct ComparisonConfig {
    pub old: SourceDescriptor,
    pub new: SourceDescriptor,
    pub key_instructions: Vec<String>,
    pub excluded_aliases: Vec<String>,
    pub preview_len: usize,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            old: SourceDescriptor::new(OLD_MANUAL_URL, "Current Manual (2021)"),
            new: SourceDescriptor::new(NEW_MANUAL_URL, "New Manual"),
            key_instructions: KEY_INSTRUCTIONS.iter().map(|s| s.to_string()).collect(),
            excluded_aliases: EXCLUDED_ALIASES.iter().map(|s| s.to_string()).collect(),
            preview_len: PREVIEW_LEN,
        }
    }
}
