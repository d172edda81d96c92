//! Human readable report rendering
//!
//! Everything the tool prints on stdout goes through here so the pipeline can
//! be pointed at any `io::Write` sink.

use std::io::{self, Write};

use crate::comparator::{Comparison, KeyInstructionStatus};
use crate::config::SourceDescriptor;
use crate::scanner::MnemonicSet;

pub const TITLE: &str = "AVR Instruction Set Manual Comparison";

pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{TITLE}")?;
    writeln!(out, "{}", "=".repeat(50))
}

pub fn write_source_header<W: Write>(out: &mut W, source: &SourceDescriptor) -> io::Result<()> {
    writeln!(out, "\n=== Testing {} ===", source.label)?;
    writeln!(out, "URL: {}", source.url)
}

/// Count and preview of the mnemonics found in one manual
pub fn write_source_summary<W: Write>(
    out: &mut W,
    instructions: &MnemonicSet,
    preview_len: usize,
) -> io::Result<()> {
    writeln!(out, "Found {} unique instructions", instructions.len())?;
    writeln!(out, "Instructions found: {}", preview(instructions, preview_len).join(", "))
}

pub fn write_source_error<W: Write>(
    out: &mut W,
    source: &SourceDescriptor,
    error: &dyn std::error::Error,
) -> io::Result<()> {
    writeln!(out, "Error processing {}: {}", source.label, error)
}

pub fn write_comparison<W: Write>(
    out: &mut W,
    comparison: &Comparison,
    checklist: &[KeyInstructionStatus],
) -> io::Result<()> {
    writeln!(out, "\n=== COMPARISON RESULTS ===")?;
    writeln!(out, "Common instructions: {}", comparison.common.len())?;
    writeln!(out, "Instructions in new manual only: {}", comparison.added.len())?;
    writeln!(out, "Instructions in old manual only: {}", comparison.removed.len())?;

    if !comparison.added.is_empty() {
        writeln!(out, "\nNEW INSTRUCTIONS: {}", bracketed(&comparison.added))?;
    }

    if !comparison.removed.is_empty() {
        writeln!(out, "\nREMOVED INSTRUCTIONS: {}", bracketed(&comparison.removed))?;
    }

    writeln!(out, "\n=== KEY INSTRUCTION CHECK ===")?;
    for status in checklist {
        let mark = if status.in_new { '✓' } else { '✗' };
        let change = if status.changed() { " (CHANGED!)" } else { "" };
        writeln!(out, "{} {}{}", mark, status.mnemonic, change)?;
    }

    Ok(())
}

/// First and last `len` entries with an ellipsis between, or all of them
/// when there are no more than `2 * len`.
pub fn preview(instructions: &MnemonicSet, len: usize) -> Vec<&str> {
    let all: Vec<&str> = instructions.iter().map(String::as_str).collect();
    if all.len() <= 2 * len {
        return all;
    }

    let mut shown = Vec::with_capacity(2 * len + 1);
    shown.extend_from_slice(&all[..len]);
    shown.push("...");
    shown.extend_from_slice(&all[all.len() - len..]);
    shown
}

/// `1234567` -> `1,234,567`
pub fn with_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}

fn bracketed(instructions: &MnemonicSet) -> String {
    let quoted: Vec<String> = instructions.iter().map(|m| format!("'{m}'")).collect();
    format!("[{}]", quoted.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparator::check_key_instructions;
    use crate::config::KEY_INSTRUCTIONS;

    fn set(items: &[&str]) -> MnemonicSet {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_with_thousands() {
        assert_eq!(with_thousands(0), "0");
        assert_eq!(with_thousands(999), "999");
        assert_eq!(with_thousands(1000), "1,000");
        assert_eq!(with_thousands(123456), "123,456");
        assert_eq!(with_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_preview_short_list_is_complete() {
        let instructions: MnemonicSet = (0..20).map(|i| format!("I{i:02}")).collect();
        let shown = preview(&instructions, 10);
        assert_eq!(shown.len(), 20);
        assert!(!shown.contains(&"..."));
    }

    #[test]
    fn test_preview_long_list_is_truncated() {
        let instructions: MnemonicSet = (0..25).map(|i| format!("I{i:02}")).collect();
        let shown = preview(&instructions, 10);

        assert_eq!(shown.len(), 21);
        assert_eq!(shown[0], "I00");
        assert_eq!(shown[9], "I09");
        assert_eq!(shown[10], "...");
        assert_eq!(shown[11], "I15");
        assert_eq!(shown[20], "I24");
    }

    #[test]
    fn test_source_summary() {
        let text = render(|out| write_source_summary(out, &set(&["SUB", "ADD"]), 10));
        assert_eq!(text, "Found 2 unique instructions\nInstructions found: ADD, SUB\n");
    }

    #[test]
    fn test_comparison_report() {
        let old = set(&["ADD", "SUB", "MUL"]);
        let new = set(&["ADD", "SUB", "FMULS"]);
        let comparison = Comparison::new(&old, &new);
        let checklist = check_key_instructions(&KEY_INSTRUCTIONS, &old, &new);

        let text = render(|out| write_comparison(out, &comparison, &checklist));

        assert!(text.starts_with("\n=== COMPARISON RESULTS ===\n"));
        assert!(text.contains("Common instructions: 2\n"));
        assert!(text.contains("Instructions in new manual only: 1\n"));
        assert!(text.contains("Instructions in old manual only: 1\n"));
        assert!(text.contains("\nNEW INSTRUCTIONS: ['FMULS']\n"));
        assert!(text.contains("\nREMOVED INSTRUCTIONS: ['MUL']\n"));
        assert!(text.contains("\n✓ ADD\n"));
        assert!(text.contains("\n✗ MUL (CHANGED!)\n"));
        assert!(text.contains("\n✓ FMULS (CHANGED!)\n"));
        assert!(text.contains("\n✗ NOP\n"));
        assert_eq!(text.matches("(CHANGED!)").count(), 2);
    }

    #[test]
    fn test_unchanged_report_omits_listings() {
        let both = set(&["ADD"]);
        let comparison = Comparison::new(&both, &both);
        let checklist = check_key_instructions(&["ADD"], &both, &both);

        let text = render(|out| write_comparison(out, &comparison, &checklist));

        assert!(!text.contains("NEW INSTRUCTIONS"));
        assert!(!text.contains("REMOVED INSTRUCTIONS"));
        assert!(text.ends_with("=== KEY INSTRUCTION CHECK ===\n✓ ADD\n"));
    }
}
