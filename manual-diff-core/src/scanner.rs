//! Instruction mnemonic scanning over extracted manual text

use std::collections::BTreeSet;

use regex_utils::instruction_section;
use tracing::{debug, trace};

use crate::config::EXCLUDED_ALIASES;

/// Unique instruction mnemonics; ordering only matters for display
pub type MnemonicSet = BTreeSet<String>;

/// Collects mnemonics from every instruction section header in a text
#[derive(Debug, Clone)]
pub struct InstructionScanner {
    excluded_aliases: Vec<String>,
}

impl InstructionScanner {
    pub fn new<I, S>(excluded_aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { excluded_aliases: excluded_aliases.into_iter().map(Into::into).collect() }
    }

    /// Scan `text` for instruction entries.
    ///
    /// The primary mnemonic of every entry is kept. The parenthesized alias is
    /// kept unless it is one of the excluded layout artifacts. No matches is an
    /// empty set, not an error.
    pub fn scan(&self, text: &str) -> MnemonicSet {
        let mut instructions = MnemonicSet::new();

        for entry in instruction_section::find_all(text) {
            trace!(section = entry.section, mnemonic = entry.mnemonic, alias = ?entry.alias, "section header");

            if !entry.mnemonic.is_empty() {
                instructions.insert(entry.mnemonic.to_string());
            }

            if let Some(alias) = entry.alias.filter(|alias| !self.is_excluded(alias)) {
                instructions.insert(alias.to_string());
            }
        }

        debug!("Scanned {} unique instructions", instructions.len());
        instructions
    }

    fn is_excluded(&self, alias: &str) -> bool {
        self.excluded_aliases.iter().any(|excluded| excluded == alias)
    }
}

impl Default for InstructionScanner {
    fn default() -> Self {
        Self::new(EXCLUDED_ALIASES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> MnemonicSet {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_block() {
        let text = "6.1 ADD - Add without Carry\n6.1.1 Description\nAdds...\nOperation:";
        assert_eq!(InstructionScanner::default().scan(text), set(&["ADD"]));
    }

    #[test]
    fn test_excluded_alias_keeps_primary() {
        let scanner = InstructionScanner::default();

        let text = "6.5 ADIW (AVRe) - Add Immediate to Word\n6.5.1 Description\n...\nOperation:";
        assert_eq!(scanner.scan(text), set(&["ADIW"]));

        let text = "6.9 LDS (AVRrc) - Load Direct from Data Space\n6.9.1 Description\n...\nOperation:";
        assert_eq!(scanner.scan(text), set(&["LDS"]));
    }

    #[test]
    fn test_real_alias_is_added() {
        let text = "6.70 LSL (ADD) - Logical Shift Left\n6.70.1 Description\nShifts all bits.\nOperation:";
        assert_eq!(InstructionScanner::default().scan(text), set(&["ADD", "LSL"]));
    }

    #[test]
    fn test_custom_exclusions() {
        let scanner = InstructionScanner::new(["ADD"]);
        let text = "6.70 LSL (ADD) - Logical Shift Left\n6.70.1 Description\nShifts all bits.\nOperation:";
        assert_eq!(scanner.scan(text), set(&["LSL"]));
    }

    #[test]
    fn test_no_matches_is_empty() {
        let scanner = InstructionScanner::default();
        assert!(scanner.scan("").is_empty());
        assert!(scanner.scan("5.1 Overview\nThe AVR core has 32 registers.").is_empty());
    }

    #[test]
    fn test_duplicates_collapse() {
        let block = "6.1 ADD - Add without Carry\n6.1.1 Description\nAdds.\nOperation:\n";
        let text = format!("{block}{block}");
        assert_eq!(InstructionScanner::default().scan(&text), set(&["ADD"]));
    }

    #[test]
    fn test_scan_is_independent_of_block_order() {
        let blocks = [
            "6.1 ADD - Add without Carry\n6.1.1 Description\nAdds.\nOperation:\n",
            "Page footer DS40002198\n",
            "6.2 SUB - Subtract without Carry\n6.2.1 Description\nSubtracts.\nOperation:\n",
            "Table 6-1. Status flags\n",
            "6.3 MUL - Multiply Unsigned\n6.3.1 Description\nMultiplies.\nOperation:\n",
        ];
        let forward: String = blocks.concat();
        let backward: String = blocks.iter().rev().copied().collect();

        let scanner = InstructionScanner::default();
        let expected = set(&["ADD", "MUL", "SUB"]);
        assert_eq!(scanner.scan(&forward), expected);
        assert_eq!(scanner.scan(&backward), expected);
        assert_eq!(scanner.scan(&forward), scanner.scan(&forward));
    }
}
