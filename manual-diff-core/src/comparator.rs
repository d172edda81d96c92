//! Set comparison between two manual revisions

use crate::scanner::MnemonicSet;

/// Difference between the old and new manual's instruction sets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comparison {
    /// In the new manual only
    pub added: MnemonicSet,
    /// In the old manual only
    pub removed: MnemonicSet,
    /// In both manuals
    pub common: MnemonicSet,
}

impl Comparison {
    pub fn new(old: &MnemonicSet, new: &MnemonicSet) -> Self {
        Self {
            added: new.difference(old).cloned().collect(),
            removed: old.difference(new).cloned().collect(),
            common: old.intersection(new).cloned().collect(),
        }
    }

    pub fn is_unchanged(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Presence of one checklist instruction in each manual
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInstructionStatus {
    pub mnemonic: String,
    pub in_old: bool,
    pub in_new: bool,
}

impl KeyInstructionStatus {
    /// Coverage differs between the two manuals
    pub fn changed(&self) -> bool {
        self.in_old != self.in_new
    }
}

/// Evaluate the checklist in its given order
pub fn check_key_instructions<S: AsRef<str>>(
    keys: &[S],
    old: &MnemonicSet,
    new: &MnemonicSet,
) -> Vec<KeyInstructionStatus> {
    keys.iter()
        .map(|key| {
            let key = key.as_ref();
            KeyInstructionStatus {
                mnemonic: key.to_string(),
                in_old: old.contains(key),
                in_new: new.contains(key),
            }
        })
        .collect()
}
