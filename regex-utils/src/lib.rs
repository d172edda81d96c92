//! Regex utilities for manual-diff
//! Extracted to a separate crate for compilation optimization

use once_cell::sync::Lazy;
use regex::Regex;

/// Instruction entries of the AVR instruction-set manual.
///
/// The pattern is a contract with one document's numbering convention:
/// every instruction lives in a `6.x` section whose first sub-section is
/// `6.x.1 Description`, and the description ends at an `Operation:` marker.
/// Changing it means re-validating against both manual revisions.
pub mod instruction_section {
    use super::*;

    /// Header line, its `.1 Description` sub-section and the description body.
    ///
    /// `regex` has no back-references, so the sub-section number is captured
    /// on its own (`subsection`) and checked against `section` by [`find_all`].
    pub static SECTION_PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(concat!(
            r"(?m)^(?P<section>6\.\d{1,3}?)\s+?(?P<mnemonic>\w+?)\s+?",
            r"(?:\((?P<mnemonic_2>\w+?)\)\s+?)?[-\x{2013}]\s+?(?P<name>.+?)\s*?$",
            r"\s+?(?P<subsection>6\.\d{1,3})\.1\s+?Description\s+",
            r"(?P<description>(?s:.+?))\s+?Operation:",
        ))
        .expect("Invalid regex pattern")
    });

    /// One instruction entry found in the manual text
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SectionMatch<'t> {
        /// Section number, e.g. `6.5`
        pub section: &'t str,
        pub mnemonic: &'t str,
        /// Parenthesized second mnemonic, e.g. `AVRe` in `ADIW (AVRe)`
        pub alias: Option<&'t str>,
        /// Instruction name after the dash
        pub name: &'t str,
        pub description: &'t str,
    }

    /// Find every instruction entry in `text`, in document order.
    ///
    /// A candidate whose description sub-section carries a different number
    /// than its header is dropped and the search resumes one character past
    /// the candidate's start.
    pub fn find_all(text: &str) -> Vec<SectionMatch<'_>> {
        let mut matches = Vec::new();
        let mut pos = 0;

        while pos < text.len() {
            let Some(caps) = SECTION_PATTERN.captures_at(text, pos) else {
                break;
            };
            let Some(whole) = caps.get(0) else {
                break;
            };

            let group = |name: &str| caps.name(name).map_or("", |m| m.as_str());

            if group("section") == group("subsection") {
                matches.push(SectionMatch {
                    section: group("section"),
                    mnemonic: group("mnemonic"),
                    alias: caps.name("mnemonic_2").map(|m| m.as_str()),
                    name: group("name"),
                    description: group("description"),
                });
                pos = whole.end();
            } else {
                let step = text[whole.start()..].chars().next().map_or(1, char::len_utf8);
                pos = whole.start() + step;
            }
        }

        matches
    }
}
