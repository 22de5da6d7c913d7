//! Separator-delimited single-line format
//!
//! ```text
//! Key1=Value1
//! Key2=
//! ```
//!
//! Each line is split at the first separator. Lines without a separator are
//! not records and are skipped.

use tracing::trace;

use super::Codec;
use crate::domain::Entry;

/// Default key/value separator
pub const DEFAULT_SEPARATOR: &str = "=";

/// Codec for the separator format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorCodec {
    separator: String,
}

impl Default for SeparatorCodec {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl SeparatorCodec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a different separator. An empty separator is ignored.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        let separator = separator.into();
        if !separator.is_empty() {
            self.separator = separator;
        }
        self
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Splits one line into an entry, or `None` if it has no separator
    pub fn parse_line(&self, line: &str) -> Option<Entry> {
        line.split_once(self.separator.as_str())
            .map(|(key, value)| Entry::new(key, value))
    }
}

impl Codec for SeparatorCodec {
    fn name(&self) -> &'static str {
        "separator"
    }

    fn parse(&self, lines: &[String]) -> Vec<Entry> {
        lines
            .iter()
            .filter_map(|line| {
                let entry = self.parse_line(line);
                if entry.is_none() {
                    trace!(line = %line, "skipping line without separator");
                }
                entry
            })
            .collect()
    }

    fn serialize(&self, entries: &[Entry]) -> Vec<String> {
        entries
            .iter()
            .map(|entry| format!("{}{}{}", entry.key, self.separator, entry.value))
            .collect()
    }
}
