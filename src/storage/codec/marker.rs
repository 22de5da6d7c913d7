//! Marker-delimited multi-line format
//!
//! ```text
//! ■Key1
//! Value1 line A
//! Value1 line B
//! ■Key2
//! Value2
//! ```
//!
//! Each record starts with a line beginning with the mark; the rest of that
//! line (trimmed) is the key. All following non-mark lines form the value,
//! joined with `\n` and trimmed.

use tracing::{debug, warn};

use super::Codec;
use crate::domain::Entry;
use crate::storage::text_file::trim_line;

/// Default record mark
pub const DEFAULT_MARK: &str = "■";

/// Codec for the marker format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerCodec {
    mark: String,
    drop_empty_bodies: bool,
}

impl Default for MarkerCodec {
    fn default() -> Self {
        Self {
            mark: DEFAULT_MARK.to_string(),
            drop_empty_bodies: true,
        }
    }
}

impl MarkerCodec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a different record mark. An empty mark is ignored.
    pub fn with_mark(mut self, mark: impl Into<String>) -> Self {
        let mark = mark.into();
        if !mark.is_empty() {
            self.mark = mark;
        }
        self
    }

    /// Controls what happens to a record with no value lines.
    ///
    /// When `true` (the default) such a record is dropped from the parse
    /// result. When `false` it is kept with an empty value and a warning is
    /// logged.
    pub fn drop_empty_bodies(mut self, drop: bool) -> Self {
        self.drop_empty_bodies = drop;
        self
    }

    pub fn mark(&self) -> &str {
        &self.mark
    }

    pub fn drops_empty_bodies(&self) -> bool {
        self.drop_empty_bodies
    }

    fn flush(&self, entries: &mut Vec<Entry>, key: Option<String>, body: &str) {
        let Some(key) = key else {
            if !body.is_empty() {
                debug!(
                    lines = body.lines().count(),
                    "discarding content before first record mark"
                );
            }
            return;
        };

        if !body.is_empty() {
            entries.push(Entry::new(key, trim_line(body)));
        } else if self.drop_empty_bodies {
            debug!(key = %key, "dropping record with empty body");
        } else {
            warn!(key = %key, "record has an empty body");
            entries.push(Entry::new(key, ""));
        }
    }
}

impl Codec for MarkerCodec {
    fn name(&self) -> &'static str {
        "marker"
    }

    fn parse(&self, lines: &[String]) -> Vec<Entry> {
        let mut entries = Vec::new();
        let mut key: Option<String> = None;
        let mut body = String::new();

        for line in lines {
            match line.strip_prefix(self.mark.as_str()) {
                Some(rest) => {
                    self.flush(&mut entries, key.take(), &body);
                    body.clear();
                    key = Some(trim_line(rest).to_string());
                }
                None => {
                    body.push_str(line);
                    body.push('\n');
                }
            }
        }
        self.flush(&mut entries, key, &body);

        entries
    }

    fn serialize(&self, entries: &[Entry]) -> Vec<String> {
        entries
            .iter()
            .flat_map(|entry| [format!("{}{}", self.mark, entry.key), entry.value.clone()])
            .collect()
    }
}
