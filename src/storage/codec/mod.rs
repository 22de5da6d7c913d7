//! Text codecs for key/value files
//!
//! A codec turns the lines produced by [`TextFile::read_lines`] into an
//! ordered list of entries, and back into lines for
//! [`TextFile::write_lines`].
//!
//! | Codec | Layout |
//! |-------|--------|
//! | [`MarkerCodec`] | `■key` line followed by one or more value lines |
//! | [`SeparatorCodec`] | `key=value` on a single line |
//!
//! [`TextFile::read_lines`]: super::TextFile::read_lines
//! [`TextFile::write_lines`]: super::TextFile::write_lines

mod marker;
mod separator;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::Entry;

pub use marker::{MarkerCodec, DEFAULT_MARK};
pub use separator::{SeparatorCodec, DEFAULT_SEPARATOR};

/// Parse/serialize pair for one on-disk text format
pub trait Codec {
    /// Short name used in logs and messages
    fn name(&self) -> &'static str;

    /// Builds entries from trimmed, non-blank lines
    fn parse(&self, lines: &[String]) -> Vec<Entry>;

    /// Renders entries as lines, in entry order
    fn serialize(&self, entries: &[Entry]) -> Vec<String>;
}

impl<C: Codec + ?Sized> Codec for Box<C> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn parse(&self, lines: &[String]) -> Vec<Entry> {
        (**self).parse(lines)
    }

    fn serialize(&self, entries: &[Entry]) -> Vec<String> {
        (**self).serialize(entries)
    }
}

/// Selects one of the built-in codecs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum CodecKind {
    #[default]
    Separator,
    Marker,
}

impl CodecKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CodecKind::Separator => "separator",
            CodecKind::Marker => "marker",
        }
    }
}

impl fmt::Display for CodecKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
