//! # Storage Layer
//!
//! Persistence of ordered key/value entries in plain UTF-8 text files.
//!
//! ## Storage Formats
//!
//! | Format | Codec | Example |
//! |--------|-------|---------|
//! | Marker | [`MarkerCodec`] | `■key` line, then value lines |
//! | Separator | [`SeparatorCodec`] | `key=value` per line |
//!
//! ## Reading and Writing
//!
//! - [`TextFile`] reads UTF-8 text, strips a leading BOM and yields trimmed,
//!   non-blank lines. It writes lines with the platform line ending.
//! - [`KeyValueStore`] loads entries through a codec on first access, keeps
//!   them in memory, and writes them back only when asked.
//!
//! ## Limitations
//!
//! - No locking: concurrent writers to the same file may lose updates
//! - Writes truncate the file in place (no temp file + rename)
//! - The whole file is read into memory
//!
//! ## Key Types
//!
//! - [`KeyValueStore`] - Cached entries over one file and one codec
//! - [`Codec`] - Parse/serialize pair for a text format
//! - [`TextFile`] - Line-oriented UTF-8 file access
//! - [`Config`] - Codec and store settings

pub mod codec;
mod config;
mod error;
mod store;
mod text_file;

pub use codec::{Codec, CodecKind, MarkerCodec, SeparatorCodec};
pub use config::{Config, ConfigError, MarkerConfig, SeparatorConfig};
pub use error::{Result, StorageError};
pub use store::{CacheState, DynStore, KeyValueStore, MarkerStore, SeparatorStore};
pub use text_file::{TextFile, BOM, LINE_ENDING};
