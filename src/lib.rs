//! textkv - ordered key/value records in plain UTF-8 text files
//!
//! Records are kept in one of two text layouts: a marker format where a
//! `■key` line starts a multi-line value, and a separator format with one
//! `key=value` per line. A [`KeyValueStore`] reads the file on first use,
//! serves `get`/`set` from memory and writes back on request.
//!
//! ```no_run
//! use textkv::SeparatorStore;
//!
//! # fn main() -> textkv::storage::Result<()> {
//! let mut store = SeparatorStore::separator("settings.properties");
//! store.set("theme", "dark")?;
//! assert_eq!(store.get("theme")?, Some("dark"));
//! store.write()?;
//! # Ok(())
//! # }
//! ```

pub mod domain;
pub mod storage;
pub mod resource;
pub mod cli;

pub use domain::Entry;
pub use resource::{ResourceError, ResourceLoader};
pub use storage::{
    Codec, KeyValueStore, MarkerCodec, MarkerStore, SeparatorCodec, SeparatorStore, StorageError,
    TextFile,
};
