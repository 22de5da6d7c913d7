//! Cached key/value store over a text file
//!
//! A [`KeyValueStore`] binds one file to one [`Codec`]. Entries are read the
//! first time they are needed and then kept in memory for the lifetime of the
//! store; later changes to the file are not seen. Changes made with
//! [`KeyValueStore::set`] only reach the disk on [`KeyValueStore::write`].

use std::path::{Path, PathBuf};

use tracing::debug;

use super::codec::{Codec, MarkerCodec, SeparatorCodec};
use super::error::Result;
use super::text_file::TextFile;
use crate::domain::Entry;

/// In-memory state of a store: unloaded until the file is first read,
/// then the parsed entries plus later `set` calls
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheState {
    entries: Option<Vec<Entry>>,
}

impl CacheState {
    /// Returns true once entries have been loaded
    pub fn is_loaded(&self) -> bool {
        self.entries.is_some()
    }

    /// Returns the loaded entries, or `None` before the first load
    pub fn entries(&self) -> Option<&[Entry]> {
        self.entries.as_deref()
    }

    /// Returns the loaded entries, running `load` first if needed.
    ///
    /// A failed load leaves the state unloaded.
    fn get_or_load(
        &mut self,
        load: impl FnOnce() -> Result<Vec<Entry>>,
    ) -> Result<&mut Vec<Entry>> {
        let entries = match self.entries.take() {
            Some(entries) => entries,
            None => load()?,
        };
        Ok(self.entries.insert(entries))
    }

    fn into_entries(self) -> Vec<Entry> {
        self.entries.unwrap_or_default()
    }
}

/// Ordered key/value entries backed by a text file
#[derive(Debug)]
pub struct KeyValueStore<C: Codec> {
    file: TextFile,
    codec: C,
    comment_prefix: Option<String>,
    cache: CacheState,
}

/// Store using the marker format
pub type MarkerStore = KeyValueStore<MarkerCodec>;

/// Store using the separator format
pub type SeparatorStore = KeyValueStore<SeparatorCodec>;

/// Store with a codec chosen at runtime
pub type DynStore = KeyValueStore<Box<dyn Codec>>;

impl MarkerStore {
    /// Creates a marker-format store with default codec settings
    pub fn marker(path: impl Into<PathBuf>) -> Self {
        Self::new(path, MarkerCodec::default())
    }
}

impl SeparatorStore {
    /// Creates a separator-format store with default codec settings
    pub fn separator(path: impl Into<PathBuf>) -> Self {
        Self::new(path, SeparatorCodec::default())
    }
}

impl<C: Codec> KeyValueStore<C> {
    /// Creates a store for the given file and codec. Nothing is read yet.
    pub fn new(path: impl Into<PathBuf>, codec: C) -> Self {
        let file = TextFile::new(path);
        debug!(path = %file.path().display(), codec = codec.name(), "opened store");
        Self {
            file,
            codec,
            comment_prefix: None,
            cache: CacheState::default(),
        }
    }

    /// Skips lines starting with `prefix` when the file is loaded
    pub fn with_comment_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.comment_prefix = Some(prefix.into());
        self
    }

    /// Returns the path to the backing file
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Returns true once the file has been read
    pub fn is_loaded(&self) -> bool {
        self.cache.is_loaded()
    }

    /// Returns the value of the first entry with the given key
    pub fn get(&mut self, key: &str) -> Result<Option<&str>> {
        let entries = self.load()?;
        Ok(entries
            .iter()
            .find(|entry| entry.has_key(key))
            .map(|entry| entry.value.as_str()))
    }

    /// Sets the value of every entry with the given key, or appends a new
    /// entry at the end if there is none
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        let entries = self.load_mut()?;

        let mut found = false;
        for entry in entries.iter_mut().filter(|entry| entry.has_key(key)) {
            entry.set_value(value.as_str());
            found = true;
        }

        if !found {
            entries.push(Entry::new(key, value));
        }
        Ok(())
    }

    /// Writes the cached entries to the file.
    ///
    /// The cache is written as it is in memory; the file is not re-read. A
    /// store that was never read loads the file first, so writing it
    /// untouched keeps the existing entries.
    pub fn write(&mut self) -> Result<()> {
        self.load()?;

        let entries = self.cached();
        let lines = self.codec.serialize(entries);
        debug!(
            path = %self.file.path().display(),
            entries = entries.len(),
            "writing store"
        );
        self.file.write_lines(&lines)
    }

    /// Returns all entries in file order
    pub fn entries(&mut self) -> Result<&[Entry]> {
        Ok(self.load()?)
    }

    /// Returns the number of entries, including duplicates
    pub fn len(&mut self) -> Result<usize> {
        Ok(self.load()?.len())
    }

    pub fn is_empty(&mut self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Consumes the store and returns its entries
    pub fn into_entries(mut self) -> Result<Vec<Entry>> {
        self.load()?;
        Ok(self.cache.into_entries())
    }

    fn load(&mut self) -> Result<&[Entry]> {
        let entries = self.load_mut()?;
        Ok(entries.as_slice())
    }

    fn cached(&self) -> &[Entry] {
        self.cache.entries().unwrap_or_default()
    }

    fn load_mut(&mut self) -> Result<&mut Vec<Entry>> {
        let file = &self.file;
        let codec = &self.codec;
        let comment_prefix = self.comment_prefix.as_deref();

        self.cache.get_or_load(|| {
            let lines = file.read_lines(comment_prefix)?;
            let entries = codec.parse(&lines);
            debug!(
                path = %file.path().display(),
                lines = lines.len(),
                entries = entries.len(),
                "loaded store"
            );
            Ok(entries)
        })
    }
}
