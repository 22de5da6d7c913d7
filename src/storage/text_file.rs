//! UTF-8 text file access
//!
//! [`TextFile`] reads a file as UTF-8 text, strips a leading byte-order mark
//! and turns the content into trimmed, non-blank lines. It also writes text
//! and line lists back.
//!
//! Reading splits on `\n` only, while [`TextFile::write_lines`] terminates
//! each line with the platform line ending ([`LINE_ENDING`]). On Windows a
//! written file therefore contains `\r\n`; the trailing `\r` is removed again
//! by the per-line trim on the next read.

use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::{Result, StorageError};

/// Byte-order mark removed from the start of read text
pub const BOM: char = '\u{feff}';

/// Line terminator used by [`TextFile::write_lines`]
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";

/// Line terminator used by [`TextFile::write_lines`]
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// A UTF-8 text file at a fixed path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFile {
    path: PathBuf,
}

impl TextFile {
    /// Creates a handle for the given path (the file need not exist)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Reads the whole file as text.
    ///
    /// Returns `Ok(None)` if the file does not exist. A single U+FEFF at the
    /// very start of the text is removed.
    pub fn read_text(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&self.path).map_err(|e| StorageError::io(&self.path, e))?;
        let text = String::from_utf8(bytes).map_err(|source| StorageError::InvalidUtf8 {
            path: self.path.clone(),
            source,
        })?;

        Ok(Some(strip_bom(text)))
    }

    /// Reads the file as a list of trimmed, non-blank lines.
    ///
    /// A missing file yields an empty list. When `comment_prefix` is given
    /// and non-empty, lines starting with it are skipped as well.
    pub fn read_lines(&self, comment_prefix: Option<&str>) -> Result<Vec<String>> {
        match self.read_text()? {
            Some(text) => Ok(split_lines(&text, comment_prefix)),
            None => {
                debug!(path = %self.path.display(), "file not found, no lines");
                Ok(Vec::new())
            }
        }
    }

    /// Writes text to the file, replacing it or appending to it
    pub fn write_text(&self, text: &str, append: bool) -> Result<()> {
        self.ensure_parent()?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .append(append)
            .truncate(!append)
            .open(&self.path)
            .map_err(|e| StorageError::io(&self.path, e))?;

        file.write_all(text.as_bytes())
            .map_err(|e| StorageError::io(&self.path, e))
    }

    /// Replaces the file content with the given lines, each followed by
    /// [`LINE_ENDING`]
    pub fn write_lines<S: AsRef<str>>(&self, lines: &[S]) -> Result<()> {
        self.ensure_parent()?;

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .map_err(|e| StorageError::io(&self.path, e))?;

        let mut writer = BufWriter::new(file);
        for line in lines {
            writer
                .write_all(line.as_ref().as_bytes())
                .and_then(|_| writer.write_all(LINE_ENDING.as_bytes()))
                .map_err(|e| StorageError::io(&self.path, e))?;
        }

        writer.flush().map_err(|e| StorageError::io(&self.path, e))?;
        debug!(path = %self.path.display(), lines = lines.len(), "wrote lines");
        Ok(())
    }

    fn ensure_parent(&self) -> Result<()> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))
            }
            _ => Ok(()),
        }
    }
}

/// Removes one leading byte-order mark, if present
fn strip_bom(text: String) -> String {
    match text.strip_prefix(BOM) {
        Some(rest) => rest.to_string(),
        None => text,
    }
}

/// Trims ASCII control characters and spaces (`<= U+0020`) from both ends.
///
/// Other whitespace such as U+3000 or U+00A0 is content and is kept.
pub(crate) fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c <= ' ')
}

/// Splits text on `\n`, trims each line and drops blank and comment lines
pub(crate) fn split_lines(text: &str, comment_prefix: Option<&str>) -> Vec<String> {
    let comment_prefix = comment_prefix.filter(|p| !p.is_empty());

    text.split('\n')
        .map(trim_line)
        .filter(|line| !line.is_empty())
        .filter(|line| comment_prefix.map_or(true, |p| !line.starts_with(p)))
        .map(str::to_string)
        .collect()
}
