//! Storage error types

use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Errors raised by file-backed storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file content is not valid UTF-8
    #[error("File is not valid UTF-8: {}", path.display())]
    InvalidUtf8 {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },
}

impl StorageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns the path of the file the error refers to
    pub fn path(&self) -> &std::path::Path {
        match self {
            StorageError::Io { path, .. } | StorageError::InvalidUtf8 { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, StorageError>;
