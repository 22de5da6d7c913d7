//! # Resource Loading
//!
//! Reads packaged resources by logical path, whether they are loose files
//! under a directory or compiled into the binary with `include_bytes!`.
//!
//! ## Path Resolution
//!
//! | Name | Anchor | Resolves to |
//! |------|--------|-------------|
//! | `/defaults/app.txt` | any | `defaults/app.txt` |
//! | `app.txt` | `Some("defaults")` | `defaults/app.txt` |
//! | `../shared/x.txt` | `Some("defaults/en")` | `defaults/shared/x.txt` |
//! | `app.txt` | `None` | `app.txt` |
//!
//! A resource that cannot be found is an error ([`ResourceError::NotFound`]);
//! unlike [`TextFile`](crate::storage::TextFile) there is no soft fallback.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;
use tracing::debug;

use crate::storage::LINE_ENDING;

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("Resource not found: {path}")]
    NotFound { path: String },

    #[error("Failed to read resource {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Resource is not valid UTF-8: {path}")]
    InvalidUtf8 {
        path: String,
        #[source]
        source: FromUtf8Error,
    },
}

/// Compiled-in resources as `(logical path, bytes)` pairs
pub type EmbeddedResources = &'static [(&'static str, &'static [u8])];

/// Where resources are looked up
#[derive(Debug, Clone)]
pub enum ResourceSource {
    /// Loose files below a root directory
    Directory(PathBuf),
    /// Resources compiled into the binary
    Embedded(EmbeddedResources),
}

/// Loads resources by logical path
#[derive(Debug, Clone)]
pub struct ResourceLoader {
    source: ResourceSource,
}

impl ResourceLoader {
    /// Looks resources up below `root`
    pub fn directory(root: impl Into<PathBuf>) -> Self {
        Self {
            source: ResourceSource::Directory(root.into()),
        }
    }

    /// Looks resources up in a compiled-in table
    pub fn embedded(resources: EmbeddedResources) -> Self {
        Self {
            source: ResourceSource::Embedded(resources),
        }
    }

    pub fn source(&self) -> &ResourceSource {
        &self.source
    }

    /// Resolves `name` against `anchor` into a normalized logical path
    pub fn resolve(anchor: Option<&str>, name: &str) -> String {
        let joined = match (name.strip_prefix('/'), anchor) {
            (Some(absolute), _) => absolute.to_string(),
            (None, Some(anchor)) => format!("{}/{}", anchor, name),
            (None, None) => name.to_string(),
        };

        let mut segments: Vec<&str> = Vec::new();
        for segment in joined.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    segments.pop();
                }
                other => segments.push(other),
            }
        }
        segments.join("/")
    }

    /// Returns true if the resource exists
    pub fn exists(&self, anchor: Option<&str>, name: &str) -> bool {
        let path = Self::resolve(anchor, name);
        match &self.source {
            ResourceSource::Directory(root) => root.join(&path).is_file(),
            ResourceSource::Embedded(table) => table.iter().any(|(p, _)| *p == path),
        }
    }

    /// Reads the raw bytes of a resource
    pub fn read_bytes(&self, anchor: Option<&str>, name: &str) -> Result<Vec<u8>, ResourceError> {
        let path = Self::resolve(anchor, name);
        debug!(resource = %path, "reading resource");

        match &self.source {
            ResourceSource::Directory(root) => {
                let file = root.join(&path);
                if !file.is_file() {
                    return Err(ResourceError::NotFound { path });
                }
                fs::read(&file).map_err(|source| ResourceError::Io { path, source })
            }
            ResourceSource::Embedded(table) => table
                .iter()
                .find(|(p, _)| *p == path)
                .map(|(_, bytes)| bytes.to_vec())
                .ok_or(ResourceError::NotFound { path }),
        }
    }

    /// Reads a resource as UTF-8 lines.
    ///
    /// Lines are split on `\n` with a trailing `\r` removed. They are not
    /// trimmed or filtered.
    pub fn read_lines(&self, anchor: Option<&str>, name: &str) -> Result<Vec<String>, ResourceError> {
        let bytes = self.read_bytes(anchor, name)?;
        let text = String::from_utf8(bytes).map_err(|source| ResourceError::InvalidUtf8 {
            path: Self::resolve(anchor, name),
            source,
        })?;

        Ok(text.lines().map(str::to_string).collect())
    }

    /// Reads a resource as text with lines joined by [`LINE_ENDING`]
    pub fn read_string(&self, anchor: Option<&str>, name: &str) -> Result<String, ResourceError> {
        Ok(self.read_lines(anchor, name)?.join(LINE_ENDING))
    }

    /// Reads `{stem}{suffix}` next to the anchor, e.g. the `.sql` companion
    /// of a module named `report`
    pub fn read_companion_string(
        &self,
        anchor: Option<&str>,
        stem: &str,
        suffix: &str,
    ) -> Result<String, ResourceError> {
        self.read_string(anchor, &format!("{}{}", stem, suffix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    static EMBEDDED: &[(&str, &[u8])] = &[
        ("defaults/app.txt", b"first\r\nsecond\n"),
        ("defaults/report.sql", b"select 1"),
        ("bin/blob", &[0xff, 0x00, 0x01]),
    ];

    fn loose_loader() -> (TempDir, ResourceLoader) {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("defaults")).unwrap();
        fs::write(dir.path().join("defaults/app.txt"), "first\r\nsecond\n").unwrap();
        fs::write(dir.path().join("defaults/report.sql"), "select 1").unwrap();
        let loader = ResourceLoader::directory(dir.path());
        (dir, loader)
    }

    #[test]
    fn resolve_paths() {
        assert_eq!(ResourceLoader::resolve(Some("x"), "/defaults/app.txt"), "defaults/app.txt");
        assert_eq!(ResourceLoader::resolve(Some("defaults"), "app.txt"), "defaults/app.txt");
        assert_eq!(
            ResourceLoader::resolve(Some("defaults/en"), "../shared/./x.txt"),
            "defaults/shared/x.txt"
        );
        assert_eq!(ResourceLoader::resolve(None, "app.txt"), "app.txt");
        assert_eq!(ResourceLoader::resolve(None, "../../app.txt"), "app.txt");
    }

    #[test]
    fn directory_and_embedded_behave_alike() {
        let (_dir, loose) = loose_loader();
        let packed = ResourceLoader::embedded(EMBEDDED);

        for loader in [&loose, &packed] {
            assert_eq!(
                loader.read_lines(Some("defaults"), "app.txt").unwrap(),
                vec!["first", "second"]
            );
            assert_eq!(
                loader.read_string(None, "/defaults/app.txt").unwrap(),
                format!("first{}second", LINE_ENDING)
            );
            assert_eq!(
                loader.read_companion_string(Some("defaults"), "report", ".sql").unwrap(),
                "select 1"
            );
            assert!(loader.exists(Some("defaults"), "report.sql"));
        }
    }

    #[test]
    fn missing_resource_is_an_error() {
        let (_dir, loose) = loose_loader();
        let packed = ResourceLoader::embedded(EMBEDDED);

        for loader in [&loose, &packed] {
            let err = loader.read_bytes(Some("defaults"), "missing.txt").unwrap_err();
            assert!(matches!(err, ResourceError::NotFound { .. }));
            assert!(err.to_string().contains("defaults/missing.txt"));
            assert!(!loader.exists(None, "missing.txt"));
        }
    }

    #[test]
    fn directory_is_not_a_resource() {
        let (_dir, loose) = loose_loader();

        let err = loose.read_bytes(None, "defaults").unwrap_err();
        assert!(matches!(err, ResourceError::NotFound { .. }));
    }

    #[test]
    fn bytes_are_returned_verbatim() {
        let packed = ResourceLoader::embedded(EMBEDDED);

        assert_eq!(packed.read_bytes(None, "/bin/blob").unwrap(), vec![0xff, 0x00, 0x01]);
        assert!(matches!(
            packed.read_lines(None, "bin/blob").unwrap_err(),
            ResourceError::InvalidUtf8 { .. }
        ));
    }
}
