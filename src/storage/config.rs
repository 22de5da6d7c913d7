//! Configuration handling for textkv
//!
//! Configuration is read from an explicit file (`--config`) or from the
//! global `config.toml` in the user config directory (for example
//! `~/.config/textkv/config.toml`). Every field has a default, so an empty
//! or missing file is valid.
//!
//! ```toml
//! default_codec = "marker"
//! comment_prefix = "#"
//!
//! [marker]
//! mark = "■"
//! drop_empty_bodies = true
//!
//! [separator]
//! separator = "="
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::codec::{Codec, CodecKind, MarkerCodec, SeparatorCodec, DEFAULT_MARK, DEFAULT_SEPARATOR};
use super::store::{DynStore, KeyValueStore};
use super::text_file::TextFile;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
}

/// Settings for the marker format
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MarkerConfig {
    /// Prefix that starts a record
    pub mark: String,

    /// Drop records without value lines instead of keeping them empty
    pub drop_empty_bodies: bool,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            mark: DEFAULT_MARK.to_string(),
            drop_empty_bodies: true,
        }
    }
}

/// Settings for the separator format
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SeparatorConfig {
    /// Text between key and value
    pub separator: String,
}

impl Default for SeparatorConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

/// Store configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Codec used when a command does not name one
    pub default_codec: CodecKind,

    /// Lines starting with this prefix are ignored when loading a store
    pub comment_prefix: Option<String>,

    pub marker: MarkerConfig,

    pub separator: SeparatorConfig,
}

impl Config {
    /// Loads configuration from `path`, or from the global location when
    /// `path` is `None`
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()).into());
                }
                Self::from_file(path)
            }
            None => Self::load_global(),
        }
    }

    /// Returns the global config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "textkv", "textkv").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        Self::global_config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Loads global configuration, falling back to defaults
    fn load_global() -> Result<Self> {
        let config_path = match Self::global_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(Self::default()),
        };

        Self::from_file(&config_path)
    }

    /// Reads and validates a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = TextFile::new(path)
            .read_text()
            .with_context(|| format!("Failed to read config: {}", path.display()))?
            .unwrap_or_default();

        Self::parse(&content).with_context(|| format!("Failed to load config: {}", path.display()))
    }

    /// Parses and validates configuration from TOML text
    pub fn parse(content: &str) -> std::result::Result<Self, ConfigError> {
        let config: Config =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that the codecs cannot work with
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.marker.mark.is_empty() {
            return Err(ConfigError::Invalid("marker.mark must not be empty".to_string()));
        }
        if self.separator.separator.is_empty() {
            return Err(ConfigError::Invalid(
                "separator.separator must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Renders the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Saves the configuration to `path`
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_toml()?;
        TextFile::new(path)
            .write_text(&content, false)
            .with_context(|| format!("Failed to write config: {}", path.display()))
    }

    /// Builds the marker codec described by this configuration
    pub fn marker_codec(&self) -> MarkerCodec {
        MarkerCodec::default()
            .with_mark(self.marker.mark.as_str())
            .drop_empty_bodies(self.marker.drop_empty_bodies)
    }

    /// Builds the separator codec described by this configuration
    pub fn separator_codec(&self) -> SeparatorCodec {
        SeparatorCodec::default().with_separator(self.separator.separator.as_str())
    }

    /// Builds a codec of the given kind
    pub fn codec(&self, kind: CodecKind) -> Box<dyn Codec> {
        match kind {
            CodecKind::Marker => Box::new(self.marker_codec()),
            CodecKind::Separator => Box::new(self.separator_codec()),
        }
    }

    /// Builds a store for `path`, using `kind` or the default codec
    pub fn build_store(&self, path: impl Into<PathBuf>, kind: Option<CodecKind>) -> DynStore {
        let store = KeyValueStore::new(path, self.codec(kind.unwrap_or(self.default_codec)));
        match &self.comment_prefix {
            Some(prefix) => store.with_comment_prefix(prefix.as_str()),
            None => store,
        }
    }
}
