//! Key/value store commands

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use super::output::Output;
use crate::storage::{CodecKind, Config, TextFile};

/// Prints the value of the first entry with `key`
pub fn get(output: &Output, config: &Config, file: &Path, key: &str, codec: Option<CodecKind>) -> Result<()> {
    let mut store = config.build_store(file, codec);

    let value = store
        .get(key)
        .with_context(|| format!("Failed to read store: {}", file.display()))?
        .ok_or_else(|| anyhow::anyhow!("Key not found: {}", key))?;

    if output.is_json() {
        output.data(&serde_json::json!({ "key": key, "value": value }));
    } else {
        output.line(value);
    }

    Ok(())
}

/// Sets `key` to `value` and writes the file
pub fn set(
    output: &Output,
    config: &Config,
    file: &Path,
    key: &str,
    value: &str,
    codec: Option<CodecKind>,
) -> Result<()> {
    let mut store = config.build_store(file, codec);

    store
        .set(key, value)
        .with_context(|| format!("Failed to read store: {}", file.display()))?;
    store
        .write()
        .with_context(|| format!("Failed to write store: {}", file.display()))?;

    output.success(&format!("Set {} in {}", key, file.display()));
    Ok(())
}

/// Prints all entries in file order
pub fn list(output: &Output, config: &Config, file: &Path, codec: Option<CodecKind>) -> Result<()> {
    let store = config.build_store(file, codec);
    let entries = store
        .into_entries()
        .with_context(|| format!("Failed to read store: {}", file.display()))?;

    if output.is_json() {
        output.data(&entries);
    } else {
        for entry in &entries {
            output.row(&[entry.key.as_str(), entry.value.as_str()]);
        }
    }

    Ok(())
}

/// Prints the filtered lines of a file
pub fn lines(output: &Output, file: &Path, comment: Option<&str>) -> Result<()> {
    let lines = TextFile::new(file)
        .read_lines(comment)
        .with_context(|| format!("Failed to read file: {}", file.display()))?;

    if output.is_json() {
        output.data(&lines);
    } else {
        for line in &lines {
            output.line(line);
        }
    }

    Ok(())
}

/// Rewrites `input` in another format as `target`.
///
/// The target file is replaced, not merged.
pub fn convert(
    output: &Output,
    config: &Config,
    input: &Path,
    target: &Path,
    from: CodecKind,
    to: CodecKind,
) -> Result<()> {
    let entries = config
        .build_store(input, Some(from))
        .into_entries()
        .with_context(|| format!("Failed to read store: {}", input.display()))?;

    let lines = config.codec(to).serialize(&entries);
    debug!(from = %from, to = %to, entries = entries.len(), "converting store");

    TextFile::new(target)
        .write_lines(&lines)
        .with_context(|| format!("Failed to write store: {}", target.display()))?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "input": input.display().to_string(),
            "output": target.display().to_string(),
            "from": from.as_str(),
            "to": to.as_str(),
            "entries": entries.len(),
        }));
    } else {
        output.success(&format!(
            "Converted {} entries from {} to {} ({})",
            entries.len(),
            from,
            to,
            target.display()
        ));
    }

    Ok(())
}
