//! Configuration commands

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Subcommand;

use super::output::Output;
use crate::storage::Config;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,

    /// Print the global configuration file location
    Path,

    /// Write a default configuration file
    Init {
        /// Target file (defaults to the global config location)
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn run(cmd: ConfigCommands, output: &Output, config: &Config) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show(output, config),
        ConfigCommands::Path => path(output),
        ConfigCommands::Init { path, force } => init(output, path.as_deref(), force),
    }
}

fn show(output: &Output, config: &Config) -> Result<()> {
    if output.is_json() {
        output.data(config);
    } else {
        print!("{}", config.to_toml()?);
    }
    Ok(())
}

fn path(output: &Output) -> Result<()> {
    let path = Config::global_config_path()
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
        }));
    } else {
        output.line(&path.display().to_string());
    }
    Ok(())
}

fn init(output: &Output, path: Option<&Path>, force: bool) -> Result<()> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => Config::global_config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?,
    };

    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save(&path)?;
    output.success(&format!("Wrote default config to {}", path.display()));
    Ok(())
}
