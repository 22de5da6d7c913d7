//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use super::output::{Output, OutputFormat};
use super::{config_cmd, logging, store_cmd};
use crate::storage::{CodecKind, Config};

#[derive(Parser)]
#[command(name = "textkv")]
#[command(author, version, about = "Ordered key/value records in plain text files")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Configuration file (defaults to the global config)
    #[arg(long, short = 'c', global = true, env = "TEXTKV_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the value stored under a key
    Get {
        /// Store file
        file: PathBuf,

        /// Key to look up
        key: String,

        /// File format (defaults to the configured codec)
        #[arg(long)]
        codec: Option<CodecKind>,
    },

    /// Set a key and save the file
    Set {
        /// Store file (created if missing)
        file: PathBuf,

        /// Key to set; every entry with this key is updated
        key: String,

        /// New value
        value: String,

        /// File format (defaults to the configured codec)
        #[arg(long)]
        codec: Option<CodecKind>,
    },

    /// List all entries in file order
    List {
        /// Store file
        file: PathBuf,

        /// File format (defaults to the configured codec)
        #[arg(long)]
        codec: Option<CodecKind>,
    },

    /// Print the trimmed, non-blank lines of a file
    Lines {
        /// Text file
        file: PathBuf,

        /// Skip lines starting with this prefix
        #[arg(long)]
        comment: Option<String>,
    },

    /// Rewrite a store in another format
    Convert {
        /// Source file
        input: PathBuf,

        /// Target file (replaced)
        output: PathBuf,

        /// Format of the source file
        #[arg(long)]
        from: CodecKind,

        /// Format of the target file
        #[arg(long)]
        to: CodecKind,
    },

    /// Inspect or create configuration
    #[command(subcommand)]
    Config(config_cmd::ConfigCommands),
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let output = Output::new(cli.format);

    let config = Config::load(cli.config.as_deref())?;
    debug!(config = ?cli.config, codec = %config.default_codec, "configuration loaded");

    match cli.command {
        Commands::Get { file, key, codec } => store_cmd::get(&output, &config, &file, &key, codec)?,
        Commands::Set { file, key, value, codec } => {
            store_cmd::set(&output, &config, &file, &key, &value, codec)?
        }
        Commands::List { file, codec } => store_cmd::list(&output, &config, &file, codec)?,
        Commands::Lines { file, comment } => {
            // an explicit --comment wins over the configured prefix
            let comment = comment.or_else(|| config.comment_prefix.clone());
            store_cmd::lines(&output, &file, comment.as_deref())?
        }
        Commands::Convert { input, output: target, from, to } => {
            store_cmd::convert(&output, &config, &input, &target, from, to)?
        }
        Commands::Config(cmd) => config_cmd::run(cmd, &output, &config)?,
    }

    debug!("command completed");
    Ok(())
}
