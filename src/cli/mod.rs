//! # Command-Line Interface
//!
//! User-facing commands over key/value text files.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `get <file> <key>` | Print the first value stored under a key |
//! | `set <file> <key> <value>` | Update or append a key and save |
//! | `list <file>` | Print all entries in file order |
//! | `lines <file>` | Print trimmed, non-blank, non-comment lines |
//! | `convert <in> <out> --from --to` | Rewrite a store in another format |
//! | `config show/path/init` | Inspect or create configuration |
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Logging
//!
//! Logs go to stderr. Use `--verbose` (or `-v`) for debug output, or set
//! `RUST_LOG`:
//! ```bash
//! textkv --verbose list settings.properties
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod config_cmd;
mod logging;
mod output;
mod store_cmd;

pub use app::{Cli, Commands, run};
pub use output::{Output, OutputFormat};
