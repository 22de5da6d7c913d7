//! textkv - ordered key/value records in plain text files

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = textkv::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
