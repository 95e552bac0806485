//! doc2pdf CLI entrypoint.
//!
//! Parses arguments, runs the batch through the `cli` module and maps fatal
//! errors to exit status 1. Per-file failures do not change the exit status.

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
