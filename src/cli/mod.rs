//! Command Line Interface (CLI) layer for doc2pdf.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`): locate the converter, prepare
//! the output directory, then hand the inputs to `doc2pdf::batch`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
