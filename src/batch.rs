//! Batch driver: walks the user's inputs in argument order and hands every
//! candidate file to [`convert_file`]. Directories are listed one level deep.
//! Nothing here aborts the batch except a failure to write to the console.
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::core::convert::convert_file;
use crate::core::locator::Converter;
use crate::core::params::ConversionParams;
use crate::error::{Error, Result};
use crate::io::{Console, directory_files};
use crate::types::BatchReport;

/// Create `path` (and parents) and return it as an absolute path.
pub fn prepare_output_dir(path: &Path) -> Result<PathBuf> {
    let to_err = |source: std::io::Error| Error::OutputDir {
        path: path.to_path_buf(),
        source,
    };
    fs::create_dir_all(path).map_err(to_err)?;
    std::path::absolute(path).map_err(to_err)
}

/// An empty argument names the current directory.
fn absolute_input(input: &Path) -> std::io::Result<PathBuf> {
    if input.as_os_str().is_empty() {
        std::env::current_dir()
    } else {
        std::path::absolute(input)
    }
}

fn convert_one<O: Write, E: Write>(
    file: &Path,
    params: &ConversionParams,
    converter: &Converter,
    console: &mut Console<O, E>,
    report: &mut BatchReport,
) -> Result<()> {
    let outcome = convert_file(file, params.output_dir.as_deref(), params, converter, console)?;
    debug!("{:?} -> {:?}", file, outcome);
    report.record(&outcome);
    Ok(())
}

/// Convert every input in order. Missing paths and unreadable directories are
/// reported on `console.err` and skipped.
pub fn convert_inputs<O: Write, E: Write>(
    inputs: &[PathBuf],
    params: &ConversionParams,
    converter: &Converter,
    console: &mut Console<O, E>,
) -> Result<BatchReport> {
    let mut report = BatchReport::default();

    for input in inputs {
        let abs_path = match absolute_input(input) {
            Ok(path) => path,
            Err(e) => {
                warn!("Could not resolve {:?}: {}", input, e);
                writeln!(console.err, "Error: Path not found '{}': {}", input.display(), e)?;
                report.missing += 1;
                continue;
            }
        };

        if !abs_path.exists() {
            writeln!(console.err, "Error: Path not found '{}'", abs_path.display())?;
            report.missing += 1;
            continue;
        }

        if abs_path.is_dir() {
            writeln!(console.out, "\nProcessing directory: {}", abs_path.display())?;
            let files = match directory_files(&abs_path) {
                Ok(files) => files,
                Err(e) => {
                    warn!("Listing {:?} failed: {}", abs_path, e);
                    writeln!(
                        console.err,
                        "Error reading directory '{}': {}",
                        abs_path.display(),
                        e
                    )?;
                    continue;
                }
            };
            info!("{} file(s) in {:?}", files.len(), abs_path);
            for file in &files {
                convert_one(file, params, converter, console, &mut report)?;
            }
        } else if abs_path.is_file() {
            writeln!(console.out, "\nProcessing file: {}", abs_path.display())?;
            convert_one(&abs_path, params, converter, console, &mut report)?;
        } else {
            debug!("Ignoring {:?}: neither file nor directory", abs_path);
        }
    }

    debug!("Batch finished: {:?}", report);
    Ok(report)
}
