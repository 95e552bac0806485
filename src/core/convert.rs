//! Single-file conversion: extension check, one synchronous converter run,
//! and the per-file messages on the console.
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use tracing::{debug, warn};

use crate::core::locator::Converter;
use crate::core::params::ConversionParams;
use crate::error::Result;
use crate::io::Console;
use crate::types::Outcome;

fn display_name(file: &Path) -> String {
    file.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.display().to_string())
}

fn target_dir(file: &Path, output_dir: Option<&Path>) -> PathBuf {
    match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => match file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        },
    }
}

/// Convert `file` to PDF in `output_dir` (or beside the source when `None`).
///
/// Skips files whose extension is not in `params.extensions`. A converter that
/// cannot be started or exits non-zero yields [`Outcome::Failed`] after its
/// stderr is echoed; only console write failures are returned as `Err`.
pub fn convert_file<O: Write, E: Write>(
    file: &Path,
    output_dir: Option<&Path>,
    params: &ConversionParams,
    converter: &Converter,
    console: &mut Console<O, E>,
) -> Result<Outcome> {
    let name = display_name(file);

    if !params.is_supported(file) {
        writeln!(console.err, "Skipping non-document file: {}", name)?;
        return Ok(Outcome::Skipped);
    }

    let outdir = target_dir(file, output_dir);

    writeln!(console.out, "Converting: {}...", name)?;
    console.out.flush()?;

    let mut cmd = converter.pdf_command(&outdir, file);
    debug!("Running {:?}", cmd);

    let outcome = match cmd.stdout(Stdio::null()).stderr(Stdio::piped()).output() {
        Ok(output) if output.status.success() => Outcome::Converted {
            pdf: outdir.join(file.file_name().unwrap_or_default()).with_extension("pdf"),
        },
        Ok(output) => {
            warn!("Converter exited with {} for {:?}", output.status, file);
            Outcome::Failed {
                message: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
            }
        }
        Err(e) => {
            warn!("Could not start {:?}: {}", converter.program(), e);
            Outcome::Failed {
                message: format!("could not run {}: {}", converter.program().display(), e),
            }
        }
    };

    if let Outcome::Failed { message } = &outcome {
        writeln!(console.err, "Error converting {}: {}", file.display(), message)?;
    }

    Ok(outcome)
}
