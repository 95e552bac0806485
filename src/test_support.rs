//! Fixtures shared by unit tests: a stand-in converter script.
#![cfg_attr(not(unix), allow(dead_code))]
use std::fs;
use std::path::{Path, PathBuf};

/// Write `body` to `dir/name` and mark it executable.
#[cfg(unix)]
pub fn write_executable(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// A `sh` script that imitates `soffice --headless --convert-to pdf --outdir DIR FILE`.
/// Each source path is appended to `log`; sources whose name contains
/// `broken` fail with a message on stderr.
pub fn fake_soffice_script(log: &Path) -> String {
    format!(
        r#"#!/bin/sh
outdir="$5"
src="$6"
echo "$src" >> '{log}'
case "$src" in
  *broken*)
    echo "Error: source file could not be loaded" >&2
    exit 1
    ;;
esac
name="${{src##*/}}"
echo "%PDF-1.4" > "$outdir/${{name%.*}}.pdf"
"#,
        log = log.display()
    )
}

/// Source paths the fake converter was called with, in call order.
pub fn logged_calls(log: &Path) -> Vec<PathBuf> {
    fs::read_to_string(log)
        .unwrap_or_default()
        .lines()
        .map(PathBuf::from)
        .collect()
}
