//! Finding the LibreOffice executable.
//!
//! Each platform has an ordered candidate list; the first candidate that
//! resolves to an executable wins. Absence is reported as `None` and the
//! caller decides what to do about it.
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::types::Platform;

const WINDOWS_CANDIDATES: &[&str] = &[
    r"C:\Program Files\LibreOffice\program\soffice.exe",
    r"C:\Program Files (x86)\LibreOffice\program\soffice.exe",
    "soffice.exe",
    "soffice",
];

const MACOS_CANDIDATES: &[&str] = &["/Applications/LibreOffice.app/Contents/MacOS/soffice", "soffice"];

const UNIX_CANDIDATES: &[&str] = &["soffice", "libreoffice"];

/// Candidate commands for `platform`, in probe order.
pub fn candidates(platform: Platform) -> &'static [&'static str] {
    match platform {
        Platform::Windows => WINDOWS_CANDIDATES,
        Platform::MacOs => MACOS_CANDIDATES,
        Platform::Unix => UNIX_CANDIDATES,
    }
}

/// A resolved converter: the command as the user knows it plus the
/// executable it resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Converter {
    command: String,
    program: PathBuf,
}

impl Converter {
    pub fn new(command: impl Into<String>, program: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
            program: program.into(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// `<program> --headless --convert-to pdf --outdir <outdir> <file>`
    pub fn pdf_command(&self, outdir: &Path, file: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("--headless")
            .arg("--convert-to")
            .arg("pdf")
            .arg("--outdir")
            .arg(outdir)
            .arg(file);
        cmd
    }
}

fn probe(command: &str, path_var: Option<&OsStr>, cwd: &Path) -> Option<Converter> {
    match which::which_in(command, path_var, cwd) {
        Ok(program) => {
            debug!("Converter candidate {:?} resolved to {:?}", command, program);
            Some(Converter::new(command, program))
        }
        Err(e) => {
            debug!("Converter candidate {:?} not usable: {}", command, e);
            None
        }
    }
}

fn process_search_path() -> (Option<OsString>, PathBuf) {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    (std::env::var_os("PATH"), cwd)
}

/// Probe the current platform's candidates against the process `PATH`.
pub fn find_converter() -> Option<Converter> {
    let (path_var, cwd) = process_search_path();
    find_converter_in(Platform::current(), path_var, cwd)
}

/// Probe `platform`'s candidates against an explicit search path.
pub fn find_converter_in(
    platform: Platform,
    path_var: Option<OsString>,
    cwd: impl AsRef<Path>,
) -> Option<Converter> {
    debug!("Probing {} converter candidates", platform);
    candidates(platform)
        .iter()
        .find_map(|cmd| probe(cmd, path_var.as_deref(), cwd.as_ref()))
}

/// Resolve a user-supplied converter command. There is no fallback to the
/// platform candidates when it does not resolve.
pub fn resolve_override(
    command: &str,
    path_var: Option<OsString>,
    cwd: impl AsRef<Path>,
) -> Option<Converter> {
    probe(command, path_var.as_deref(), cwd.as_ref())
}

/// [`resolve_override`] against the process `PATH`.
pub fn resolve_override_from_env(command: &str) -> Option<Converter> {
    let (path_var, cwd) = process_search_path();
    resolve_override(command, path_var, cwd)
}
