use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Extensions handed to the converter when nothing else is configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &["doc", "docx"];

/// Conversion parameters shared by every file in a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionParams {
    /// Directory for all PDFs; None means next to each source file
    pub output_dir: Option<PathBuf>,
    /// Supported extensions without the leading dot, matched case-sensitively
    pub extensions: Vec<String>,
}

impl Default for ConversionParams {
    fn default() -> Self {
        Self {
            output_dir: None,
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl ConversionParams {
    /// Replace the supported extensions. An empty list keeps the defaults.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions: Vec<String> = extensions
            .into_iter()
            .map(|e| e.as_ref().trim_start_matches('.').to_string())
            .filter(|e| !e.is_empty())
            .collect();
        if !extensions.is_empty() {
            self.extensions = extensions;
        }
        self
    }

    pub fn with_output_dir(mut self, output_dir: Option<PathBuf>) -> Self {
        self.output_dir = output_dir;
        self
    }

    /// True if the text after the file name's last `.` is a supported
    /// extension. A bare dotfile such as `.docx` counts.
    pub fn is_supported(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| n.rsplit_once('.'))
            .is_some_and(|(_, ext)| self.extensions.iter().any(|s| s == ext))
    }
}

/// On-disk configuration (`--config FILE`, JSON). Every field is optional;
/// command-line flags take precedence over anything set here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub output_dir: Option<PathBuf>,
    pub converter: Option<String>,
    pub extensions: Vec<String>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(text: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
