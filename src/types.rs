//! Shared types used across doc2pdf.
//! Includes `Platform` (which candidate list to probe), the per-file `Outcome`
//! and the batch counters in `BatchReport`.
use std::path::PathBuf;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Platform {
    Windows,
    MacOs,
    Unix,
}

impl Platform {
    /// Platform of the compile target.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Unix
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Platform::Windows => "Windows",
            Platform::MacOs => "macOS",
            Platform::Unix => "Unix",
        };
        write!(f, "{}", s)
    }
}

/// What happened to a single file handed to the converter.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Outcome {
    /// The converter exited successfully; `pdf` is where it was asked to write.
    Converted { pdf: PathBuf },
    /// The extension is not in the supported set.
    Skipped,
    /// The converter could not be started or exited non-zero.
    Failed { message: String },
}

/// Counters collected while walking the inputs. Logged at debug level only.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchReport {
    pub converted: usize,
    pub skipped: usize,
    pub failed: usize,
    pub missing: usize,
}

impl BatchReport {
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Converted { .. } => self.converted += 1,
            Outcome::Skipped => self.skipped += 1,
            Outcome::Failed { .. } => self.failed += 1,
        }
    }

    pub fn attempted(&self) -> usize {
        self.converted + self.failed
    }
}
