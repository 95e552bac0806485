use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::Result;

/// Regular files directly inside `dir` (symlinks followed, no recursion),
/// in the order the OS lists them. Entries that cannot be read are logged
/// and left out.
pub fn directory_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(e) => {
                warn!("Skipping unreadable entry in {:?}: {}", dir, e);
                continue;
            }
        };
        if path.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}
