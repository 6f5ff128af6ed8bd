//! File reading utilities

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Suffix appended to an input path for its segmented copy
pub const SPLITTED_SUFFIX: &str = ".splitted";

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Sibling output path: `corpus.txt` -> `corpus.txt.splitted`
    pub fn splitted_path(path: &Path) -> PathBuf {
        let mut name = OsString::from(path.as_os_str());
        name.push(SPLITTED_SUFFIX);
        PathBuf::from(name)
    }
}
