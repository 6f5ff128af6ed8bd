//! Configuration file support

use anyhow::{Context, Result};
use pretok_core::Mode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Segmentation configuration
    #[serde(default)]
    pub segmentation: SegmentationConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

impl CliConfig {
    /// Load a TOML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}

/// Segmentation-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SegmentationConfig {
    /// `classic` or `improved`
    pub mode: Mode,

    /// Marker appended to split-off morphemes (empty = plain spaces)
    pub separator: String,

    /// Keep single-character prefixes
    pub use_unichar: bool,

    /// Lexicon file (bundled lexicon when absent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lexicon: Option<PathBuf>,

    /// Exception list file (bundled list when absent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exceptions: Option<PathBuf>,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            separator: String::new(),
            use_unichar: true,
            lexicon: None,
            exceptions: None,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Files with at least this many lines are processed in parallel (0 = never)
    pub parallel_threshold_lines: usize,

    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            parallel_threshold_lines: 10_000,
            worker_threads: 0,
        }
    }
}
