//! Output formatting module

use anyhow::Result;
use std::path::Path;

/// Trait for output formatters
pub trait OutputFormatter: Send {
    /// Format and output one segmented line
    fn format_line(&mut self, source: &Path, line_number: usize, text: &str) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
