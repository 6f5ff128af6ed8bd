//! Error types for segmenter construction

use std::path::PathBuf;
use thiserror::Error;

/// Error type for building a [`Segmenter`](crate::Segmenter)
#[derive(Debug, Error)]
pub enum Error {
    /// Rejected configuration value (currently only the separator)
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A lexicon or exception file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A lexicon or exception file is not UTF-8 text
    #[error("Invalid UTF-8 encoding in {}", .path.display())]
    InvalidUtf8 { path: PathBuf },
}

/// Result type for segmenter operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_configuration_display() {
        let error = Error::InvalidConfiguration("separator '123' is purely numeric".into());
        assert_eq!(
            error.to_string(),
            "Invalid configuration: separator '123' is purely numeric"
        );
    }

    #[test]
    fn test_io_error_display_and_source() {
        let error = Error::Io {
            path: PathBuf::from("rules/lexicon.utf8"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };

        assert!(error.to_string().starts_with("Failed to read rules/lexicon.utf8"));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_invalid_utf8_display() {
        let error = Error::InvalidUtf8 {
            path: PathBuf::from("broken.txt"),
        };
        assert_eq!(error.to_string(), "Invalid UTF-8 encoding in broken.txt");
    }
}
