//! When not to split: segmentation mode and the exception list

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::Error;

const BUNDLED_EXCEPTIONS: &str = include_str!("../resources/exceptions.txt");

/// Shortest stem the improved mode leaves behind a split prefix
pub const MIN_RESIDUAL_CHARS: usize = 2;

/// Segmentation policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Split every token whose longest matching prefix is known
    Classic,
    /// Like classic, but never split exception words and never leave a stem
    /// shorter than [`MIN_RESIDUAL_CHARS`]
    #[default]
    Improved,
}

impl Mode {
    /// Whether a token may be split at all
    pub fn permits(&self, token: &str, exceptions: &ExceptionSet) -> bool {
        match self {
            Mode::Classic => true,
            Mode::Improved => !exceptions.contains(token),
        }
    }

    /// Whether the stem left after the prefix is long enough
    pub fn accepts_residual(&self, residual: &str) -> bool {
        match self {
            Mode::Classic => true,
            Mode::Improved => residual.chars().count() >= MIN_RESIDUAL_CHARS,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Classic => "classic",
            Mode::Improved => "improved",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "classic" => Ok(Mode::Classic),
            "improved" => Ok(Mode::Improved),
            other => Err(Error::InvalidConfiguration(format!(
                "unknown mode '{other}', expected 'classic' or 'improved'"
            ))),
        }
    }
}

/// Whole words that are never split in improved mode
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExceptionSet {
    words: HashSet<String>,
}

impl ExceptionSet {
    /// Closed-class words shipped with the crate
    pub fn bundled() -> Self {
        Self::parse(BUNDLED_EXCEPTIONS)
    }

    /// Parse a word list: one word per line, `#` comments and blanks ignored
    pub fn parse(text: &str) -> Self {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ExceptionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}
