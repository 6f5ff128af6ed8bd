//! Where lexicons and exception lists come from

use std::path::{Path, PathBuf};

use crate::lexicon::RuleSet;
use crate::policy::ExceptionSet;
use crate::{Error, Result};

/// Location of the prefix lexicon
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LexiconSource {
    /// Lexicon shipped with the crate
    #[default]
    Bundled,
    /// Lexicon file on disk
    File(PathBuf),
    /// Lexicon text already in memory
    Text(String),
}

impl LexiconSource {
    /// Compile the lexicon into a rule set
    pub fn compile(&self, use_unichar: bool) -> Result<RuleSet> {
        match self {
            LexiconSource::Bundled => Ok(RuleSet::bundled(use_unichar)),
            LexiconSource::File(path) => Ok(RuleSet::compile(&read_utf8(path)?, use_unichar)),
            LexiconSource::Text(text) => Ok(RuleSet::compile(text, use_unichar)),
        }
    }

    /// Short description for logs and reports
    pub fn display_name(&self) -> String {
        match self {
            LexiconSource::Bundled => "bundled".to_string(),
            LexiconSource::File(path) => path.display().to_string(),
            LexiconSource::Text(text) => format!("inline ({} bytes)", text.len()),
        }
    }
}

/// Location of the exception word list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ExceptionSource {
    /// Word list shipped with the crate
    #[default]
    Bundled,
    /// Word list file on disk
    File(PathBuf),
    /// Explicit words
    Words(Vec<String>),
    /// No exceptions
    Empty,
}

impl ExceptionSource {
    pub fn load(&self) -> Result<ExceptionSet> {
        match self {
            ExceptionSource::Bundled => Ok(ExceptionSet::bundled()),
            ExceptionSource::File(path) => Ok(ExceptionSet::parse(&read_utf8(path)?)),
            ExceptionSource::Words(words) => Ok(words.iter().map(String::as_str).collect()),
            ExceptionSource::Empty => Ok(ExceptionSet::default()),
        }
    }
}

/// Read a whole file as UTF-8 text
pub(crate) fn read_utf8(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    String::from_utf8(bytes).map_err(|_| Error::InvalidUtf8 {
        path: path.to_path_buf(),
    })
}
