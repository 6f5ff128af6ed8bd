//! Segmenter configuration

use std::path::PathBuf;

use crate::policy::Mode;
use crate::separator::Separator;
use crate::source::{ExceptionSource, LexiconSource};
use crate::Result;

/// Default configuration constants
pub mod defaults {
    /// Keep single-character prefixes
    pub const USE_UNICHAR: bool = true;

    /// Plain space between morphemes
    pub const SEPARATOR: &str = "";
}

/// Segmenter configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) lexicon: LexiconSource,
    pub(crate) exceptions: ExceptionSource,
    pub(crate) use_unichar: bool,
    pub(crate) separator: Separator,
    pub(crate) mode: Mode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lexicon: LexiconSource::default(),
            exceptions: ExceptionSource::default(),
            use_unichar: defaults::USE_UNICHAR,
            separator: Separator::default(),
            mode: Mode::default(),
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub fn lexicon(&self) -> &LexiconSource {
        &self.lexicon
    }

    pub fn exceptions(&self) -> &ExceptionSource {
        &self.exceptions
    }

    pub fn use_unichar(&self) -> bool {
        self.use_unichar
    }

    pub fn separator(&self) -> &Separator {
        &self.separator
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    lexicon: Option<LexiconSource>,
    exceptions: Option<ExceptionSource>,
    use_unichar: Option<bool>,
    separator: Option<String>,
    mode: Option<Mode>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the lexicon from a file
    pub fn lexicon_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.lexicon = Some(LexiconSource::File(path.into()));
        self
    }

    /// Use lexicon text held in memory
    pub fn lexicon_text(mut self, text: impl Into<String>) -> Self {
        self.lexicon = Some(LexiconSource::Text(text.into()));
        self
    }

    pub fn lexicon(mut self, source: LexiconSource) -> Self {
        self.lexicon = Some(source);
        self
    }

    /// Read the exception list from a file
    pub fn exceptions_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.exceptions = Some(ExceptionSource::File(path.into()));
        self
    }

    /// Use an explicit exception list
    pub fn exception_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exceptions = Some(ExceptionSource::Words(
            words.into_iter().map(Into::into).collect(),
        ));
        self
    }

    pub fn exceptions(mut self, source: ExceptionSource) -> Self {
        self.exceptions = Some(source);
        self
    }

    /// Keep or drop single-character prefixes
    pub fn use_unichar(mut self, enabled: bool) -> Self {
        self.use_unichar = Some(enabled);
        self
    }

    /// Set the morpheme separator (validated in `build`)
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(lexicon) = self.lexicon {
            config.lexicon = lexicon;
        }

        if let Some(exceptions) = self.exceptions {
            config.exceptions = exceptions;
        }

        if let Some(use_unichar) = self.use_unichar {
            config.use_unichar = use_unichar;
        }

        if let Some(separator) = self.separator {
            config.separator = Separator::new(&separator)?;
        }

        if let Some(mode) = self.mode {
            config.mode = mode;
        }

        Ok(config)
    }
}
