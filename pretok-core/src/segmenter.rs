//! Prefix segmentation of whitespace-delimited tokens

use std::borrow::Cow;
use std::path::Path;

use crate::config::Config;
use crate::lexicon::{RuleSet, BOUNDARY_MARKER};
use crate::policy::{ExceptionSet, Mode};
use crate::separator::Separator;
use crate::Result;

/// Splits Hebrew words into prefix morphemes and a residual stem
///
/// Immutable after construction; share it freely across threads.
///
/// ```rust
/// use pretok_core::{Config, Mode, Segmenter};
///
/// let config = Config::builder().mode(Mode::Classic).build().unwrap();
/// let segmenter = Segmenter::with_config(config).unwrap();
///
/// assert_eq!(segmenter.segment_line("אבא הלך לעבודה."), "אבא ה לך ל עבודה.");
/// ```
#[derive(Debug, Clone)]
pub struct Segmenter {
    rules: RuleSet,
    exceptions: ExceptionSet,
    config: Config,
}

impl Segmenter {
    /// Segmenter over the bundled lexicon with default settings
    pub fn new() -> Self {
        let config = Config::default();
        Self {
            rules: RuleSet::bundled(config.use_unichar),
            exceptions: ExceptionSet::bundled(),
            config,
        }
    }

    /// Load the lexicon and exception list named by the configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let rules = config.lexicon.compile(config.use_unichar)?;
        let exceptions = config.exceptions.load()?;
        config.separator.check_against(&rules)?;

        log::debug!(
            "Segmenter ready: lexicon={}, rules={}, exceptions={}, mode={}, separator={:?}",
            config.lexicon.display_name(),
            rules.len(),
            exceptions.len(),
            config.mode,
            config.separator.as_str()
        );

        Ok(Self {
            rules,
            exceptions,
            config,
        })
    }

    /// Segmenter over a lexicon file with the bundled exception list
    pub fn from_path(
        lexicon: impl AsRef<Path>,
        use_unichar: bool,
        separator: &str,
        mode: Mode,
    ) -> Result<Self> {
        let config = Config::builder()
            .lexicon_path(lexicon.as_ref())
            .use_unichar(use_unichar)
            .separator(separator)
            .mode(mode)
            .build()?;
        Self::with_config(config)
    }

    /// Longest known prefix that literally starts `token`
    pub fn longest_prefix(&self, token: &str) -> Option<&str> {
        self.rules.longest_prefix(token)
    }

    /// Break `word` by `pattern`, returning the pieces with a leading space.
    ///
    /// The stem is whatever follows the pattern's concatenated morphemes at
    /// the start of `word`; each morpheme is followed by the separator. A
    /// word that does not start with those morphemes comes back whole.
    pub fn break_word(&self, word: &str, pattern: &str) -> String {
        let mut out = String::with_capacity(word.len() + pattern.len() * 2);
        match stem_after(word, pattern) {
            Some(stem) => self.write_pieces(&mut out, pattern, stem),
            None => {
                out.push(' ');
                out.push_str(word);
            }
        }
        out
    }

    /// Segment a single token
    pub fn segment<'t>(&self, token: &'t str) -> Cow<'t, str> {
        match self.split_point(token) {
            Some((stem, pattern)) => {
                let mut out = String::with_capacity(token.len() + pattern.len() * 2);
                self.write_pieces(&mut out, pattern, stem);
                out.remove(0);
                Cow::Owned(out)
            }
            None => Cow::Borrowed(token),
        }
    }

    /// Segment every whitespace-delimited token of a line.
    ///
    /// Tokens are joined by single spaces, so embedded newlines and runs of
    /// whitespace collapse.
    pub fn segment_line(&self, line: &str) -> String {
        let mut out = String::with_capacity(line.len() + line.len() / 2);

        for token in line.split_whitespace() {
            match self.split_point(token) {
                Some((stem, pattern)) => self.write_pieces(&mut out, pattern, stem),
                None => {
                    out.push(' ');
                    out.push_str(token);
                }
            }
        }

        // every piece was written with a leading space
        if out.starts_with(' ') {
            out.remove(0);
        }
        out
    }

    /// Segment lines lazily, one output per input line
    pub fn segment_lines<'a, I, S>(&'a self, lines: I) -> impl Iterator<Item = String> + 'a
    where
        I: IntoIterator<Item = S>,
        I::IntoIter: 'a,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .map(move |line| self.segment_line(line.as_ref()))
    }

    /// Segment lines on the rayon pool, preserving order
    #[cfg(feature = "parallel")]
    pub fn par_segment_lines<S>(&self, lines: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        use rayon::prelude::*;

        lines
            .par_iter()
            .map(|line| self.segment_line(line.as_ref()))
            .collect()
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn exceptions(&self) -> &ExceptionSet {
        &self.exceptions
    }

    pub fn mode(&self) -> Mode {
        self.config.mode
    }

    pub fn separator(&self) -> &Separator {
        &self.config.separator
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Residual stem and pattern to split `token` by, if the policy allows
    /// a split
    fn split_point<'s, 't>(&'s self, token: &'t str) -> Option<(&'t str, &'s str)> {
        if self.is_split_piece(token) {
            return None;
        }

        let mode = self.config.mode;
        if !self.rules.starts_with_starter(token) || !mode.permits(token, &self.exceptions) {
            return None;
        }

        let prefix = self.rules.longest_prefix(token)?;
        let pattern = self.rules.pattern(prefix)?;
        let stem = stem_after(token, pattern)?;
        if !mode.accepts_residual(stem) {
            log::trace!("Residual too short, keeping {token:?}");
            return None;
        }

        Some((stem, pattern))
    }

    /// A morpheme followed by the separator, as written by an earlier pass
    fn is_split_piece(&self, token: &str) -> bool {
        let separator = self.config.separator.as_str();
        !separator.is_empty()
            && token
                .strip_suffix(separator)
                .is_some_and(|head| self.rules.is_morpheme(head))
    }

    /// Append ` m1<sep> m2<sep> ... stem`; the stem is omitted when empty
    fn write_pieces(&self, out: &mut String, pattern: &str, suffix: &str) {
        let separator = self.config.separator.as_str();
        for morpheme in pattern.split(BOUNDARY_MARKER) {
            out.push(' ');
            out.push_str(morpheme);
            out.push_str(separator);
        }

        if !suffix.is_empty() {
            out.push(' ');
            out.push_str(suffix);
        }
    }
}

/// What follows the pattern's morphemes at the start of `word`
fn stem_after<'w>(word: &'w str, pattern: &str) -> Option<&'w str> {
    pattern
        .split(BOUNDARY_MARKER)
        .try_fold(word, |rest, morpheme| rest.strip_prefix(morpheme))
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}
