//! Morpheme separator validation

use std::fmt;

use crate::lexicon::RuleSet;
use crate::{Error, Result};

/// Quote characters stripped from both ends of a separator before checking it
pub const QUOTE_CHARS: [char; 3] = ['"', '\'', '`'];

/// Marker appended to every split-off morpheme
///
/// Empty means plain spaces between pieces. A non-empty separator must not
/// look like ordinary token content: purely numeric, purely whitespace and
/// purely alphabetic values are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Separator(String);

impl Separator {
    /// Validate and normalise a separator
    pub fn new(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Ok(Self::default());
        }

        let trimmed = raw.trim_matches(QUOTE_CHARS.as_slice());
        let reason = if trimmed.is_empty() {
            Some("contains only quote characters")
        } else if trimmed.chars().all(char::is_numeric) {
            Some("is purely numeric")
        } else if trimmed.chars().all(char::is_whitespace) {
            Some("is purely whitespace")
        } else if trimmed.chars().all(char::is_alphabetic) {
            Some("is purely alphabetic")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(Error::InvalidConfiguration(format!(
                "separator {raw:?} {reason}"
            ))),
            None => Ok(Self(trimmed.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Reject separators that could start a prefix themselves
    pub(crate) fn check_against(&self, rules: &RuleSet) -> Result<()> {
        match self.0.chars().find(|&ch| rules.is_starter(ch)) {
            Some(ch) => Err(Error::InvalidConfiguration(format!(
                "separator {:?} contains prefix character '{ch}'",
                self.0
            ))),
            None => Ok(()),
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Rule;

    #[test]
    fn test_rejects_token_like_separators() {
        for raw in ["123", "   ", "abc", "\"abc\"", "'42'", "שלום", "\"\""] {
            let result = Separator::new(raw);
            assert!(
                matches!(result, Err(Error::InvalidConfiguration(_))),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_accepts_marker_separators() {
        assert_eq!(Separator::new("$$").unwrap().as_str(), "$$");
        assert_eq!(Separator::new("@@").unwrap().as_str(), "@@");
        assert_eq!(Separator::new("a1").unwrap().as_str(), "a1");
        assert_eq!(Separator::new("\"$$\"").unwrap().as_str(), "$$");
    }

    #[test]
    fn test_empty_separator_is_default() {
        let separator = Separator::new("").unwrap();
        assert!(separator.is_empty());
        assert_eq!(separator, Separator::default());
    }

    #[test]
    fn test_check_against_starters() {
        let rules = RuleSet::from_rules(vec![Rule::new("ה", "ה")], true);
        assert!(Separator::new("$$").unwrap().check_against(&rules).is_ok());
        assert!(Separator::new("ה$").unwrap().check_against(&rules).is_err());
    }
}
