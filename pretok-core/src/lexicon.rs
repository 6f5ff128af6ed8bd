//! Rule compiler for the prefix lexicon
//!
//! A lexicon line looks like
//!
//! ```text
//! וכשכ ו^כש^כ CONJ+TEMP-SUBCONJ+PREPOSITION:: ו^כש^כ^ה CONJ+TEMP-SUBCONJ+PREPOSITION+DEF::
//! ```
//!
//! The first field is the surface prefix. Any later field containing the
//! boundary marker, or repeating the surface form, is a candidate split
//! pattern; everything else (analysis tags) is ignored. The compiled
//! [`RuleSet`] orders prefixes longest first so that the first literal match is
//! the longest one.

use smallvec::SmallVec;
use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Marker separating morphemes inside a split pattern
pub const BOUNDARY_MARKER: char = '^';

/// Candidate patterns found on one lexicon line; rarely more than a handful
type CandidateVec<'a> = SmallVec<[&'a str; 4]>;

const BUNDLED_LEXICON: &str = include_str!("../resources/lexicon.utf8");

/// Parsed bundled lexicon, shared by every rule set built from it
static BUNDLED: OnceLock<(Vec<Rule>, CompileStats)> = OnceLock::new();

/// A surface prefix paired with the pattern describing how to split it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    prefix: String,
    pattern: String,
}

impl Rule {
    /// Create a rule without validating the pattern
    pub fn new(prefix: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            pattern: pattern.into(),
        }
    }

    /// Parse one lexicon line.
    ///
    /// Returns `None` for lines shorter than two characters and for lines
    /// without a pattern whose morphemes spell the surface form. When several
    /// patterns qualify, the one that appears first on the line wins.
    pub fn parse_line(line: &str) -> Option<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.chars().count() < 2 {
            return None;
        }

        let mut fields = line.split_whitespace();
        let surface = fields.next()?;

        let candidates: CandidateVec = fields
            .filter(|field| field.contains(BOUNDARY_MARKER) || *field == surface)
            .filter(|field| is_valid_pattern(surface, field))
            .collect();

        if candidates.len() > 1 {
            log::trace!(
                "{} patterns spell {:?}, keeping {:?}",
                candidates.len(),
                surface,
                candidates[0]
            );
        }

        candidates.first().map(|pattern| Self::new(surface, *pattern))
    }

    /// Whether the pattern's morphemes are non-empty and spell the prefix
    pub fn is_well_formed(&self) -> bool {
        is_valid_pattern(&self.prefix, &self.pattern)
    }

    /// Surface prefix that must literally start a word
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Split pattern, morphemes separated by [`BOUNDARY_MARKER`]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Morphemes of the pattern in order
    pub fn morphemes(&self) -> impl Iterator<Item = &str> {
        self.pattern.split(BOUNDARY_MARKER)
    }

    /// Length of the surface prefix in characters
    pub fn char_len(&self) -> usize {
        self.prefix.chars().count()
    }
}

/// Every morpheme is non-empty and together they spell `surface` exactly
fn is_valid_pattern(surface: &str, pattern: &str) -> bool {
    pattern.split(BOUNDARY_MARKER).all(|morpheme| !morpheme.is_empty())
        && pattern
            .chars()
            .filter(|&c| c != BOUNDARY_MARKER)
            .eq(surface.chars())
}

/// Line counts gathered while compiling a lexicon
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileStats {
    /// Non-blank lines seen
    pub lines: usize,
    /// Lines that produced a rule
    pub accepted: usize,
    /// Lines dropped as malformed
    pub skipped: usize,
}

/// Parse every line of a lexicon, keeping lexicon order
pub fn parse_lexicon(lexicon: &str) -> (Vec<Rule>, CompileStats) {
    let mut rules = Vec::new();
    let mut stats = CompileStats::default();

    for (index, line) in lexicon.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        stats.lines += 1;

        match Rule::parse_line(line) {
            Some(rule) => {
                stats.accepted += 1;
                rules.push(rule);
            }
            None => {
                stats.skipped += 1;
                log::trace!("Skipping lexicon line {}: {:?}", index + 1, line);
            }
        }
    }

    (rules, stats)
}

/// Compiled longest-prefix lookup table
///
/// Immutable once built. Prefixes are kept in descending character length,
/// ties in lexicon order; a prefix listed twice keeps its first position and
/// its last pattern. Every pattern spells its prefix.
#[derive(Debug, Clone)]
pub struct RuleSet {
    ordered: Vec<String>,
    patterns: HashMap<String, String>,
    starters: HashSet<char>,
    morphemes: HashSet<String>,
    use_unichar: bool,
    stats: CompileStats,
}

impl RuleSet {
    /// Compile lexicon text
    pub fn compile(lexicon: &str, use_unichar: bool) -> Self {
        let (rules, stats) = parse_lexicon(lexicon);
        let mut set = Self::from_rules(rules, use_unichar);
        set.stats = stats;

        log::debug!(
            "Compiled lexicon: {} lines, {} accepted, {} skipped, {} distinct prefixes",
            stats.lines,
            stats.accepted,
            stats.skipped,
            set.len()
        );

        set
    }

    /// Rule set built from the lexicon shipped with the crate
    pub fn bundled(use_unichar: bool) -> Self {
        let (rules, stats) = BUNDLED.get_or_init(|| parse_lexicon(BUNDLED_LEXICON));
        let mut set = Self::from_rules(rules.iter().cloned(), use_unichar);
        set.stats = *stats;
        set
    }

    /// Build from already parsed rules
    pub fn from_rules<I>(rules: I, use_unichar: bool) -> Self
    where
        I: IntoIterator<Item = Rule>,
    {
        let mut ordered = Vec::new();
        let mut patterns = HashMap::new();

        for rule in rules {
            if !use_unichar && rule.char_len() == 1 {
                continue;
            }
            if !rule.is_well_formed() {
                log::debug!("Dropping malformed rule {:?} -> {:?}", rule.prefix, rule.pattern);
                continue;
            }
            let Rule { prefix, pattern } = rule;
            if patterns.insert(prefix.clone(), pattern).is_none() {
                ordered.push(prefix);
            }
        }

        // Stable: equal lengths stay in lexicon order
        ordered.sort_by_key(|prefix| Reverse(prefix.chars().count()));

        let starters = ordered
            .iter()
            .filter_map(|prefix| prefix.chars().next())
            .collect();

        let morphemes = patterns
            .values()
            .flat_map(|pattern| pattern.split(BOUNDARY_MARKER))
            .map(str::to_string)
            .collect();

        Self {
            ordered,
            patterns,
            starters,
            morphemes,
            use_unichar,
            stats: CompileStats::default(),
        }
    }

    /// Longest prefix in the set that literally starts `token`
    pub fn longest_prefix(&self, token: &str) -> Option<&str> {
        self.ordered
            .iter()
            .map(String::as_str)
            .find(|prefix| token.starts_with(prefix))
    }

    /// Split pattern registered for a prefix
    pub fn pattern(&self, prefix: &str) -> Option<&str> {
        self.patterns.get(prefix).map(String::as_str)
    }

    /// Whether `ch` begins at least one prefix
    pub fn is_starter(&self, ch: char) -> bool {
        self.starters.contains(&ch)
    }

    /// Cheap pre-filter before the full prefix scan
    pub fn starts_with_starter(&self, token: &str) -> bool {
        token.chars().next().is_some_and(|ch| self.is_starter(ch))
    }

    /// Whether `text` is one of the morphemes the patterns split into
    pub fn is_morpheme(&self, text: &str) -> bool {
        self.morphemes.contains(text)
    }

    /// First characters of all prefixes
    pub fn starters(&self) -> &HashSet<char> {
        &self.starters
    }

    /// `(prefix, pattern)` pairs in match order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.ordered
            .iter()
            .map(|prefix| (prefix.as_str(), self.patterns[prefix].as_str()))
    }

    /// Number of distinct prefixes
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Whether single-character prefixes were kept
    pub fn use_unichar(&self) -> bool {
        self.use_unichar
    }

    /// Line counts from compilation (zero for sets built with `from_rules`)
    pub fn stats(&self) -> CompileStats {
        self.stats
    }
}
