//! Hebrew prefix pre-tokenization
//!
//! Splits Hebrew word forms into their prefix morphemes (conjunctions,
//! prepositions, the definite article, ...) and the remaining stem, driven by a
//! lexicon of known prefix-splitting rules. Intended as a pre-tokenization step
//! in front of subword tokenizers and morphological analyzers.
//!
//! # Architecture
//!
//! - **Rule compiler** ([`lexicon`]): parses the lexicon into a
//!   longest-prefix-first [`RuleSet`]
//! - **Policy** ([`policy`]): classic vs. improved [`Mode`], the
//!   [`ExceptionSet`] and the minimum stem length
//! - **Segmenter** ([`segmenter`]): matches, breaks and joins tokens
//!
//! # Example
//!
//! ```rust
//! use pretok_core::{Config, Segmenter};
//!
//! let config = Config::builder().separator("$$").build().unwrap();
//! let segmenter = Segmenter::with_config(config).unwrap();
//!
//! assert_eq!(segmenter.segment_line("כשהאנשים הלכו"), "כש$$ ה$$ אנשים ה$$ לכו");
//! ```

pub mod config;
pub mod error;
pub mod lexicon;
pub mod policy;
pub mod segmenter;
pub mod separator;
pub mod source;

pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use lexicon::{CompileStats, Rule, RuleSet, BOUNDARY_MARKER};
pub use policy::{ExceptionSet, Mode, MIN_RESIDUAL_CHARS};
pub use segmenter::Segmenter;
pub use separator::Separator;
pub use source::{ExceptionSource, LexiconSource};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
