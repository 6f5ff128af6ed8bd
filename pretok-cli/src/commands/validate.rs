//! Validate command implementation

use anyhow::{Context, Result};
use clap::Args;
use pretok_core::{LexiconSource, RuleSet};
use std::path::PathBuf;

use crate::CliError;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Lexicon file to check (default: the bundled lexicon)
    #[arg(short, long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// Drop single-character prefixes, as `split --no-unichar` does
    #[arg(long)]
    pub no_unichar: bool,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        let source = match &self.lexicon {
            Some(path) => LexiconSource::File(path.clone()),
            None => LexiconSource::Bundled,
        };

        println!("Validating lexicon: {}", source.display_name());

        let rules = source
            .compile(!self.no_unichar)
            .with_context(|| format!("Failed to load lexicon {}", source.display_name()))?;
        let stats = rules.stats();

        if rules.is_empty() {
            println!("✗ Lexicon is invalid!");
            return Err(CliError::EmptyLexicon(source.display_name()).into());
        }

        println!("✓ Lexicon is valid!");
        println!("  Lines: {}", stats.lines);
        println!("  Accepted: {}", stats.accepted);
        println!("  Skipped: {}", stats.skipped);
        println!("  Distinct prefixes: {}", rules.len());
        println!("  Longest prefix: {}", longest_prefix_len(&rules));
        println!("  Starter characters: {}", starters(&rules));

        Ok(())
    }
}

fn longest_prefix_len(rules: &RuleSet) -> usize {
    rules
        .iter()
        .next()
        .map(|(prefix, _)| prefix.chars().count())
        .unwrap_or(0)
}

fn starters(rules: &RuleSet) -> String {
    let mut chars: Vec<char> = rules.starters().iter().copied().collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}
