//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

use crate::config::CliConfig;

const HEADER: &str = "\
# pretok configuration
#
# [segmentation]
#   mode        = \"classic\" | \"improved\"
#   separator   = marker appended to split-off morphemes (\"\" = plain spaces)
#   use_unichar = keep single-character prefixes
#   lexicon     = path to a lexicon file (bundled lexicon when absent)
#   exceptions  = path to an exception word list (bundled list when absent)
#
# [performance]
#   parallel_threshold_lines = files with at least this many lines run in parallel (0 = never)
#   worker_threads           = rayon worker threads (0 = auto)

";

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let template = format!("{HEADER}{}", CliConfig::default().to_toml()?);

        match &self.output {
            Some(path) => {
                fs::write(path, template)
                    .with_context(|| format!("Failed to write to {}", path.display()))?;

                println!("✓ Configuration template generated successfully!");
                println!("  Output file: {}", path.display());
                println!();
                println!("Use it with:");
                println!("   pretok split -i input.txt --config {}", path.display());
            }
            None => print!("{template}"),
        }

        Ok(())
    }
}
