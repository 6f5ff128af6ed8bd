//! `pretok` command-line entry point

use clap::Parser;
use pretok_cli::commands::Commands;
use pretok_cli::CliResult;

/// Split Hebrew prefix morphemes off word forms
#[derive(Debug, Parser)]
#[command(name = "pretok", version)]
#[command(about = "Hebrew prefix pre-tokenizer for NLP pipelines", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }
}
