//! CLI definition and command handling

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

use commands::{
    CompletionsCommand, GenerateCommand, LanguagesCommand, StatsCommand, ThemesCommand,
};

/// logsmith - Conventional Commits changelog generator
///
/// Without a subcommand, generates a changelog for the current repository.
#[derive(Debug, Parser)]
#[command(name = "logsmith")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true, args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(flatten)]
    pub generate: GenerateCommand,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a changelog (default)
    Generate(GenerateCommand),

    /// Show repository statistics and trends
    Stats(StatsCommand),

    /// List available themes
    Themes(ThemesCommand),

    /// List supported languages
    Languages(LanguagesCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self) -> anyhow::Result<()> {
        match &self.command {
            None => self.generate.execute(self),
            Some(Commands::Generate(cmd)) => cmd.execute(self),
            Some(Commands::Stats(cmd)) => cmd.execute(self),
            Some(Commands::Themes(cmd)) => cmd.execute(self),
            Some(Commands::Languages(cmd)) => cmd.execute(self),
            Some(Commands::Completions(cmd)) => cmd.execute(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_command_is_generate() {
        let cli = Cli::try_parse_from(["logsmith", "--from", "v1.0.0", "--no-dates"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.generate.from.as_deref(), Some("v1.0.0"));
        assert!(cli.generate.no_dates);
    }

    #[test]
    fn test_stats_subcommand() {
        let cli = Cli::try_parse_from(["logsmith", "stats", "--json", "--verbose"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::Stats(ref s)) if s.json));
    }

    #[test]
    fn test_invalid_theme_rejected() {
        assert!(Cli::try_parse_from(["logsmith", "--theme", "neon"]).is_err());
    }
}
