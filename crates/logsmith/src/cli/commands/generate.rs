//! Changelog generation command

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use logsmith_changelog::generate_changelog;
use logsmith_core::config::{load_config, ConfigOverrides, OutputTarget};
use logsmith_core::{Language, OutputFormat, Theme};

use crate::cli::output::{self, path_style};
use crate::cli::Cli;

/// Generate a changelog from commit history
#[derive(Debug, Clone, Default, Args)]
pub struct GenerateCommand {
    /// Start commit reference (default: latest reachable tag)
    #[arg(long, value_name = "REF")]
    pub from: Option<String>,

    /// End commit reference (default: HEAD)
    #[arg(long, value_name = "REF")]
    pub to: Option<String>,

    /// Path to the git repository (default: current directory)
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Changelog file (default: CHANGELOG.md)
    #[arg(long, value_name = "FILE", conflicts_with = "no_output")]
    pub output: Option<PathBuf>,

    /// Print to the console only
    #[arg(long)]
    pub no_output: bool,

    /// Output format: markdown, json, html (default: inferred from --output)
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Language: en, es, fr, de, zh, ja, ko, ru, pt, it
    #[arg(long)]
    pub language: Option<Language>,

    /// Theme: default, minimal, github, gitmoji, unicode, simple, colorful, corporate
    #[arg(long)]
    pub theme: Option<Theme>,

    /// Exit with an error when the working tree has uncommitted changes
    #[arg(long)]
    pub clean: bool,

    /// Contributors to skip (comma-separated names or emails)
    #[arg(long, value_name = "AUTHORS")]
    pub exclude_authors: Option<String>,

    /// Only list these contributors (comma-separated names or emails)
    #[arg(long, value_name = "AUTHORS")]
    pub include_authors: Option<String>,

    /// Show authors without their email
    #[arg(long)]
    pub hide_author_email: bool,

    /// Commit types to drop (comma-separated)
    #[arg(long, value_name = "TYPES")]
    pub exclude_types: Option<String>,

    /// Only keep these commit types (comma-separated)
    #[arg(long, value_name = "TYPES")]
    pub include_types: Option<String>,

    /// Commit scopes to drop (comma-separated)
    #[arg(long, value_name = "SCOPES")]
    pub exclude_scopes: Option<String>,

    /// Only keep these commit scopes (comma-separated)
    #[arg(long, value_name = "SCOPES")]
    pub include_scopes: Option<String>,

    /// Minimum commits required to emit a section
    #[arg(long, value_name = "N")]
    pub min_commits: Option<usize>,

    /// Maximum commits per section (0 = unlimited)
    #[arg(long, value_name = "N")]
    pub max_commits: Option<usize>,

    /// Hide the release date
    #[arg(long)]
    pub no_dates: bool,

    /// Keep breaking changes in their type sections
    #[arg(long)]
    pub no_breaking_group: bool,

    /// Include commit bodies in entries
    #[arg(long)]
    pub include_body: bool,

    /// Do not link issues and pull requests
    #[arg(long)]
    pub no_linkify: bool,

    /// Maximum description length (0 = unlimited)
    #[arg(long, value_name = "N")]
    pub max_length: Option<usize>,

    /// Disable markdown clean-up fixes
    #[arg(long)]
    pub no_markdown_lint: bool,

    /// Version heading for this release
    #[arg(long, value_name = "VERSION")]
    pub release_version: Option<String>,
}

/// Split a comma-separated list, trimming entries and dropping empty ones
fn split_list(value: &Option<String>) -> Option<Vec<String>> {
    value.as_ref().map(|v| {
        v.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    })
}

fn flag(set: bool, value: bool) -> Option<bool> {
    set.then_some(value)
}

impl GenerateCommand {
    /// Translate the flags into a configuration layer.
    ///
    /// Flags that were not given stay unset so lower layers keep their
    /// values.
    pub fn to_overrides(&self, verbose: bool) -> ConfigOverrides {
        let format = self.format.or_else(|| {
            self.output
                .as_deref()
                .and_then(OutputFormat::from_path)
        });

        let output = if self.no_output {
            Some(OutputTarget::Enabled(false))
        } else if let Some(path) = &self.output {
            Some(OutputTarget::File(path.clone()))
        } else {
            self.format
                .map(|f| OutputTarget::File(PathBuf::from(format!("CHANGELOG.{}", f.extension()))))
        };

        ConfigOverrides {
            verbose: flag(verbose, true),
            output,
            format,
            language: self.language,
            theme: self.theme,
            from: self.from.clone(),
            to: self.to.clone(),
            dir: self.dir.clone(),
            clean: flag(self.clean, true),
            exclude_authors: split_list(&self.exclude_authors),
            include_authors: split_list(&self.include_authors),
            hide_author_email: flag(self.hide_author_email, true),
            exclude_commit_types: split_list(&self.exclude_types),
            include_commit_types: split_list(&self.include_types),
            min_commits_for_section: self.min_commits,
            max_commits_per_section: self.max_commits,
            exclude_scopes: split_list(&self.exclude_scopes),
            include_scopes: split_list(&self.include_scopes),
            group_breaking_changes: flag(self.no_breaking_group, false),
            include_dates: flag(self.no_dates, false),
            include_commit_body: flag(self.include_body, true),
            max_description_length: self.max_length,
            linkify_issues: flag(self.no_linkify, false),
            linkify_prs: flag(self.no_linkify, false),
            markdown_lint: flag(self.no_markdown_lint, false),
            version: self.release_version.clone(),
            ..ConfigOverrides::default()
        }
    }

    /// Execute the generate command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(from = ?self.from, to = ?self.to, format = ?self.format, "executing generate command");

        let (config, config_path) = load_config(self.to_overrides(cli.verbose))?;
        if config.verbose {
            match &config_path {
                Some(path) => output::info(&format!("Loaded configuration from {}", path.display())),
                None => output::info("No configuration file found, using defaults"),
            }
            output::info(&format!("Working directory: {}", config.dir.display()));
            output::info(&format!("Output format: {}", config.format));
        }

        let result = generate_changelog(&config)?;

        if config.output.is_none() {
            println!("{}", result.content);
        } else if result.content.is_empty() {
            if !cli.quiet {
                output::warning("No commits found for changelog generation");
            }
        } else if let Some(path) = &result.output_path {
            if !cli.quiet {
                output::success(&format!(
                    "Changelog written to {}",
                    path_style().apply_to(path.display())
                ));
            }
        }

        Ok(())
    }
}
