//! Changelog generation

use chrono::Utc;
use logsmith_core::error::GitError;
use logsmith_core::{Config, OutputFormat, Result};
use logsmith_git::GitRepo;
use tracing::{debug, info, instrument, warn};

use crate::contributors::get_contributors;
use crate::formatter::{ChangelogFormatter, FormatterRegistry};
use crate::grouper::group_commits;
use crate::lint::lint_markdown;
use crate::merge::write_changelog;
use crate::parser::{CommitParser, ConventionalParser};
use crate::types::{ChangelogResult, CommitInfo, GeneratedChangelog};

/// Build the compare link between two refs
pub fn compare_url(repo_url: &str, from: &str, to: &str) -> String {
    format!("{}/compare/{}...{}", repo_url, from, to)
}

/// Changelog generator
pub struct ChangelogGenerator {
    parser: Box<dyn CommitParser>,
    formatters: FormatterRegistry,
    config: Config,
}

impl ChangelogGenerator {
    /// Create a new generator with default parser and formatters
    pub fn new(config: Config) -> Self {
        Self {
            parser: Box::new(ConventionalParser::new()),
            formatters: FormatterRegistry::new(),
            config,
        }
    }

    /// Use a custom parser
    pub fn with_parser<P: CommitParser + 'static>(mut self, parser: P) -> Self {
        self.parser = Box::new(parser);
        self
    }

    /// Use a custom formatter for its output format
    pub fn with_formatter<F: ChangelogFormatter + 'static>(mut self, formatter: F) -> Self {
        self.formatters.register(formatter);
        self
    }

    /// Configuration this generator runs with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Assemble the format-independent changelog from parsed commits
    pub fn build(&self, commits: &[CommitInfo], compare_url: Option<String>) -> GeneratedChangelog {
        build_changelog(commits, compare_url, &self.config)
    }

    /// Render a changelog in the configured format.
    ///
    /// Markdown output gets the lint fixes when enabled.
    pub fn render(&self, changelog: &GeneratedChangelog) -> String {
        self.render_with(changelog, &self.config)
    }

    fn render_with(&self, changelog: &GeneratedChangelog, config: &Config) -> String {
        let output = match self.formatters.get(config.format) {
            Some(formatter) => formatter.format(changelog, config),
            None => {
                warn!(format = %config.format, "no formatter registered");
                String::new()
            }
        };

        if config.format == OutputFormat::Markdown && config.markdown_lint {
            lint_markdown(&output)
        } else {
            output
        }
    }

    /// Run the whole pipeline against the configured repository
    #[instrument(skip(self), fields(dir = %self.config.dir.display(), format = %self.config.format))]
    pub fn generate(&self) -> Result<ChangelogResult> {
        info!("generating changelog");

        let repo = open_repository(&self.config)?;
        let (from, commits) = fetch_commits(&repo, &self.config, self.parser.as_ref())?;
        let output_path = self.config.output_path();

        if commits.is_empty() {
            warn!("no commits found for changelog generation");
            return Ok(ChangelogResult {
                content: String::new(),
                output_path,
                format: self.config.format,
            });
        }

        // Renderers read the resolved URL from the config they are given
        let mut config = self.config.clone();
        config.repo = resolve_repo_url(&repo, &self.config);

        let compare = match (&config.repo, &from) {
            (Some(repo_url), Some(from)) => Some(compare_url(repo_url, from, &config.to)),
            _ => None,
        };

        let changelog = build_changelog(&commits, compare, &config);
        let content = self.render_with(&changelog, &config);

        if let Some(path) = &output_path {
            write_changelog(path, &content, self.config.format)?;
            info!(path = %path.display(), "changelog written");
        }

        Ok(ChangelogResult {
            content,
            output_path,
            format: self.config.format,
        })
    }
}

#[instrument(skip_all, fields(commit_count = commits.len()))]
fn build_changelog(
    commits: &[CommitInfo],
    compare_url: Option<String>,
    config: &Config,
) -> GeneratedChangelog {
    let sections = group_commits(commits, config);
    let contributors = get_contributors(commits, config);

    debug!(
        section_count = sections.len(),
        contributor_count = contributors.len(),
        "changelog assembled"
    );

    GeneratedChangelog {
        version: config.version.clone(),
        date: Utc::now().format("%Y-%m-%d").to_string(),
        sections,
        contributors,
        compare_url,
    }
}

/// Generate a changelog with the default parser and formatters
pub fn generate_changelog(config: &Config) -> Result<ChangelogResult> {
    ChangelogGenerator::new(config.clone()).generate()
}

fn open_repository(config: &Config) -> Result<GitRepo> {
    let repo = GitRepo::discover(&config.dir)?;

    if config.clean && !repo.is_clean()? {
        return Err(GitError::DirtyWorkingDirectory.into());
    }

    Ok(repo)
}

/// Resolve the range start and parse the commits in range
fn fetch_commits(
    repo: &GitRepo,
    config: &Config,
    parser: &dyn CommitParser,
) -> Result<(Option<String>, Vec<CommitInfo>)> {
    let from = match &config.from {
        Some(from) => Some(from.clone()),
        None => repo.latest_tag(&config.to)?,
    };

    match &from {
        Some(from) => info!(from = %from, to = %config.to, "collecting commits"),
        None => info!(to = %config.to, "collecting commits, no previous tag found"),
    }

    let commits: Vec<CommitInfo> = repo
        .commits_in_range(from.as_deref(), &config.to)?
        .iter()
        .map(|raw| parser.parse(raw))
        .collect();

    debug!(count = commits.len(), "commits parsed");
    Ok((from, commits))
}

/// Open the configured repository and collect the parsed commits in range
pub(crate) fn collect_commits(config: &Config) -> Result<(Option<String>, Vec<CommitInfo>)> {
    let repo = GitRepo::discover(&config.dir)?;
    fetch_commits(&repo, config, &ConventionalParser::new())
}

/// Configured repository URL, else the `origin` remote
fn resolve_repo_url(repo: &GitRepo, config: &Config) -> Option<String> {
    if let Some(url) = config.repo.as_ref().filter(|u| !u.is_empty()) {
        return Some(url.trim_end_matches('/').to_string());
    }

    match repo.repository_url() {
        Ok(url) => url,
        Err(e) => {
            warn!(error = %e, "could not resolve repository url");
            None
        }
    }
}
