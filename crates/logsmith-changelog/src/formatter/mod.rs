//! Changelog formatters

mod html;
mod json;
mod markdown;
mod registry;
pub mod template;

pub use html::{escape_html, HtmlFormatter};
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use registry::FormatterRegistry;

use logsmith_core::{Config, OutputFormat};
use tracing::{debug, instrument};

use crate::types::GeneratedChangelog;

/// Repository URL used in links when none could be resolved
pub const UNKNOWN_REPO_URL: &str = "https://github.com/unknown/repo";

/// Trait for changelog formatters
pub trait ChangelogFormatter: Send + Sync {
    /// Render a generated changelog
    fn format(&self, changelog: &GeneratedChangelog, config: &Config) -> String;

    /// Output format produced by this formatter
    fn output_format(&self) -> OutputFormat;

    /// Get the file extension for this format
    fn extension(&self) -> &'static str {
        self.output_format().extension()
    }
}

/// Repository URL for links in rendered output
pub(crate) fn repo_url(config: &Config) -> &str {
    config.repo.as_deref().unwrap_or(UNKNOWN_REPO_URL)
}

/// Render a changelog in the configured format
#[instrument(skip_all, fields(format = %config.format))]
pub fn generate_formatted_changelog(changelog: &GeneratedChangelog, config: &Config) -> String {
    let output = match config.format {
        OutputFormat::Markdown => MarkdownFormatter::new().format(changelog, config),
        OutputFormat::Json => JsonFormatter::new().format(changelog, config),
        OutputFormat::Html => HtmlFormatter::new().format(changelog, config),
    };
    debug!(output_len = output.len(), "changelog rendered");
    output
}
