//! JSON changelog formatter

use logsmith_core::{Config, OutputFormat};
use serde::Serialize;
use tracing::warn;

use super::ChangelogFormatter;
use crate::types::{ChangelogSection, GeneratedChangelog};

/// Summary counts appended to the JSON document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangelogStats {
    pub total_commits: usize,
    pub sections_count: usize,
    pub contributors_count: usize,
    pub breaking_changes: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonChangelog<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<&'a str>,
    date: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    compare_url: Option<&'a str>,
    sections: &'a [ChangelogSection],
    contributors: &'a [String],
    stats: ChangelogStats,
}

/// JSON changelog formatter
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }
}

impl ChangelogFormatter for JsonFormatter {
    fn format(&self, changelog: &GeneratedChangelog, _config: &Config) -> String {
        let document = JsonChangelog {
            version: changelog.version.as_deref(),
            date: &changelog.date,
            compare_url: changelog.compare_url.as_deref(),
            sections: &changelog.sections,
            contributors: &changelog.contributors,
            stats: ChangelogStats {
                total_commits: changelog.total_commits(),
                sections_count: changelog.sections.len(),
                contributors_count: changelog.contributors.len(),
                breaking_changes: changelog.breaking_count(),
            },
        };

        serde_json::to_string_pretty(&document).unwrap_or_else(|e| {
            warn!(error = %e, "failed to serialize changelog");
            String::new()
        })
    }

    fn output_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}
