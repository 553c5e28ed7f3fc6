//! Markdown changelog formatter

use logsmith_core::{Config, OutputFormat};
use tracing::{debug, instrument};

use super::template::{fill, markdown_reference, render_entry};
use super::{repo_url, ChangelogFormatter};
use crate::i18n::{format_date, labels, DateStyle};
use crate::types::{ChangelogEntry, GeneratedChangelog};

/// Marker placed before breaking entries that stay in their type section
const BREAKING_PREFIX: &str = "⚠️  ";

/// Markdown changelog formatter
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Create a new markdown formatter
    pub fn new() -> Self {
        Self
    }

    fn entry_line(&self, entry: &ChangelogEntry, in_breaking_section: bool, config: &Config) -> String {
        let repo = repo_url(config);
        let template = if entry.breaking && in_breaking_section {
            &config.templates.breaking_change_format
        } else {
            &config.templates.commit_format
        };

        let mut line = render_entry(template, entry, repo);

        if entry.breaking && !config.group_breaking_changes {
            line = format!("{}{}", BREAKING_PREFIX, line);
        }

        if !entry.references.is_empty() {
            let refs: Vec<String> = entry
                .references
                .iter()
                .map(|r| markdown_reference(r, repo, config))
                .collect();
            line.push_str(&format!(" ({})", refs.join(", ")));
        }

        line
    }
}

impl ChangelogFormatter for MarkdownFormatter {
    #[instrument(skip_all, fields(section_count = changelog.sections.len()))]
    fn format(&self, changelog: &GeneratedChangelog, config: &Config) -> String {
        let labels = labels(config.language);
        let mut lines: Vec<String> = Vec::new();

        if let Some(version) = &changelog.version {
            lines.push(format!("## {}{}", config.version_prefix, version));
            lines.push(String::new());
            if config.include_dates {
                let date = format_date(&changelog.date, config.language, DateStyle::Full);
                lines.push(fill(&config.templates.date_format, &[("date", &date)]));
                lines.push(String::new());
            }
        }

        if let Some(compare_url) = &changelog.compare_url {
            lines.push(format!("[{}]({})", labels.compare_changes, compare_url));
            lines.push(String::new());
        }

        if config.include_commit_count {
            lines.push(format!(
                "**{} {}** in this release",
                changelog.total_commits(),
                labels.commits
            ));
            lines.push(String::new());
        }

        for section in changelog.sections.iter().filter(|s| !s.is_empty()) {
            lines.push(fill(&config.templates.group_format, &[("title", &section.title)]));
            lines.push(String::new());

            for entry in &section.commits {
                lines.push(self.entry_line(entry, section.breaking, config));

                if let Some(body) = &entry.body {
                    lines.extend(body.lines().map(|l| format!("  {}", l)));
                }
            }

            lines.push(String::new());
        }

        if !changelog.contributors.is_empty() && !config.exclude_email {
            lines.push(format!("### {}", labels.contributors));
            lines.push(String::new());
            lines.extend(changelog.contributors.iter().map(|c| format!("- {}", c)));
            lines.push(String::new());
        }

        let output = lines.join("\n");
        debug!(output_len = output.len(), "markdown changelog formatted");
        output
    }

    fn output_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ChangelogSection, GitReference};
    use indoc::indoc;
    use logsmith_core::Language;
    use pretty_assertions::assert_eq;

    const REPO: &str = "https://github.com/acme/widget";

    fn entry(scope: Option<&str>, description: &str, breaking: bool) -> ChangelogEntry {
        ChangelogEntry {
            commit_type: "feat".to_string(),
            scope: scope.map(str::to_string),
            description: description.to_string(),
            hash: "abc1234".to_string(),
            author: Some("Jane".to_string()),
            breaking,
            references: Vec::new(),
            body: None,
        }
    }

    fn config() -> Config {
        Config {
            repo: Some(REPO.to_string()),
            ..Config::default()
        }
    }

    fn changelog(sections: Vec<ChangelogSection>) -> GeneratedChangelog {
        GeneratedChangelog {
            version: None,
            date: "2024-01-15".to_string(),
            sections,
            contributors: vec!["Jane <jane@example.com>".to_string()],
            compare_url: None,
        }
    }

    #[test]
    fn test_format_sections_and_contributors() {
        let input = changelog(vec![
            ChangelogSection::new("🚀 Features", vec![entry(Some("auth"), "add OAuth2", false)]),
            ChangelogSection::new("🐛 Bug Fixes", vec![entry(None, "resolve leak", false)]),
        ]);

        let output = MarkdownFormatter::new().format(&input, &config());

        assert_eq!(
            output,
            indoc! {"
                ### 🚀 Features

                - **auth**: add OAuth2 ([abc1234](https://github.com/acme/widget/commit/abc1234))

                ### 🐛 Bug Fixes

                - resolve leak ([abc1234](https://github.com/acme/widget/commit/abc1234))

                ### Contributors

                - Jane <jane@example.com>
            "}
        );
    }

    #[test]
    fn test_version_header_date_and_compare() {
        let mut input = changelog(vec![ChangelogSection::new(
            "🚀 Features",
            vec![entry(None, "thing", false)],
        )]);
        input.version = Some("1.2.0".to_string());
        input.compare_url = Some(format!("{}/compare/v1.1.0...HEAD", REPO));
        input.contributors.clear();

        let config = Config {
            include_commit_count: true,
            ..config()
        };
        let output = MarkdownFormatter::new().format(&input, &config);

        assert!(output.starts_with(indoc! {"
            ## v1.2.0

            _January 15, 2024_

            [Compare changes](https://github.com/acme/widget/compare/v1.1.0...HEAD)

            **1 commits** in this release

            ### 🚀 Features
        "}));
    }

    #[test]
    fn test_no_date_without_version() {
        let input = changelog(vec![ChangelogSection::new(
            "🚀 Features",
            vec![entry(None, "thing", false)],
        )]);
        let output = MarkdownFormatter::new().format(&input, &config());
        assert!(!output.contains("2024"));
        assert!(!output.contains("## v"));
    }

    #[test]
    fn test_breaking_section_uses_breaking_template() {
        let input = changelog(vec![ChangelogSection::new(
            "💥 Breaking Changes",
            vec![entry(Some("api"), "drop v1", true)],
        )
        .breaking()]);

        let output = MarkdownFormatter::new().format(&input, &config());
        assert!(output.contains(
            "- ****api**: drop v1** ([abc1234](https://github.com/acme/widget/commit/abc1234))"
        ));
        assert!(!output.contains("⚠️"));
    }

    #[test]
    fn test_breaking_prefix_when_not_grouped() {
        let input = changelog(vec![ChangelogSection::new(
            "🚀 Features",
            vec![entry(None, "drop v1", true)],
        )]);
        let config = Config {
            group_breaking_changes: false,
            ..config()
        };

        let output = MarkdownFormatter::new().format(&input, &config);
        assert!(output.contains("⚠️  - drop v1 ("));
    }

    #[test]
    fn test_references_and_body() {
        let mut e = entry(None, "fix crash", false);
        e.references = vec![GitReference::issue("12"), GitReference::issue("34")];
        e.body = Some("first line\nsecond line".to_string());
        let input = changelog(vec![ChangelogSection::new("🐛 Bug Fixes", vec![e])]);

        let config = Config {
            linkify_issues: false,
            ..config()
        };
        let output = MarkdownFormatter::new().format(&input, &config);

        assert!(output.contains("/commit/abc1234)) (#12, #34)\n  first line\n  second line\n"));
    }

    #[test]
    fn test_exclude_email_hides_contributors() {
        let input = changelog(vec![ChangelogSection::new(
            "🚀 Features",
            vec![entry(None, "thing", false)],
        )]);
        let config = Config {
            exclude_email: true,
            ..config()
        };
        let output = MarkdownFormatter::new().format(&input, &config);
        assert!(!output.contains("Contributors"));
    }

    #[test]
    fn test_custom_templates_and_language() {
        let input = changelog(vec![ChangelogSection::new(
            "Fonctionnalités",
            vec![entry(None, "thing", false)],
        )]);
        let mut config = config();
        config.language = Language::Fr;
        config.templates.group_format = "#### {{title}} ####".to_string();
        config.templates.commit_format = "* {{description}} ({{author}})".to_string();

        let output = MarkdownFormatter::new().format(&input, &config);
        assert!(output.contains("#### Fonctionnalités ####\n\n* thing (Jane)\n"));
        assert!(output.contains("### Contributeurs"));
    }

    #[test]
    fn test_empty_sections_skipped() {
        let input = changelog(vec![ChangelogSection::new("🚀 Features", Vec::new())]);
        let output = MarkdownFormatter::new().format(&input, &config());
        assert!(!output.contains("Features"));
    }
}
