//! HTML changelog formatter
//!
//! Renders a standalone document with an inline stylesheet. The theme's
//! custom CSS, when present, is appended after the base rules.

use logsmith_core::{Config, OutputFormat};
use tracing::{debug, instrument};

use super::template::reference_link;
use super::{repo_url, ChangelogFormatter};
use crate::i18n::{format_date, labels, DateStyle};
use crate::themes::html_styles;
use crate::types::{ChangelogEntry, GeneratedChangelog, GitReference, ReferenceType};

const BASE_CSS: &str = r#"    body {
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Roboto', sans-serif;
      line-height: 1.6;
      color: #333;
      max-width: 800px;
      margin: 0 auto;
      padding: 2rem;
      background-color: #fafafa;
    }

    .changelog-container {
      background: white;
      border-radius: 8px;
      padding: 2rem;
      box-shadow: 0 2px 10px rgba(0, 0, 0, 0.1);
    }

    .changelog-header {
      border-bottom: 2px solid #e1e4e8;
      padding-bottom: 1.5rem;
      margin-bottom: 2rem;
      text-align: center;
    }

    .version-title {
      font-size: 2.5rem;
      margin: 0;
      color: #0366d6;
      font-weight: 600;
    }

    .release-date {
      display: block;
      color: #586069;
      font-size: 1rem;
      margin-top: 0.5rem;
    }

    .compare-link {
      display: inline-block;
      margin-top: 1rem;
      color: #0366d6;
      text-decoration: none;
      padding: 0.5rem 1rem;
      border: 1px solid #0366d6;
      border-radius: 4px;
      transition: all 0.2s;
    }

    .compare-link:hover {
      background-color: #0366d6;
      color: white;
    }

    .stats-summary {
      background: #f6f8fa;
      padding: 1rem;
      border-radius: 6px;
      margin-bottom: 2rem;
      text-align: center;
    }

    .stat-item {
      display: inline-block;
      margin: 0 1rem;
      font-weight: 500;
    }

    .changelog-section {
      margin-bottom: 2.5rem;
    }

    .section-title {
      font-size: 1.5rem;
      color: #24292e;
      border-bottom: 1px solid #e1e4e8;
      padding-bottom: 0.5rem;
      margin-bottom: 1rem;
    }

    .commits-list {
      list-style: none;
      padding: 0;
    }

    .commit-item {
      padding: 0.75rem;
      margin-bottom: 0.5rem;
      border: 1px solid #e1e4e8;
      border-radius: 6px;
      background: #f6f8fa;
      transition: background-color 0.2s;
    }

    .commit-item:hover {
      background: #e1e4e8;
    }

    .commit-item.breaking-change {
      border-left: 4px solid #d73a49;
      background: #ffeef0;
    }

    .commit-scope {
      background: #0366d6;
      color: white;
      padding: 0.2rem 0.5rem;
      border-radius: 3px;
      font-size: 0.85rem;
      font-weight: 500;
      margin-right: 0.5rem;
    }

    .commit-description {
      font-weight: 500;
    }

    .commit-hash {
      font-family: 'SFMono-Regular', Consolas, monospace;
      background: #f1f3f4;
      padding: 0.2rem 0.4rem;
      border-radius: 3px;
      text-decoration: none;
      color: #586069;
      font-size: 0.85rem;
      margin-left: 0.5rem;
    }

    .commit-hash:hover {
      background: #e1e4e8;
    }

    .breaking-indicator {
      background: #d73a49;
      color: white;
      padding: 0.2rem 0.4rem;
      border-radius: 3px;
      font-size: 0.75rem;
      font-weight: 500;
      margin-left: 0.5rem;
    }

    .commit-references {
      margin-left: 0.5rem;
      color: #586069;
    }

    .issue-link, .pr-link {
      color: #0366d6;
      text-decoration: none;
    }

    .issue-link:hover, .pr-link:hover {
      text-decoration: underline;
    }

    .commit-author {
      color: #586069;
      font-size: 0.9rem;
      margin-left: 0.5rem;
    }

    .commit-body {
      margin-top: 0.5rem;
      color: #586069;
      font-size: 0.9rem;
      white-space: pre-wrap;
    }

    .contributors-section {
      border-top: 1px solid #e1e4e8;
      padding-top: 1.5rem;
      margin-top: 2rem;
    }

    .contributors-title {
      font-size: 1.25rem;
      color: #24292e;
      margin-bottom: 1rem;
    }

    .contributors-list {
      list-style: none;
      padding: 0;
      display: flex;
      flex-wrap: wrap;
      gap: 0.5rem;
    }

    .contributor-item {
      background: #f1f3f4;
      padding: 0.4rem 0.8rem;
      border-radius: 20px;
      font-size: 0.9rem;
    }

    @media (max-width: 600px) {
      body {
        padding: 1rem;
      }

      .changelog-container {
        padding: 1rem;
      }

      .version-title {
        font-size: 2rem;
      }

      .stat-item {
        display: block;
        margin: 0.25rem 0;
      }
    }"#;

/// Escape `& < > " '` for HTML text and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// HTML changelog formatter
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlFormatter;

impl HtmlFormatter {
    /// Create a new HTML formatter
    pub fn new() -> Self {
        Self
    }

    fn reference(&self, reference: &GitReference, repo: &str, config: &Config) -> String {
        let class = match reference.ref_type {
            ReferenceType::Issue => "issue-link",
            ReferenceType::Pr => "pr-link",
        };
        match reference_link(reference, repo, config) {
            Some(url) => format!(
                r#"<a href="{}" class="{}" target="_blank">#{}</a>"#,
                escape_html(&url),
                class,
                escape_html(&reference.id)
            ),
            None => format!("#{}", escape_html(&reference.id)),
        }
    }

    fn entry(&self, lines: &mut Vec<String>, entry: &ChangelogEntry, config: &Config) {
        let repo = repo_url(config);
        let by = labels(config.language).by;

        lines.push(format!(
            r#"          <li class="commit-item{}">"#,
            if entry.breaking { " breaking-change" } else { "" }
        ));

        if let Some(scope) = &entry.scope {
            lines.push(format!(
                r#"            <span class="commit-scope">{}</span>"#,
                escape_html(scope)
            ));
        }

        lines.push(format!(
            r#"            <span class="commit-description">{}</span>"#,
            escape_html(&entry.description)
        ));
        lines.push(format!(
            r#"            <a href="{}/commit/{}" class="commit-hash" target="_blank">{}</a>"#,
            escape_html(repo),
            escape_html(&entry.hash),
            escape_html(&entry.hash)
        ));

        if entry.breaking && !config.group_breaking_changes {
            lines.push(r#"            <span class="breaking-indicator">⚠️ BREAKING</span>"#.to_string());
        }

        if !entry.references.is_empty() {
            let refs: Vec<String> = entry
                .references
                .iter()
                .map(|r| self.reference(r, repo, config))
                .collect();
            lines.push(format!(
                r#"            <span class="commit-references">({})</span>"#,
                refs.join(", ")
            ));
        }

        if let Some(author) = &entry.author {
            lines.push(format!(
                r#"            <span class="commit-author">{} {}</span>"#,
                escape_html(by),
                escape_html(author)
            ));
        }

        if let Some(body) = &entry.body {
            lines.push(format!(
                r#"            <div class="commit-body">{}</div>"#,
                escape_html(body)
            ));
        }

        lines.push("          </li>".to_string());
    }
}

impl ChangelogFormatter for HtmlFormatter {
    #[instrument(skip_all, fields(section_count = changelog.sections.len()))]
    fn format(&self, changelog: &GeneratedChangelog, config: &Config) -> String {
        let labels = labels(config.language);
        let version = changelog
            .version
            .as_ref()
            .map(|v| escape_html(&format!("{}{}", config.version_prefix, v)));

        let mut lines: Vec<String> = vec![
            "<!DOCTYPE html>".to_string(),
            format!(r#"<html lang="{}">"#, config.language.code()),
            "<head>".to_string(),
            r#"  <meta charset="UTF-8">"#.to_string(),
            r#"  <meta name="viewport" content="width=device-width, initial-scale=1.0">"#.to_string(),
            format!(
                "  <title>{}{}</title>",
                escape_html(labels.changelog),
                version
                    .as_ref()
                    .map(|v| format!(" - {}", v))
                    .unwrap_or_default()
            ),
            "  <style>".to_string(),
            BASE_CSS.to_string(),
        ];
        if let Some(css) = html_styles(config.theme).custom_css {
            lines.push(css.to_string());
        }
        lines.extend(
            ["  </style>", "</head>", "<body>", r#"  <div class="changelog-container">"#]
                .map(String::from),
        );

        if let Some(version) = &version {
            lines.push(r#"    <header class="changelog-header">"#.to_string());
            lines.push(format!(r#"      <h1 class="version-title">{}</h1>"#, version));
            if config.include_dates {
                lines.push(format!(
                    r#"      <time class="release-date" datetime="{}">{}</time>"#,
                    escape_html(&changelog.date),
                    escape_html(&format_date(&changelog.date, config.language, DateStyle::Full))
                ));
            }
            if let Some(url) = &changelog.compare_url {
                lines.push(format!(
                    r#"      <a href="{}" class="compare-link" target="_blank">📋 {}</a>"#,
                    escape_html(url),
                    escape_html(labels.compare_changes)
                ));
            }
            lines.push("    </header>".to_string());
        }

        if config.include_commit_count {
            lines.push(r#"    <div class="stats-summary">"#.to_string());
            lines.push(format!(
                r#"      <span class="stat-item">📊 {} {}</span>"#,
                changelog.total_commits(),
                labels.commits
            ));
            lines.push(format!(
                r#"      <span class="stat-item">👥 {} {}</span>"#,
                changelog.contributors.len(),
                labels.contributors
            ));
            lines.push(format!(
                r#"      <span class="stat-item">📂 {} {}</span>"#,
                changelog.sections.len(),
                labels.sections
            ));
            lines.push("    </div>".to_string());
        }

        lines.push(r#"    <main class="changelog-content">"#.to_string());
        for section in changelog.sections.iter().filter(|s| !s.is_empty()) {
            lines.push(r#"      <section class="changelog-section">"#.to_string());
            lines.push(format!(
                r#"        <h2 class="section-title">{}</h2>"#,
                escape_html(&section.title)
            ));
            lines.push(r#"        <ul class="commits-list">"#.to_string());
            for entry in &section.commits {
                self.entry(&mut lines, entry, config);
            }
            lines.push("        </ul>".to_string());
            lines.push("      </section>".to_string());
        }
        lines.push("    </main>".to_string());

        if !changelog.contributors.is_empty() && !config.exclude_email {
            lines.push(r#"    <footer class="contributors-section">"#.to_string());
            lines.push(format!(
                r#"      <h3 class="contributors-title">{}</h3>"#,
                escape_html(labels.contributors)
            ));
            lines.push(r#"      <ul class="contributors-list">"#.to_string());
            lines.extend(changelog.contributors.iter().map(|c| {
                format!(r#"        <li class="contributor-item">{}</li>"#, escape_html(c))
            }));
            lines.push("      </ul>".to_string());
            lines.push("    </footer>".to_string());
        }

        lines.extend(["  </div>", "</body>", "</html>"].map(String::from));

        let output = lines.join("\n");
        debug!(output_len = output.len(), "html changelog formatted");
        output
    }

    fn output_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChangelogSection;
    use logsmith_core::{Language, Theme};

    fn entry(description: &str, breaking: bool) -> ChangelogEntry {
        ChangelogEntry {
            commit_type: "feat".to_string(),
            scope: Some("ui".to_string()),
            description: description.to_string(),
            hash: "abc1234".to_string(),
            author: Some("Jane <jane@example.com>".to_string()),
            breaking,
            references: vec![GitReference::issue("42")],
            body: None,
        }
    }

    fn changelog(entries: Vec<ChangelogEntry>) -> GeneratedChangelog {
        GeneratedChangelog {
            version: Some("2.0.0".to_string()),
            date: "2024-01-15".to_string(),
            sections: vec![ChangelogSection::new("🚀 Features", entries)],
            contributors: vec!["Jane <jane@example.com>".to_string()],
            compare_url: Some("https://github.com/acme/widget/compare/v1.0.0...HEAD".to_string()),
        }
    }

    fn config() -> Config {
        Config {
            repo: Some("https://github.com/acme/widget".to_string()),
            ..Config::default()
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_script_is_escaped() {
        let output =
            HtmlFormatter::new().format(&changelog(vec![entry("<script>", false)]), &config());
        assert!(output.contains("&lt;script&gt;"));
        assert!(!output.contains("<script>"));
    }

    #[test]
    fn test_document_structure() {
        let output = HtmlFormatter::new().format(&changelog(vec![entry("add", false)]), &config());

        assert!(output.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(output.contains("<title>Changelog - v2.0.0</title>"));
        assert!(output.contains(r#"<h1 class="version-title">v2.0.0</h1>"#));
        assert!(output.contains(r#"datetime="2024-01-15">January 15, 2024</time>"#));
        assert!(output.contains("📋 Compare changes</a>"));
        assert!(output.contains(r#"<h2 class="section-title">🚀 Features</h2>"#));
        assert!(output.contains(r#"<li class="commit-item">"#));
        assert!(output.contains(
            r#"<a href="https://github.com/acme/widget/commit/abc1234" class="commit-hash" target="_blank">abc1234</a>"#
        ));
        assert!(output.contains(
            r#"(<a href="https://github.com/acme/widget/issues/42" class="issue-link" target="_blank">#42</a>)"#
        ));
        assert!(output.contains("by Jane &lt;jane@example.com&gt;</span>"));
        assert!(output.contains(r#"<li class="contributor-item">"#));
        assert!(output.ends_with("</body>\n</html>"));
    }

    #[test]
    fn test_breaking_markers() {
        let output = HtmlFormatter::new().format(&changelog(vec![entry("drop", true)]), &config());
        assert!(output.contains(r#"<li class="commit-item breaking-change">"#));
        assert!(!output.contains("⚠️ BREAKING"));

        let config = Config {
            group_breaking_changes: false,
            ..config()
        };
        let output = HtmlFormatter::new().format(&changelog(vec![entry("drop", true)]), &config);
        assert!(output.contains(r#"<span class="breaking-indicator">⚠️ BREAKING</span>"#));
    }

    #[test]
    fn test_stats_summary_and_language() {
        let config = Config {
            include_commit_count: true,
            language: Language::De,
            ..config()
        };
        let output = HtmlFormatter::new().format(&changelog(vec![entry("add", false)]), &config);
        assert!(output.contains("<html lang=\"de\">"));
        assert!(output.contains(r#"<div class="stats-summary">"#));
        assert!(output.contains("📊 1 "));
    }

    #[test]
    fn test_theme_custom_css_appended() {
        let config = Config {
            theme: Theme::Corporate,
            ..config()
        };
        let output = HtmlFormatter::new().format(&changelog(vec![entry("add", false)]), &config);
        let css = html_styles(Theme::Corporate).custom_css.unwrap();
        let style_end = output.find("  </style>").unwrap();
        assert!(output[..style_end].contains(css));
    }

    #[test]
    fn test_no_header_without_version() {
        let mut input = changelog(vec![entry("add", false)]);
        input.version = None;
        let output = HtmlFormatter::new().format(&input, &config());
        assert!(!output.contains("changelog-header"));
        assert!(output.contains("<title>Changelog</title>"));
    }

    #[test]
    fn test_commit_body_block() {
        let mut e = entry("add", false);
        e.body = Some("line one\n<b>two</b>".to_string());
        let output = HtmlFormatter::new().format(&changelog(vec![e]), &config());
        assert!(output.contains(
            r#"<div class="commit-body">line one
&lt;b&gt;two&lt;/b&gt;</div>"#
        ));
    }
}
