//! Writing rendered changelogs to disk

use std::path::Path;

use logsmith_core::error::ChangelogError;
use logsmith_core::{OutputFormat, Result};
use tracing::{debug, info, instrument};

/// Heading written at the top of a new markdown changelog
pub const CHANGELOG_HEADING: &str = "# Changelog";

/// Combine new markdown content with an existing changelog.
///
/// New content goes right after the first `# ` heading line, or in front of
/// everything when there is no such heading. Without an existing file a
/// fresh document is started.
pub fn merge_changelog(existing: Option<&str>, content: &str) -> String {
    let Some(existing) = existing else {
        return format!("{}\n\n{}", CHANGELOG_HEADING, content);
    };

    let heading = existing
        .match_indices('\n')
        .map(|(i, _)| i + 1)
        .chain(std::iter::once(0))
        .filter(|&start| existing[start..].starts_with("# "))
        .min();

    match heading {
        Some(start) => {
            let (before, after) = match existing[start..].find('\n') {
                Some(offset) => existing.split_at(start + offset + 1),
                None => (existing, ""),
            };
            let separator = if before.ends_with('\n') { "" } else { "\n" };
            format!("{}{}\n{}\n{}", before, separator, content, after)
        }
        None => format!("{}\n\n{}", content, existing),
    }
}

/// Read existing changelog content
pub fn read_changelog(path: &Path) -> Result<Option<String>> {
    if path.exists() {
        debug!(path = %path.display(), "reading existing changelog");
        Ok(Some(std::fs::read_to_string(path)?))
    } else {
        debug!(path = %path.display(), "no existing changelog found");
        Ok(None)
    }
}

/// Write a rendered changelog.
///
/// Markdown is merged into an existing file; JSON and HTML overwrite it.
#[instrument(skip(content), fields(path = %path.display()))]
pub fn write_changelog(path: &Path, content: &str, format: OutputFormat) -> Result<()> {
    let document = match format {
        OutputFormat::Markdown => merge_changelog(read_changelog(path)?.as_deref(), content),
        OutputFormat::Json | OutputFormat::Html => content.to_string(),
    };

    info!(path = %path.display(), format = %format, "writing changelog");
    std::fs::write(path, document).map_err(|e| ChangelogError::WriteFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_new_file_gets_heading() {
        assert_eq!(
            merge_changelog(None, "### Features\n\n- x\n"),
            "# Changelog\n\n### Features\n\n- x\n"
        );
    }

    #[test]
    fn test_insert_after_heading() {
        let existing = "# Changelog\n\n## v1.0.0\n\n- old\n";
        assert_eq!(
            merge_changelog(Some(existing), "## v1.1.0\n\n- new\n"),
            "# Changelog\n\n## v1.1.0\n\n- new\n\n\n## v1.0.0\n\n- old\n"
        );
    }

    #[test]
    fn test_heading_not_on_first_line() {
        let existing = "<!-- generated -->\n# History\n- old\n";
        assert_eq!(
            merge_changelog(Some(existing), "- new"),
            "<!-- generated -->\n# History\n\n- new\n- old\n"
        );
    }

    #[test]
    fn test_subheadings_are_not_main_heading() {
        let existing = "## v1.0.0\n\n- old\n";
        assert_eq!(
            merge_changelog(Some(existing), "- new\n"),
            "- new\n\n\n## v1.0.0\n\n- old\n"
        );
    }

    #[test]
    fn test_heading_without_trailing_newline() {
        assert_eq!(merge_changelog(Some("# Changelog"), "- new\n"), "# Changelog\n\n- new\n\n");
    }

    #[test]
    fn test_write_markdown_merges() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("CHANGELOG.md");

        write_changelog(&path, "- first\n", OutputFormat::Markdown).unwrap();
        write_changelog(&path, "- second\n", OutputFormat::Markdown).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "# Changelog\n\n- second\n\n\n- first\n");
    }

    #[test]
    fn test_write_json_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("changelog.json");

        write_changelog(&path, "{\"a\": 1}", OutputFormat::Json).unwrap();
        write_changelog(&path, "{\"b\": 2}", OutputFormat::Json).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{\"b\": 2}");
    }

    #[test]
    fn test_write_failure_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("CHANGELOG.md");

        let err = write_changelog(&path, "x", OutputFormat::Html).unwrap_err();
        assert!(err.to_string().contains("CHANGELOG.md"));
    }
}
