//! Markdown clean-up fixes applied to rendered output

use std::sync::LazyLock;

use regex::Regex;

static LEADING_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\n+").expect("Invalid regex"));

static TRAILING_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n*$").expect("Invalid regex"));

static BLANK_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("Invalid regex"));

/// Strip leading blank lines, end with exactly one newline and collapse
/// runs of blank lines to a single one
pub fn lint_markdown(content: &str) -> String {
    let fixed = LEADING_NEWLINES.replace(content, "");
    let fixed = TRAILING_NEWLINES.replace(&fixed, "\n");
    BLANK_RUNS.replace_all(&fixed, "\n\n").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_strips_leading_blank_lines() {
        assert_eq!(lint_markdown("\n\n### A\n"), "### A\n");
    }

    #[test]
    fn test_single_trailing_newline() {
        assert_eq!(lint_markdown("### A"), "### A\n");
        assert_eq!(lint_markdown("### A\n\n\n\n"), "### A\n");
    }

    #[test]
    fn test_collapses_blank_runs() {
        assert_eq!(lint_markdown("### A\n\n\n\n- x\n"), "### A\n\n- x\n");
    }

    #[test]
    fn test_clean_content_unchanged() {
        let content = "## v1.0.0\n\n### Features\n\n- x\n";
        assert_eq!(lint_markdown(content), content);
    }
}
