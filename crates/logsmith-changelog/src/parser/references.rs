//! Issue reference extraction

use regex::Regex;
use std::sync::LazyLock;

use crate::types::GitReference;

/// Keyword references such as `fixes #12` or `Refs #3`
static KEYWORD_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:fixes?|closes?|resolves?|refs?)\s+#(\d+)").expect("Invalid regex")
});

/// Bare `#123` references
static BARE_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#(\d+)").expect("Invalid regex"));

/// Extract issue references from free text.
///
/// Keyword references come first in order of appearance, followed by bare
/// references found in the text left after removing the keyword matches.
pub fn parse_references(text: &str) -> Vec<GitReference> {
    let mut references: Vec<GitReference> = KEYWORD_REFERENCE
        .captures_iter(text)
        .map(|caps| GitReference::issue(&caps[1]))
        .collect();

    let remaining = KEYWORD_REFERENCE.replace_all(text, "");
    references.extend(
        BARE_REFERENCE
            .captures_iter(&remaining)
            .map(|caps| GitReference::issue(&caps[1])),
    );

    references
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(text: &str) -> Vec<String> {
        parse_references(text).into_iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_keyword_references() {
        assert_eq!(ids("fixes #123 and resolves #456"), vec!["123", "456"]);
    }

    #[test]
    fn test_no_references() {
        assert!(parse_references("no refs here").is_empty());
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        assert_eq!(ids("Closes #1, REF #2"), vec!["1", "2"]);
    }

    #[test]
    fn test_bare_references_after_keywords() {
        assert_eq!(ids("see #9, fix #4"), vec!["4", "9"]);
    }

    #[test]
    fn test_keyword_match_not_counted_twice() {
        assert_eq!(ids("resolve #5"), vec!["5"]);
    }
}
