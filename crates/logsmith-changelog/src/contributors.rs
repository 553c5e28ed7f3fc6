//! Contributor collection

use std::collections::HashSet;

use logsmith_core::Config;
use tracing::debug;

use crate::types::CommitInfo;

/// Collect the deduplicated, sorted contributor list.
///
/// Authors are matched against the include/exclude lists by name or email.
/// Identities are keyed by name; the first email seen for a name wins.
pub fn get_contributors(commits: &[CommitInfo], config: &Config) -> Vec<String> {
    let mut seen_names = HashSet::new();
    let mut contributors = Vec::new();

    for commit in commits {
        let author = &commit.author;
        let matches = |list: &[String]| list.iter().any(|a| *a == author.name || *a == author.email);

        if matches(config.exclude_authors.as_slice()) {
            continue;
        }
        if !config.include_authors.is_empty() && !matches(config.include_authors.as_slice()) {
            continue;
        }

        if seen_names.insert(author.name.as_str()) {
            contributors.push(author.display(config.hide_author_email));
        }
    }

    contributors.sort();
    debug!(count = contributors.len(), "collected contributors");
    contributors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_commit;
    use logsmith_git::RawCommit;

    fn commit(name: &str, email: &str) -> CommitInfo {
        parse_commit(&RawCommit::new("abcdef12", "feat: x", name, email, "2024-01-01"))
    }

    #[test]
    fn test_sorted_and_deduplicated() {
        let commits = vec![
            commit("Zed", "zed@example.com"),
            commit("Amy", "amy@example.com"),
            commit("Zed", "zed@example.com"),
        ];
        assert_eq!(
            get_contributors(&commits, &Config::default()),
            vec!["Amy <amy@example.com>", "Zed <zed@example.com>"]
        );
    }

    #[test]
    fn test_same_name_first_email_wins() {
        let commits = vec![
            commit("Amy", "amy@work.example"),
            commit("Amy", "amy@home.example"),
        ];
        assert_eq!(
            get_contributors(&commits, &Config::default()),
            vec!["Amy <amy@work.example>"]
        );
    }

    #[test]
    fn test_exclude_by_name_or_email() {
        let commits = vec![
            commit("dependabot[bot]", "bot@example.com"),
            commit("Amy", "amy@example.com"),
            commit("Bob", "bob@example.com"),
        ];
        let config = Config {
            exclude_authors: vec!["dependabot[bot]".to_string(), "bob@example.com".to_string()],
            ..Config::default()
        };
        assert_eq!(get_contributors(&commits, &config), vec!["Amy <amy@example.com>"]);
    }

    #[test]
    fn test_include_list_and_hidden_email() {
        let commits = vec![commit("Amy", "amy@example.com"), commit("Bob", "bob@example.com")];
        let config = Config {
            include_authors: vec!["bob@example.com".to_string()],
            hide_author_email: true,
            ..Config::default()
        };
        assert_eq!(get_contributors(&commits, &config), vec!["Bob"]);
    }
}
