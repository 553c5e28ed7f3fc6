//! Section grouping

use logsmith_core::Config;
use tracing::{debug, instrument};

use crate::filter::should_include;
use crate::i18n::{breaking_title, themed_type_title};
use crate::types::{ChangelogEntry, ChangelogSection, CommitInfo};

/// Canonical section order; other types follow in discovery order
pub const TYPE_ORDER: [&str; 11] = [
    "feat", "fix", "perf", "refactor", "docs", "style", "test", "build", "ci", "chore", "revert",
];

/// Group commits into ordered changelog sections.
///
/// Filters commits, pulls breaking changes into a leading section when
/// enabled, then buckets the rest by type. A type section is emitted when
/// its bucket holds at least `min_commits_for_section` entries and is cut
/// to `max_commits_per_section` (0 keeps all).
#[instrument(skip_all, fields(commit_count = commits.len()))]
pub fn group_commits(commits: &[CommitInfo], config: &Config) -> Vec<ChangelogSection> {
    let mut breaking = Vec::new();
    let mut buckets: Vec<(String, Vec<ChangelogEntry>)> = Vec::new();

    for commit in commits.iter().filter(|c| should_include(c, config)) {
        let entry = to_entry(commit, config);

        if commit.breaking && config.group_breaking_changes {
            breaking.push(entry);
            continue;
        }

        match buckets.iter_mut().find(|(t, _)| *t == commit.commit_type) {
            Some((_, entries)) => entries.push(entry),
            None => buckets.push((commit.commit_type.clone(), vec![entry])),
        }
    }

    let mut sections = Vec::new();

    if !breaking.is_empty() {
        let title = breaking_title(config.language, config.theme);
        let entries = limit(breaking, config.max_commits_per_section);
        sections.push(ChangelogSection::new(title, entries).breaking());
    }

    let (canonical, others): (Vec<_>, Vec<_>) = buckets
        .into_iter()
        .partition(|(t, _)| TYPE_ORDER.contains(&t.as_str()));

    let mut canonical = canonical;
    canonical.sort_by_key(|(t, _)| TYPE_ORDER.iter().position(|o| o == t));

    for (commit_type, entries) in canonical.into_iter().chain(others) {
        if entries.len() < config.min_commits_for_section {
            debug!(commit_type = %commit_type, count = entries.len(), "section below minimum size");
            continue;
        }
        let title = section_title(&commit_type, config);
        sections.push(ChangelogSection::new(
            title,
            limit(entries, config.max_commits_per_section),
        ));
    }

    debug!(section_count = sections.len(), "commits grouped");
    sections
}

/// Title for a type section: configured override, then themed localized
/// name, then the raw type
pub fn section_title(commit_type: &str, config: &Config) -> String {
    config
        .templates
        .type_format
        .get(commit_type)
        .cloned()
        .or_else(|| themed_type_title(commit_type, config.language, config.theme))
        .unwrap_or_else(|| commit_type.to_string())
}

fn to_entry(commit: &CommitInfo, config: &Config) -> ChangelogEntry {
    ChangelogEntry {
        commit_type: commit.commit_type.clone(),
        scope: commit.scope.clone(),
        description: truncate(&commit.description, config.max_description_length),
        hash: commit.hash.clone(),
        author: Some(commit.author.display(config.hide_author_email)),
        breaking: commit.breaking,
        references: commit.references.clone(),
        body: if config.include_commit_body {
            commit.body.clone()
        } else {
            None
        },
    }
}

fn truncate(description: &str, max_len: usize) -> String {
    if max_len == 0 || description.chars().count() <= max_len {
        return description.to_string();
    }
    let mut truncated: String = description.chars().take(max_len).collect();
    truncated.push_str("...");
    truncated
}

fn limit(mut entries: Vec<ChangelogEntry>, max: usize) -> Vec<ChangelogEntry> {
    if max > 0 {
        entries.truncate(max);
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_commit;
    use logsmith_core::{Language, Theme};
    use logsmith_git::RawCommit;
    use pretty_assertions::assert_eq;

    fn commit(subject: &str) -> CommitInfo {
        parse_commit(&RawCommit::new(
            "0123456789abcdef",
            subject,
            "Dev",
            "dev@example.com",
            "2024-01-01",
        ))
    }

    fn commits(subjects: &[&str]) -> Vec<CommitInfo> {
        subjects.iter().map(|s| commit(s)).collect()
    }

    fn titles(sections: &[ChangelogSection]) -> Vec<&str> {
        sections.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn test_default_grouping() {
        let input = commits(&[
            "feat(auth): add OAuth2",
            "fix(api): resolve leak",
            "feat: add dashboard",
        ]);
        let sections = group_commits(&input, &Config::default());

        assert_eq!(titles(&sections), vec!["🚀 Features", "🐛 Bug Fixes"]);
        assert_eq!(sections[0].commits.len(), 2);
        assert_eq!(sections[1].commits.len(), 1);
        assert_eq!(sections[0].commits[0].scope.as_deref(), Some("auth"));
    }

    #[test]
    fn test_min_commits_for_section() {
        let input = commits(&["feat: a", "fix: b", "feat: c"]);
        let config = Config {
            min_commits_for_section: 2,
            ..Config::default()
        };
        let sections = group_commits(&input, &config);
        assert_eq!(titles(&sections), vec!["🚀 Features"]);
    }

    #[test]
    fn test_max_commits_per_section_keeps_first() {
        let input = commits(&["feat: one", "feat: two", "feat: three", "feat: four", "feat: five"]);
        let config = Config {
            max_commits_per_section: 1,
            ..Config::default()
        };
        let sections = group_commits(&input, &config);
        assert_eq!(sections[0].commits.len(), 1);
        assert_eq!(sections[0].commits[0].description, "one");
    }

    #[test]
    fn test_canonical_then_discovery_order() {
        let input = commits(&[
            "wip: z",
            "chore: deps",
            "random message",
            "docs: readme",
            "feat: a",
        ]);
        let sections = group_commits(&input, &Config::default());
        assert_eq!(
            titles(&sections),
            vec!["🚀 Features", "📚 Documentation", "🧹 Chores", "wip", "📄 Miscellaneous"]
        );
    }

    #[test]
    fn test_breaking_section_first() {
        let input = commits(&["fix: small", "feat!: big"]);
        let sections = group_commits(&input, &Config::default());

        assert_eq!(titles(&sections), vec!["💥 Breaking Changes", "🐛 Bug Fixes"]);
        assert!(sections[0].breaking);
        assert!(!sections[1].breaking);
    }

    #[test]
    fn test_breaking_kept_in_type_when_not_grouped() {
        let input = commits(&["feat(core): big", "feat(api)!: bigger"]);
        let config = Config {
            group_breaking_changes: false,
            ..Config::default()
        };
        let sections = group_commits(&input, &config);
        assert_eq!(sections.len(), 1);
        assert!(sections[0].commits[1].breaking);
    }

    #[test]
    fn test_localized_and_themed_titles() {
        let input = commits(&["fix: a"]);
        let config = Config {
            language: Language::Fr,
            theme: Theme::Unicode,
            ..Config::default()
        };
        let sections = group_commits(&input, &config);
        assert_eq!(titles(&sections), vec!["✗ Corrections"]);
    }

    #[test]
    fn test_type_format_override() {
        let mut config = Config::default();
        config
            .templates
            .type_format
            .insert("feat".to_string(), "New Stuff".to_string());
        let sections = group_commits(&commits(&["feat: a"]), &config);
        assert_eq!(titles(&sections), vec!["New Stuff"]);
    }

    #[test]
    fn test_description_truncation_and_author() {
        let config = Config {
            max_description_length: 5,
            hide_author_email: true,
            ..Config::default()
        };
        let sections = group_commits(&commits(&["feat: abcdefgh"]), &config);
        let entry = &sections[0].commits[0];
        assert_eq!(entry.description, "abcde...");
        assert_eq!(entry.author.as_deref(), Some("Dev"));
        assert_eq!(entry.hash, "0123456");
    }

    #[test]
    fn test_body_only_when_requested() {
        let raw = RawCommit::new("abc1234", "feat: a", "Dev", "dev@example.com", "2024-01-01")
            .with_body("details");
        let input = vec![parse_commit(&raw)];

        let sections = group_commits(&input, &Config::default());
        assert_eq!(sections[0].commits[0].body, None);

        let config = Config {
            include_commit_body: true,
            ..Config::default()
        };
        let sections = group_commits(&input, &config);
        assert_eq!(sections[0].commits[0].body.as_deref(), Some("details"));
    }
}
