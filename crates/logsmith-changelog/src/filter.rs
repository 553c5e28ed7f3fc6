//! Commit inclusion rules

use logsmith_core::Config;
use tracing::trace;

use crate::types::CommitInfo;

/// Check whether a commit survives the configured filters.
///
/// Type rules always apply. Scope rules only apply to commits that have a
/// scope. Any configured message fragment found in the subject drops the
/// commit.
pub fn should_include(commit: &CommitInfo, config: &Config) -> bool {
    if !allowed(
        &commit.commit_type,
        &config.include_commit_types,
        &config.exclude_commit_types,
    ) {
        trace!(hash = %commit.hash, commit_type = %commit.commit_type, "dropped by type filter");
        return false;
    }

    if let Some(scope) = &commit.scope {
        if !allowed(scope, &config.include_scopes, &config.exclude_scopes) {
            trace!(hash = %commit.hash, scope = %scope, "dropped by scope filter");
            return false;
        }
    }

    if config
        .exclude_messages
        .iter()
        .any(|fragment| commit.message.contains(fragment.as_str()))
    {
        trace!(hash = %commit.hash, "dropped by message filter");
        return false;
    }

    true
}

/// Deny list first, then a non-empty allow list
fn allowed(value: &str, include: &[String], exclude: &[String]) -> bool {
    if exclude.iter().any(|e| e == value) {
        return false;
    }
    include.is_empty() || include.iter().any(|i| i == value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_commit;
    use logsmith_git::RawCommit;

    fn commit(subject: &str) -> CommitInfo {
        parse_commit(&RawCommit::new(
            "1234567890",
            subject,
            "Dev",
            "dev@example.com",
            "2024-01-01",
        ))
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_defaults_include_everything() {
        let config = Config::default();
        assert!(should_include(&commit("feat: a"), &config));
        assert!(should_include(&commit("random text"), &config));
    }

    #[test]
    fn test_type_deny_list() {
        let config = Config {
            exclude_commit_types: strings(&["chore"]),
            ..Config::default()
        };
        assert!(!should_include(&commit("chore: deps"), &config));
        assert!(should_include(&commit("fix: bug"), &config));
    }

    #[test]
    fn test_type_allow_list() {
        let config = Config {
            include_commit_types: strings(&["feat", "fix"]),
            ..Config::default()
        };
        assert!(should_include(&commit("fix: bug"), &config));
        assert!(!should_include(&commit("docs: readme"), &config));
        assert!(!should_include(&commit("not conventional"), &config));
    }

    #[test]
    fn test_scope_rules_skip_unscoped() {
        let config = Config {
            include_scopes: strings(&["api"]),
            exclude_scopes: strings(&["internal"]),
            ..Config::default()
        };
        assert!(should_include(&commit("feat(api): a"), &config));
        assert!(!should_include(&commit("feat(ui): b"), &config));
        assert!(!should_include(&commit("feat(internal): c"), &config));
        assert!(should_include(&commit("feat: unscoped"), &config));
    }

    #[test]
    fn test_message_deny_list() {
        let config = Config {
            exclude_messages: strings(&["[skip changelog]"]),
            ..Config::default()
        };
        assert!(!should_include(&commit("fix: typo [skip changelog]"), &config));
        assert!(should_include(&commit("fix: typo"), &config));
    }
}
