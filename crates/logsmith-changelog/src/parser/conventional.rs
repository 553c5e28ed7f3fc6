//! Conventional Commits parser
//!
//! Parses subjects of the form `type(scope): description`:
//! https://www.conventionalcommits.org/

use regex::Regex;
use std::sync::LazyLock;

use logsmith_git::RawCommit;

use super::{parse_references, CommitParser};
use crate::types::{Author, CommitInfo};

/// Regex for parsing conventional commit subjects
static CONVENTIONAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<type>[A-Za-z0-9_]+)(?:\((?P<scope>[^)]+)\))?: (?P<description>.+)$")
        .expect("Invalid regex")
});

/// Type given to commits whose subject does not follow the convention
pub const FALLBACK_TYPE: &str = "misc";

const BREAKING_MARKER: &str = "BREAKING CHANGE";

const SHORT_HASH_LEN: usize = 7;

/// Parser for Conventional Commits format
#[derive(Debug, Clone, Copy, Default)]
pub struct ConventionalParser;

impl ConventionalParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }
}

impl CommitParser for ConventionalParser {
    fn parse(&self, commit: &RawCommit) -> CommitInfo {
        let subject = commit.subject.as_str();
        let body = commit.body.as_deref().unwrap_or_default();

        let (commit_type, scope, description) = match CONVENTIONAL_REGEX.captures(subject) {
            Some(caps) => (
                caps["type"].to_string(),
                caps.name("scope").map(|m| m.as_str().to_string()),
                caps["description"].to_string(),
            ),
            None => (FALLBACK_TYPE.to_string(), None, subject.to_string()),
        };

        let breaking = subject.contains(BREAKING_MARKER)
            || subject.contains("!:")
            || body.contains(BREAKING_MARKER);

        let references = parse_references(&format!("{}\n{}", subject, body));

        CommitInfo {
            hash: commit.hash.chars().take(SHORT_HASH_LEN).collect(),
            message: subject.to_string(),
            author: Author::new(&commit.author_name, &commit.author_email),
            date: commit.date.clone(),
            commit_type,
            scope,
            description,
            body: commit.body.clone(),
            breaking,
            references,
        }
    }
}

/// Parse a raw commit with the conventional parser
pub fn parse_commit(commit: &RawCommit) -> CommitInfo {
    ConventionalParser.parse(commit)
}
