//! Git types

use serde::{Deserialize, Serialize};

/// A commit as read from the repository, before any parsing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCommit {
    /// Full commit hash
    pub hash: String,
    /// First line of the commit message
    pub subject: String,
    /// Author name
    pub author_name: String,
    /// Author email
    pub author_email: String,
    /// Author date as an ISO-8601 string
    pub date: String,
    /// Message body after the subject, if any
    pub body: Option<String>,
}

impl RawCommit {
    /// Create a new RawCommit without a body
    pub fn new(
        hash: impl Into<String>,
        subject: impl Into<String>,
        author_name: impl Into<String>,
        author_email: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            hash: hash.into(),
            subject: subject.into(),
            author_name: author_name.into(),
            author_email: author_email.into(),
            date: date.into(),
            body: None,
        }
    }

    /// Set the commit body; blank bodies are dropped
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        let body = body.into();
        let trimmed = body.trim();
        self.body = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_body() {
        let commit = RawCommit::new("abc", "feat: x", "Jane", "jane@example.com", "2024-01-01")
            .with_body("\nBREAKING CHANGE: gone\n");
        assert_eq!(commit.body.as_deref(), Some("BREAKING CHANGE: gone"));
    }

    #[test]
    fn test_blank_body_dropped() {
        let commit = RawCommit::new("abc", "fix: y", "Jane", "jane@example.com", "2024-01-01")
            .with_body("  \n");
        assert_eq!(commit.body, None);
    }
}
