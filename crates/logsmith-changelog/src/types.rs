//! Changelog types

use std::path::PathBuf;

use logsmith_core::OutputFormat;
use serde::{Deserialize, Serialize};

/// Commit author identity
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub email: String,
}

impl Author {
    /// Create a new author
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// `Name <email>`, or just `Name` when emails are hidden
    pub fn display(&self, hide_email: bool) -> String {
        if hide_email {
            self.name.clone()
        } else {
            format!("{} <{}>", self.name, self.email)
        }
    }
}

/// Kind of cross-reference found in a commit message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceType {
    Issue,
    Pr,
}

/// A reference to an issue or pull request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitReference {
    #[serde(rename = "type")]
    pub ref_type: ReferenceType,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl GitReference {
    /// Issue reference without a URL
    pub fn issue(id: impl Into<String>) -> Self {
        Self {
            ref_type: ReferenceType::Issue,
            id: id.into(),
            url: None,
        }
    }
}

/// A parsed commit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitInfo {
    /// Short hash (first 7 characters)
    pub hash: String,
    /// Full subject line
    pub message: String,
    pub author: Author,
    /// ISO-8601 author date
    pub date: String,
    /// Commit type, `misc` when the subject is not conventional
    #[serde(rename = "type")]
    pub commit_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub breaking: bool,
    pub references: Vec<GitReference>,
}

/// One rendered line item of a changelog section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangelogEntry {
    #[serde(rename = "type")]
    pub commit_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    pub description: String,
    pub hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default)]
    pub breaking: bool,
    #[serde(default)]
    pub references: Vec<GitReference>,
    /// Commit body, only carried when bodies are requested
    #[serde(skip)]
    pub body: Option<String>,
}

/// A titled group of entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangelogSection {
    pub title: String,
    pub commits: Vec<ChangelogEntry>,
    /// Set on the dedicated breaking changes section
    #[serde(skip)]
    pub breaking: bool,
}

impl ChangelogSection {
    /// Create a new section
    pub fn new(title: impl Into<String>, commits: Vec<ChangelogEntry>) -> Self {
        Self {
            title: title.into(),
            commits,
            breaking: false,
        }
    }

    /// Mark this section as the breaking changes section
    pub fn breaking(mut self) -> Self {
        self.breaking = true;
        self
    }

    /// Check if section is empty
    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }
}

/// Format-independent input of every renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedChangelog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Release date, `YYYY-MM-DD`
    pub date: String,
    pub sections: Vec<ChangelogSection>,
    pub contributors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compare_url: Option<String>,
}

impl GeneratedChangelog {
    /// Total number of entries across all sections
    pub fn total_commits(&self) -> usize {
        self.sections.iter().map(|s| s.commits.len()).sum()
    }

    /// Number of breaking entries across all sections
    pub fn breaking_count(&self) -> usize {
        self.sections
            .iter()
            .flat_map(|s| &s.commits)
            .filter(|c| c.breaking)
            .count()
    }
}

/// Outcome of a generation run
#[derive(Debug, Clone, PartialEq)]
pub struct ChangelogResult {
    /// Rendered changelog (empty when no commits were found)
    pub content: String,
    /// File written, if any
    pub output_path: Option<PathBuf>,
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(breaking: bool) -> ChangelogEntry {
        ChangelogEntry {
            commit_type: "feat".to_string(),
            scope: None,
            description: "thing".to_string(),
            hash: "abc1234".to_string(),
            author: None,
            breaking,
            references: Vec::new(),
            body: Some("hidden".to_string()),
        }
    }

    #[test]
    fn test_author_display() {
        let author = Author::new("Jane", "jane@example.com");
        assert_eq!(author.display(false), "Jane <jane@example.com>");
        assert_eq!(author.display(true), "Jane");
    }

    #[test]
    fn test_changelog_totals() {
        let changelog = GeneratedChangelog {
            version: None,
            date: "2024-01-01".to_string(),
            sections: vec![
                ChangelogSection::new("A", vec![entry(true), entry(false)]),
                ChangelogSection::new("B", vec![entry(true)]),
            ],
            contributors: Vec::new(),
            compare_url: None,
        };
        assert_eq!(changelog.total_commits(), 3);
        assert_eq!(changelog.breaking_count(), 2);
    }

    #[test]
    fn test_entry_serialization_shape() {
        let value = serde_json::to_value(entry(false)).unwrap();
        assert_eq!(value["type"], "feat");
        assert!(value.get("scope").is_none());
        assert!(value.get("body").is_none());
        assert_eq!(value["breaking"], false);
    }
}
