//! logsmith changelog - Conventional Commits changelog pipeline
//!
//! Parses commits, filters and groups them into localized, themed
//! sections, renders Markdown, JSON or HTML and computes repository
//! statistics.

pub mod contributors;
pub mod filter;
pub mod formatter;
pub mod generator;
pub mod grouper;
pub mod i18n;
pub mod lint;
pub mod merge;
pub mod parser;
pub mod stats;
pub mod themes;
pub mod types;

pub use contributors::get_contributors;
pub use formatter::{generate_formatted_changelog, ChangelogFormatter, FormatterRegistry};
pub use generator::{compare_url, generate_changelog, ChangelogGenerator};
pub use grouper::group_commits;
pub use lint::lint_markdown;
pub use merge::{merge_changelog, write_changelog};
pub use parser::{parse_commit, parse_references, CommitParser, ConventionalParser};
pub use stats::{analyze_commits, compute_stats, RepositoryStats};
pub use types::{
    Author, ChangelogEntry, ChangelogResult, ChangelogSection, CommitInfo, GeneratedChangelog,
    GitReference, ReferenceType,
};
