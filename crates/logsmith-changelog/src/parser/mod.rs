//! Commit parsing

mod conventional;
mod references;

pub use conventional::{parse_commit, ConventionalParser, FALLBACK_TYPE};
pub use references::parse_references;

use logsmith_git::RawCommit;

use crate::types::CommitInfo;

/// Trait for commit parsers
pub trait CommitParser: Send + Sync {
    /// Parse a raw commit into a structured record.
    ///
    /// Parsing never fails; subjects a parser does not understand degrade
    /// to a catch-all type.
    fn parse(&self, commit: &RawCommit) -> CommitInfo;
}
