//! Commit history operations

use chrono::{FixedOffset, TimeZone, Utc};
use git2::Sort;
use tracing::{debug, instrument, warn};

use logsmith_core::error::GitError;

use crate::repository::{GitRepo, Result};
use crate::types::RawCommit;

impl GitRepo {
    /// List the commits reachable from `to` but not from `from`.
    ///
    /// Commits come newest first. Without `from` the walk runs back to the
    /// first commit. A `from` that does not resolve yields an empty list,
    /// as does a repository with no commits yet. An unresolvable `to` in a
    /// repository with history is an error.
    #[instrument(skip(self), fields(from, to))]
    pub fn commits_in_range(&self, from: Option<&str>, to: &str) -> Result<Vec<RawCommit>> {
        let to_oid = match self.resolve_commit(to)? {
            Some(oid) => oid,
            None if self.repo.is_empty()? => {
                debug!("repository has no commits");
                return Ok(Vec::new());
            }
            None => return Err(GitError::RevisionNotFound(to.to_string())),
        };

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(to_oid)?;

        if let Some(from) = from {
            match self.resolve_commit(from)? {
                Some(from_oid) => revwalk.hide(from_oid)?,
                None => {
                    warn!(from, "start reference not found, range is empty");
                    return Ok(Vec::new());
                }
            }
        }

        let mut commits = Vec::new();
        for oid in revwalk {
            let commit = self.repo.find_commit(oid?)?;
            commits.push(commit_to_raw(&commit));
        }

        debug!(count = commits.len(), "collected commits in range");
        Ok(commits)
    }
}

/// Convert a git2 Commit to RawCommit
fn commit_to_raw(commit: &git2::Commit<'_>) -> RawCommit {
    let author = commit.author();
    let when = author.when();

    let date = FixedOffset::east_opt(when.offset_minutes() * 60)
        .and_then(|offset| offset.timestamp_opt(when.seconds(), 0).single())
        .map(|dt| dt.to_rfc3339())
        .or_else(|| {
            Utc.timestamp_opt(when.seconds(), 0)
                .single()
                .map(|dt| dt.to_rfc3339())
        })
        .unwrap_or_default();

    let raw = RawCommit::new(
        commit.id().to_string(),
        commit.summary().unwrap_or_default(),
        String::from_utf8_lossy(author.name_bytes()),
        String::from_utf8_lossy(author.email_bytes()),
        date,
    );

    match commit.body() {
        Some(body) => raw.with_body(body),
        None => raw,
    }
}
