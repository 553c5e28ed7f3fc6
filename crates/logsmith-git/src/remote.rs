//! Remote operations

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::repository::{GitRepo, Result};

/// `git@host:owner/repo(.git)` style remotes
static SCP_REMOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w.-]+@([^:/]+):(.+)$").expect("Invalid regex"));

/// `ssh://[user@]host[:port]/owner/repo(.git)` style remotes
static SSH_REMOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ssh://(?:[^@/]+@)?([^:/]+)(?::\d+)?/(.+)$").expect("Invalid regex"));

impl GitRepo {
    /// Get the URL for a remote, or `None` if the remote is not configured
    pub fn remote_url(&self, name: &str) -> Result<Option<String>> {
        match self.repo.find_remote(name) {
            Ok(remote) => Ok(remote.url().map(|s| s.to_string())),
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Browse URL of the `origin` remote, normalized to HTTPS
    pub fn repository_url(&self) -> Result<Option<String>> {
        let url = self.remote_url("origin")?.map(|url| normalize_remote_url(&url));
        debug!(url = ?url, "resolved repository url");
        Ok(url)
    }
}

/// Rewrite a remote URL into an HTTPS browse URL.
///
/// SSH remotes become `https://host/owner/repo`; a trailing `.git` or `/`
/// is removed.
pub fn normalize_remote_url(url: &str) -> String {
    let url = url.trim();

    let https = if let Some(caps) = SCP_REMOTE.captures(url) {
        format!("https://{}/{}", &caps[1], &caps[2])
    } else if let Some(caps) = SSH_REMOTE.captures(url) {
        format!("https://{}/{}", &caps[1], &caps[2])
    } else {
        url.to_string()
    };

    let https = https.trim_end_matches('/');
    https.strip_suffix(".git").unwrap_or(https).to_string()
}
