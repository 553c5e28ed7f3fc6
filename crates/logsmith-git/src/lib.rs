//! logsmith git - commit history access
//!
//! Thin adapter over `git2` that lists raw commits in a revision range,
//! finds the latest reachable tag, resolves the browse URL of the `origin`
//! remote and checks working tree cleanliness.

mod commits;
mod remote;
mod repository;
mod status;
mod tags;
pub mod types;

pub use remote::normalize_remote_url;
pub use repository::{GitRepo, Result};
pub use types::RawCommit;
