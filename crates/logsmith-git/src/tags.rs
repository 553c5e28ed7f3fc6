//! Tag operations

use git2::{DescribeFormatOptions, DescribeOptions, ErrorClass, ErrorCode};
use tracing::{debug, instrument};

use logsmith_core::error::GitError;

use crate::repository::{GitRepo, Result};

impl GitRepo {
    /// Find the nearest tag reachable from `rev`.
    ///
    /// Lightweight and annotated tags both count. Returns `None` when `rev`
    /// cannot be resolved or no tag is reachable from it.
    #[instrument(skip(self), fields(rev))]
    pub fn latest_tag(&self, rev: &str) -> Result<Option<String>> {
        let object = match self.resolve_commit(rev)? {
            Some(oid) => self.repo.find_object(oid, None)?,
            None => return Ok(None),
        };

        let mut options = DescribeOptions::new();
        options.describe_tags();

        let describe = match object.describe(&options) {
            Ok(describe) => describe,
            Err(e) if e.code() == ErrorCode::NotFound || e.class() == ErrorClass::Describe => {
                debug!("no tag reachable");
                return Ok(None);
            }
            Err(e) => return Err(GitError::Git2(e)),
        };

        let mut format = DescribeFormatOptions::new();
        format.abbreviated_size(0);
        let tag = describe.format(Some(&format))?;

        debug!(tag = %tag, "latest reachable tag");
        Ok(Some(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::{Repository, Signature};
    use tempfile::TempDir;

    fn commit(repo: &Repository, message: &str) -> git2::Oid {
        let sig = Signature::now("Test", "test@example.com").unwrap();
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let parent = repo.head().ok().map(|h| h.peel_to_commit().unwrap());
        let parents: Vec<_> = parent.iter().collect();
        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap()
    }

    #[test]
    fn test_no_tags() {
        let temp = TempDir::new().unwrap();
        let repo = Repository::init(temp.path()).unwrap();
        commit(&repo, "chore: init");

        let git = GitRepo::open(temp.path()).unwrap();
        assert_eq!(git.latest_tag("HEAD").unwrap(), None);
    }

    #[test]
    fn test_nearest_tag_wins() {
        let temp = TempDir::new().unwrap();
        let repo = Repository::init(temp.path()).unwrap();

        let first = commit(&repo, "chore: init");
        let first = repo.find_object(first, None).unwrap();
        repo.tag_lightweight("v1.0.0", &first, false).unwrap();

        let second = commit(&repo, "feat: more");
        let second = repo.find_object(second, None).unwrap();
        let sig = Signature::now("Test", "test@example.com").unwrap();
        repo.tag("v1.1.0", &second, &sig, "release 1.1.0", false)
            .unwrap();

        commit(&repo, "fix: after release");

        let git = GitRepo::open(temp.path()).unwrap();
        assert_eq!(git.latest_tag("HEAD").unwrap().as_deref(), Some("v1.1.0"));
        assert_eq!(git.latest_tag("HEAD~2").unwrap().as_deref(), Some("v1.0.0"));
    }

    #[test]
    fn test_unborn_head() {
        let temp = TempDir::new().unwrap();
        Repository::init(temp.path()).unwrap();
        let git = GitRepo::open(temp.path()).unwrap();
        assert_eq!(git.latest_tag("HEAD").unwrap(), None);
    }
}
