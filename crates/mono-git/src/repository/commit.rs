use crate::{CommitInfo, Result};

use super::Repository;

impl Repository {
    /// Commits the current index on top of `HEAD`, or as the root commit
    /// when `HEAD` is unborn.
    ///
    /// # Errors
    ///
    /// Returns an error if no signature is configured or the commit cannot be
    /// created.
    pub fn commit(&self, message: &str) -> Result<CommitInfo> {
        let sig = self.inner.signature()?;
        let tree_id = self.inner.index()?.write_tree()?;
        let tree = self.inner.find_tree(tree_id)?;

        let parent = self.inner.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

        let oid = self
            .inner
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)?;

        Ok(CommitInfo {
            sha: oid.to_string(),
            message: message.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{commit_file, setup_test_repo};

    #[test]
    fn commit_moves_head() -> anyhow::Result<()> {
        let (dir, repo) = setup_test_repo()?;

        let sha = commit_file(&dir, &repo, "packages/core/package.json", "{}", "Publish packages")?;

        let head = repo.inner.head()?.peel_to_commit()?;
        assert_eq!(head.id().to_string(), sha);
        assert_eq!(head.parent_count(), 1);
        Ok(())
    }

    #[test]
    fn commit_keeps_multiline_message() -> anyhow::Result<()> {
        let (dir, repo) = setup_test_repo()?;
        let message = "Publish packages\n\n- core 1.2.0\n- cli 0.4.1";

        commit_file(&dir, &repo, "VERSION", "1.2.0", message)?;

        let head = repo.inner.head()?.peel_to_commit()?;
        assert_eq!(head.message(), Some(message));
        Ok(())
    }
}
