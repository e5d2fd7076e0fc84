use std::path::Path;

use chrono::{DateTime, Utc};
use mono_core::CommitRef;

use crate::{GitError, Result};

use super::Repository;

const SHORT_SHA_LEN: usize = 7;

impl Repository {
    /// Commits reachable from `HEAD` that added or changed `path`, newest
    /// first. A file edited in several commits yields one entry per commit.
    /// Merges count only when the file differs from every parent.
    /// An unborn `HEAD` has no history.
    ///
    /// # Errors
    ///
    /// Returns an error if the revision walk or a tree lookup fails.
    pub fn file_history(&self, path: &Path) -> Result<Vec<CommitRef>> {
        let relative = self.to_relative_path(path);

        if self.inner.head().is_err() {
            return Ok(Vec::new());
        }

        let mut revwalk = self.inner.revwalk()?;
        revwalk.push_head()?;
        revwalk.set_sorting(git2::Sort::TIME | git2::Sort::TOPOLOGICAL)?;

        let mut history = Vec::new();

        for oid in revwalk {
            let commit = self.inner.find_commit(oid?)?;
            let entry_id = |commit: &git2::Commit<'_>| -> Result<Option<git2::Oid>> {
                Ok(commit
                    .tree()?
                    .get_path(&relative)
                    .ok()
                    .map(|entry| entry.id()))
            };

            let Some(current) = entry_id(&commit)? else {
                continue;
            };

            // A merge that keeps one parent's version did not change the file.
            let mut touched = true;
            for parent in commit.parents() {
                if entry_id(&parent)? == Some(current) {
                    touched = false;
                    break;
                }
            }

            if touched {
                history.push(to_commit_ref(&commit)?);
            }
        }

        Ok(history)
    }
}

fn to_commit_ref(commit: &git2::Commit<'_>) -> Result<CommitRef> {
    let sha = commit.id().to_string();
    let date = DateTime::<Utc>::from_timestamp(commit.time().seconds(), 0)
        .ok_or_else(|| GitError::InvalidTimestamp { sha: sha.clone() })?;

    Ok(CommitRef {
        short_sha: sha.chars().take(SHORT_SHA_LEN).collect(),
        sha,
        date,
    })
}
