use std::path::Path;

use mono_core::CommitRef;
use mono_git::{CommitInfo, GitError, Repository, TagInfo};
use tracing::debug;

use crate::Result;
use crate::traits::GitProvider;

pub struct Git2Provider;

impl Git2Provider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Git2Provider {
    fn default() -> Self {
        Self::new()
    }
}

impl GitProvider for Git2Provider {
    fn file_history(&self, path: &Path) -> Result<Vec<CommitRef>> {
        let start = path.parent().unwrap_or(path);
        let repo = match Repository::open(start) {
            Ok(repo) => repo,
            Err(GitError::NotARepository { .. }) => {
                debug!(path = %path.display(), "not in a repository, no commit attribution");
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };
        Ok(repo.file_history(path)?)
    }

    fn delete_file(&self, project_root: &Path, path: &Path) -> Result<()> {
        let repo = Repository::open(project_root)?;
        Ok(repo.delete_file(path)?)
    }

    fn stage_all(&self, project_root: &Path) -> Result<()> {
        let repo = Repository::open(project_root)?;
        Ok(repo.stage_all()?)
    }

    fn commit(&self, project_root: &Path, message: &str) -> Result<CommitInfo> {
        let repo = Repository::open(project_root)?;
        Ok(repo.commit(message)?)
    }

    fn create_tag(&self, project_root: &Path, tag_name: &str, message: &str) -> Result<TagInfo> {
        let repo = Repository::open(project_root)?;
        Ok(repo.create_tag(tag_name, message)?)
    }
}
