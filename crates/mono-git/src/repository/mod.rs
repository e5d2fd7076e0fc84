mod commit;
mod files;
mod history;
mod staging;
mod tag;

use std::path::{Path, PathBuf};

use crate::{GitError, Result};

pub struct Repository {
    pub(crate) inner: git2::Repository,
    root: PathBuf,
}

impl Repository {
    /// Opens the repository containing `path`, searching parent directories.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::NotARepository`] if the path is not inside a git
    /// repository with a working directory.
    pub fn open(path: &Path) -> Result<Self> {
        let not_a_repository = || GitError::NotARepository {
            path: path.to_path_buf(),
        };

        let inner = git2::Repository::discover(path).map_err(|_| not_a_repository())?;
        let root = inner.workdir().ok_or_else(not_a_repository)?;

        // Use dunce to get a path without the \\?\ prefix on Windows
        let root = dunce::simplified(root).to_path_buf();

        Ok(Self { inner, root })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps `path` to the form git stores in trees and the index. Absolute
    /// paths are canonicalized first so symlinked temp dirs still match.
    pub(crate) fn to_relative_path(&self, path: &Path) -> PathBuf {
        if !path.is_absolute() {
            return path.to_path_buf();
        }

        let normalized = dunce::simplified(path);
        if let Ok(relative) = normalized.strip_prefix(&self.root) {
            return relative.to_path_buf();
        }

        let canonical_root = dunce::canonicalize(&self.root).unwrap_or_else(|_| self.root.clone());
        let canonical_path = path
            .parent()
            .and_then(|parent| dunce::canonicalize(parent).ok())
            .zip(path.file_name())
            .map_or_else(|| path.to_path_buf(), |(parent, name)| parent.join(name));

        canonical_path
            .strip_prefix(&canonical_root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf)
    }
}
