use std::path::Path;

use mono_core::CommitRef;
use mono_git::{CommitInfo, TagInfo};

use crate::Result;

pub trait GitProvider: Send + Sync {
    /// Commits that touched `path`, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be walked.
    fn file_history(&self, path: &Path) -> Result<Vec<CommitRef>>;

    /// # Errors
    ///
    /// Returns an error if the file cannot be deleted or unstaged.
    fn delete_file(&self, project_root: &Path, path: &Path) -> Result<()>;

    /// # Errors
    ///
    /// Returns an error if the index cannot be updated.
    fn stage_all(&self, project_root: &Path) -> Result<()>;

    /// # Errors
    ///
    /// Returns an error if the commit cannot be created.
    fn commit(&self, project_root: &Path, message: &str) -> Result<CommitInfo>;

    /// # Errors
    ///
    /// Returns an error if the tag cannot be created or already exists.
    fn create_tag(&self, project_root: &Path, tag_name: &str, message: &str) -> Result<TagInfo>;
}
