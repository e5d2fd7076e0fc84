use std::path::{Path, PathBuf};

use mono_changelog::{CommitLinks, VersionRelease};

use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogWriteResult {
    pub path: PathBuf,
    pub created: bool,
}

pub trait ChangelogWriter: Send + Sync {
    /// Prepends `release` below the changelog's title, creating the file if
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the changelog cannot be read or written.
    fn write_release(
        &self,
        changelog_path: &Path,
        release: &VersionRelease,
        links: Option<&CommitLinks>,
    ) -> Result<ChangelogWriteResult>;
}
