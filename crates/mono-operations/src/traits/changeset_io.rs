use std::path::{Path, PathBuf};

use mono_core::{BumpType, ChangeType, Changeset};

use crate::Result;

pub trait ChangesetReader: Send + Sync {
    /// Pending changeset files in `changeset_dir`, sorted. A missing
    /// directory has none.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be listed.
    fn list_changesets(&self, changeset_dir: &Path) -> Result<Vec<PathBuf>>;

    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    fn read_changeset(&self, path: &Path) -> Result<Changeset>;
}

pub trait ChangesetWriter: Send + Sync {
    /// Writes a new changeset file under a unique name and returns its path.
    ///
    /// # Errors
    ///
    /// Returns an error if the message is empty or the file cannot be written.
    fn write_changeset(
        &self,
        changeset_dir: &Path,
        bump: BumpType,
        change_type: ChangeType,
        message: &str,
    ) -> Result<PathBuf>;
}
