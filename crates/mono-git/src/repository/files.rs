use std::path::Path;

use crate::{GitError, Result};

use super::Repository;

impl Repository {
    /// Deletes a consumed changeset (or any tracked file) from disk and from
    /// the index.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::FileDelete`] if the file cannot be deleted.
    pub fn delete_file(&self, path: &Path) -> Result<()> {
        let absolute_path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root().join(path)
        };

        std::fs::remove_file(&absolute_path).map_err(|source| GitError::FileDelete {
            path: absolute_path.clone(),
            source,
        })?;

        let mut index = self.inner.index()?;
        index.remove_path(&self.to_relative_path(&absolute_path))?;
        index.write()?;

        Ok(())
    }
}
