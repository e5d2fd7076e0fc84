use std::path::Path;

use crate::Result;

use super::Repository;

impl Repository {
    /// Stages additions, modifications and removals of `paths`.
    ///
    /// # Errors
    ///
    /// Returns an error if updating the index fails.
    pub fn stage_files(&self, paths: &[&Path]) -> Result<()> {
        let mut index = self.inner.index()?;

        for path in paths {
            let relative_path = self.to_relative_path(path);

            if self.root().join(&relative_path).exists() {
                index.add_path(&relative_path)?;
            } else {
                index.remove_path(&relative_path)?;
            }
        }

        index.write()?;
        Ok(())
    }

    /// Stages every change in the working tree, including deletions.
    ///
    /// # Errors
    ///
    /// Returns an error if updating the index fails.
    pub fn stage_all(&self) -> Result<()> {
        let mut index = self.inner.index()?;

        index.add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)?;
        index.update_all(["*"].iter(), None)?;
        index.write()?;

        Ok(())
    }
}
