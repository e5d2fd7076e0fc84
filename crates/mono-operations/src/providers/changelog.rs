use std::path::Path;

use mono_changelog::{Changelog, CommitLinks, VersionRelease};

use crate::Result;
use crate::traits::{ChangelogWriteResult, ChangelogWriter};

pub struct FileSystemChangelogWriter;

impl FileSystemChangelogWriter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemChangelogWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangelogWriter for FileSystemChangelogWriter {
    fn write_release(
        &self,
        changelog_path: &Path,
        release: &VersionRelease,
        links: Option<&CommitLinks>,
    ) -> Result<ChangelogWriteResult> {
        let created = !changelog_path.exists();

        let mut changelog = Changelog::open_or_new(changelog_path)?;
        changelog.add_release(release, links);
        changelog.write_to_file(changelog_path)?;

        Ok(ChangelogWriteResult {
            path: changelog_path.to_path_buf(),
            created,
        })
    }
}
