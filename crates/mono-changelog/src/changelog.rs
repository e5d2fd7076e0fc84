use std::path::Path;

use crate::entry::{CommitLinks, VersionRelease};
use crate::error::ChangelogError;
use crate::format::format_version_release;

pub const CHANGELOG_FILE: &str = "CHANGELOG.md";

const CHANGELOG_TITLE: &str = "# Changelog\n";

#[derive(Debug, Clone)]
pub struct Changelog {
    content: String,
}

impl Default for Changelog {
    fn default() -> Self {
        Self::new()
    }
}

impl Changelog {
    #[must_use]
    pub fn new() -> Self {
        Self {
            content: CHANGELOG_TITLE.to_string(),
        }
    }

    #[must_use]
    pub fn from_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// # Errors
    ///
    /// Returns `ChangelogError::Read` if the file cannot be read.
    pub fn from_file(path: &Path) -> Result<Self, ChangelogError> {
        let content = std::fs::read_to_string(path).map_err(|source| ChangelogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self { content })
    }

    /// Reads the changelog at `path`, or starts a new one if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `ChangelogError::Read` if an existing file cannot be read.
    pub fn open_or_new(path: &Path) -> Result<Self, ChangelogError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::new())
        }
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Length of the leading `# ` title line, if the file starts with one.
    fn title_len(&self) -> usize {
        if !self.content.starts_with("# ") {
            return 0;
        }
        self.content
            .find('\n')
            .map_or(self.content.len(), |pos| pos + 1)
    }

    /// Inserts `release` as the newest entry, directly below the title line.
    pub fn add_release(&mut self, release: &VersionRelease, links: Option<&CommitLinks>) {
        let formatted = format_version_release(release, links);
        let (title, rest) = self.content.split_at(self.title_len());

        let mut new_content =
            String::with_capacity(self.content.len() + formatted.len() + 4);

        if !title.is_empty() {
            new_content.push_str(title.trim_end());
            new_content.push_str("\n\n");
        }
        new_content.push_str(formatted.trim_end());
        new_content.push('\n');

        let rest = rest.trim_start_matches(['\n', '\r']);
        if !rest.is_empty() {
            new_content.push('\n');
            new_content.push_str(rest);
        }

        self.content = new_content;
    }

    /// # Errors
    ///
    /// Returns `ChangelogError::Write` if the file cannot be written.
    pub fn write_to_file(&self, path: &Path) -> Result<(), ChangelogError> {
        std::fs::write(path, &self.content).map_err(|source| ChangelogError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
