use std::cmp::Reverse;
use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::types::{BumpType, ChangeType, CommitRef};

/// Why an in-memory changeset was created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntheticKind {
    /// A package this one depends on is being released.
    DependencyBump { package: String },
    /// The package sits on a prerelease and has no pending changes of its own.
    Finalize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangesetSource {
    /// Backed by a file that is deleted once the changeset is consumed.
    File {
        path: PathBuf,
        commits: Vec<CommitRef>,
    },
    Synthetic(SyntheticKind),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Changeset {
    pub bump: BumpType,
    pub change_type: ChangeType,
    pub message: String,
    pub source: ChangesetSource,
}

impl Changeset {
    #[must_use]
    pub fn from_file(
        path: impl Into<PathBuf>,
        bump: BumpType,
        change_type: ChangeType,
        message: impl Into<String>,
    ) -> Self {
        Self {
            bump,
            change_type,
            message: message.into(),
            source: ChangesetSource::File {
                path: path.into(),
                commits: Vec::new(),
            },
        }
    }

    /// Attaches commit attribution. Has no effect on synthetic changesets.
    #[must_use]
    pub fn with_commits(mut self, new_commits: Vec<CommitRef>) -> Self {
        if let ChangesetSource::File { commits, .. } = &mut self.source {
            *commits = new_commits;
        }
        self
    }

    #[must_use]
    pub fn dependency_bump(package: impl Into<String>, version: &impl fmt::Display) -> Self {
        let package = package.into();
        Self {
            bump: BumpType::Patch,
            change_type: ChangeType::Change,
            message: format!("Update `{package}` dependency to {version}."),
            source: ChangesetSource::Synthetic(SyntheticKind::DependencyBump { package }),
        }
    }

    #[must_use]
    pub fn finalize() -> Self {
        Self {
            bump: BumpType::Patch,
            change_type: ChangeType::Change,
            message: "Release the current prerelease.".to_string(),
            source: ChangesetSource::Synthetic(SyntheticKind::Finalize),
        }
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match &self.source {
            ChangesetSource::File { path, .. } => Some(path),
            ChangesetSource::Synthetic(_) => None,
        }
    }

    /// Commits that touched the backing file, newest first.
    #[must_use]
    pub fn commits(&self) -> &[CommitRef] {
        match &self.source {
            ChangesetSource::File { commits, .. } => commits,
            ChangesetSource::Synthetic(_) => &[],
        }
    }

    #[must_use]
    pub fn is_dependency_bump_for(&self, package: &str) -> bool {
        matches!(
            &self.source,
            ChangesetSource::Synthetic(SyntheticKind::DependencyBump { package: p }) if p == package
        )
    }

    fn latest_commit_date(&self) -> Option<DateTime<Utc>> {
        self.commits().iter().map(|c| c.date).max()
    }
}

/// The pending changesets of a single package.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangesetCollection {
    changesets: Vec<Changeset>,
}

impl ChangesetCollection {
    #[must_use]
    pub fn new(changesets: Vec<Changeset>) -> Self {
        Self { changesets }
    }

    pub fn push(&mut self, changeset: Changeset) {
        self.changesets.push(changeset);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.changesets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changesets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Changeset> {
        self.changesets.iter()
    }

    /// The most severe bump among all held changesets.
    #[must_use]
    pub fn next_bump(&self) -> Option<BumpType> {
        self.changesets.iter().map(|c| c.bump).max()
    }

    #[must_use]
    pub fn has_dependency_bump_for(&self, package: &str) -> bool {
        self.changesets
            .iter()
            .any(|c| c.is_dependency_bump_for(package))
    }

    /// Paths of the file-backed changesets, to be removed once consumed.
    #[must_use]
    pub fn file_paths(&self) -> Vec<&Path> {
        self.changesets.iter().filter_map(Changeset::path).collect()
    }

    /// Changesets in changelog order: change type, then bump severity
    /// (major first), then the date of the newest attributed commit (older
    /// first, synthetic entries last), then message.
    #[must_use]
    pub fn sorted(&self) -> Vec<&Changeset> {
        let mut sorted: Vec<&Changeset> = self.changesets.iter().collect();
        sorted.sort_by(|a, b| {
            let key = |c: &Changeset| {
                let date = c.latest_commit_date();
                (c.change_type, Reverse(c.bump), date.is_none(), date)
            };
            key(a).cmp(&key(b)).then_with(|| a.message.cmp(&b.message))
        });
        sorted
    }
}

impl<'a> IntoIterator for &'a ChangesetCollection {
    type Item = &'a Changeset;
    type IntoIter = std::slice::Iter<'a, Changeset>;

    fn into_iter(self) -> Self::IntoIter {
        self.changesets.iter()
    }
}

impl FromIterator<Changeset> for ChangesetCollection {
    fn from_iter<I: IntoIterator<Item = Changeset>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
