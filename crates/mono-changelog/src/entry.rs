use mono_core::{BumpType, ChangeType, Changeset, ChangesetCollection, CommitRef};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogEntry {
    pub change_type: ChangeType,
    pub bump: BumpType,
    pub message: String,
    /// Newest first.
    pub commits: Vec<CommitRef>,
}

impl ChangelogEntry {
    #[must_use]
    pub fn new(change_type: ChangeType, bump: BumpType, message: impl Into<String>) -> Self {
        Self {
            change_type,
            bump,
            message: message.into(),
            commits: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_commits(mut self, commits: Vec<CommitRef>) -> Self {
        self.commits = commits;
        self
    }
}

impl From<&Changeset> for ChangelogEntry {
    fn from(changeset: &Changeset) -> Self {
        Self::new(changeset.change_type, changeset.bump, &changeset.message)
            .with_commits(changeset.commits().to_vec())
    }
}

/// Builds commit URLs from a repository's web address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitLinks {
    base: String,
}

impl CommitLinks {
    #[must_use]
    pub fn new(repository_url: &str) -> Self {
        let base = repository_url.trim_end_matches('/');
        let base = base.strip_suffix(".git").unwrap_or(base);
        Self {
            base: base.to_string(),
        }
    }

    #[must_use]
    pub fn commit_url(&self, sha: &str) -> String {
        format!("{}/commit/{sha}", self.base)
    }
}

/// A rendered-to-be release of one package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRelease {
    /// Already formatted in the package's version scheme.
    pub version: String,
    pub entries: Vec<ChangelogEntry>,
}

impl VersionRelease {
    #[must_use]
    pub fn new(version: impl Into<String>, entries: Vec<ChangelogEntry>) -> Self {
        Self {
            version: version.into(),
            entries,
        }
    }

    /// Entries for every changeset in `collection`, in changelog order.
    #[must_use]
    pub fn from_collection(version: impl Into<String>, collection: &ChangesetCollection) -> Self {
        let entries = collection
            .sorted()
            .into_iter()
            .map(ChangelogEntry::from)
            .collect();
        Self::new(version, entries)
    }
}
