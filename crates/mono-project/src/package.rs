use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use mono_core::{BumpType, Changeset, ChangesetCollection};
use mono_manifest::ManifestAdapter;
use mono_version::{Version, VersionScheme};

use crate::CHANGESETS_DIR;
use crate::error::ProjectError;

/// A unit of independent versioning. `changesets` starts empty and is
/// filled by whoever reads the pending changeset files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub name: String,
    pub path: PathBuf,
    pub version: Version,
    pub scheme: VersionScheme,
    /// Declared dependency names mapped to their constraints.
    pub dependencies: IndexMap<String, String>,
    pub changesets: ChangesetCollection,
}

impl Package {
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, version: Version) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            version,
            scheme: VersionScheme::default(),
            dependencies: IndexMap::new(),
            changesets: ChangesetCollection::default(),
        }
    }

    #[must_use]
    pub fn with_scheme(mut self, scheme: VersionScheme) -> Self {
        self.scheme = scheme;
        self
    }

    #[must_use]
    pub fn with_dependency(
        mut self,
        name: impl Into<String>,
        constraint: impl Into<String>,
    ) -> Self {
        self.dependencies.insert(name.into(), constraint.into());
        self
    }

    #[must_use]
    pub fn with_changeset(mut self, changeset: Changeset) -> Self {
        self.changesets.push(changeset);
        self
    }

    /// Reads name, version and dependencies from the package's manifest.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be read.
    pub fn load(dir: &Path, adapter: &dyn ManifestAdapter) -> Result<Self, ProjectError> {
        Ok(Self {
            name: adapter.package_name(dir)?,
            path: dir.to_path_buf(),
            version: adapter.read_version(dir)?,
            scheme: adapter.scheme(),
            dependencies: adapter.read_dependencies(dir)?,
            changesets: ChangesetCollection::default(),
        })
    }

    #[must_use]
    pub fn changeset_dir(&self) -> PathBuf {
        self.path.join(CHANGESETS_DIR)
    }

    /// # Errors
    ///
    /// Returns [`ProjectError::ChangesetDirCreate`] if the directory cannot
    /// be created.
    pub fn ensure_changeset_dir(&self) -> Result<PathBuf, ProjectError> {
        let dir = self.changeset_dir();
        std::fs::create_dir_all(&dir).map_err(|source| ProjectError::ChangesetDirCreate {
            path: dir.clone(),
            source,
        })?;
        Ok(dir)
    }

    #[must_use]
    pub fn next_bump(&self) -> Option<BumpType> {
        self.changesets.next_bump()
    }

    #[must_use]
    pub fn formatted_version(&self) -> String {
        self.version.format(self.scheme)
    }
}
