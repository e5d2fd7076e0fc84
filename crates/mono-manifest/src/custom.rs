use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use mono_version::{Version, VersionScheme};

use crate::adapter::{ManifestAdapter, parse_version};
use crate::{ManifestError, Result, files};

pub const DEFAULT_VERSION_FILE: &str = "VERSION";

/// A package whose only manifest is a plain file holding the version.
#[derive(Debug, Clone)]
pub struct CustomAdapter {
    version_file: PathBuf,
    scheme: VersionScheme,
}

impl Default for CustomAdapter {
    fn default() -> Self {
        Self::new(DEFAULT_VERSION_FILE, VersionScheme::default())
    }
}

impl CustomAdapter {
    #[must_use]
    pub fn new(version_file: impl Into<PathBuf>, scheme: VersionScheme) -> Self {
        Self {
            version_file: version_file.into(),
            scheme,
        }
    }
}

impl ManifestAdapter for CustomAdapter {
    fn scheme(&self) -> VersionScheme {
        self.scheme
    }

    fn is_package(&self, dir: &Path) -> bool {
        dir.join(&self.version_file).is_file()
    }

    fn package_name(&self, dir: &Path) -> Result<String> {
        directory_name(dir).ok_or_else(|| ManifestError::MissingField {
            path: dir.to_path_buf(),
            field: "directory name".to_string(),
        })
    }

    fn read_version(&self, dir: &Path) -> Result<Version> {
        let path = dir.join(&self.version_file);
        parse_version(&files::read(&path)?, self.scheme, &path)
    }

    fn write_version(&self, dir: &Path, version: &Version) -> Result<()> {
        let path = dir.join(&self.version_file);
        files::write(&path, &format!("{}\n", version.format(self.scheme)))
    }

    fn read_dependencies(&self, _dir: &Path) -> Result<IndexMap<String, String>> {
        Ok(IndexMap::new())
    }
}

fn directory_name(dir: &Path) -> Option<String> {
    let named = if dir.file_name().is_some() {
        dir.to_path_buf()
    } else {
        std::fs::canonicalize(dir).ok()?
    };
    named.file_name().map(|n| n.to_string_lossy().into_owned())
}
