use std::path::Path;

use indexmap::IndexMap;
use mono_version::{Version, VersionScheme};

use crate::Result;

/// Reads and rewrites one ecosystem's package manifest. Every method takes
/// the package directory explicitly.
pub trait ManifestAdapter {
    /// Scheme the ecosystem writes versions in.
    fn scheme(&self) -> VersionScheme;

    /// Whether `dir` contains this ecosystem's manifest.
    fn is_package(&self, dir: &Path) -> bool;

    /// # Errors
    ///
    /// Returns an error if the manifest is missing or declares no name.
    fn package_name(&self, dir: &Path) -> Result<String>;

    /// # Errors
    ///
    /// Returns an error if the version cannot be located or parsed.
    fn read_version(&self, dir: &Path) -> Result<Version>;

    /// Rewrites the version in place, leaving the rest of the file untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be read or written.
    fn write_version(&self, dir: &Path, version: &Version) -> Result<()>;

    /// Declared dependencies mapped to their constraints, in file order.
    /// Dependencies declared without a constraint map to an empty string.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be read.
    fn read_dependencies(&self, dir: &Path) -> Result<IndexMap<String, String>>;

    /// Points the declared constraint on `name` at `version` when it no
    /// longer admits it. Returns whether the manifest changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be read or written.
    fn update_dependency(&self, dir: &Path, name: &str, version: &Version) -> Result<bool> {
        let _ = (dir, name, version);
        Ok(false)
    }
}

impl<T: ManifestAdapter + ?Sized> ManifestAdapter for Box<T> {
    fn scheme(&self) -> VersionScheme {
        (**self).scheme()
    }

    fn is_package(&self, dir: &Path) -> bool {
        (**self).is_package(dir)
    }

    fn package_name(&self, dir: &Path) -> Result<String> {
        (**self).package_name(dir)
    }

    fn read_version(&self, dir: &Path) -> Result<Version> {
        (**self).read_version(dir)
    }

    fn write_version(&self, dir: &Path, version: &Version) -> Result<()> {
        (**self).write_version(dir, version)
    }

    fn read_dependencies(&self, dir: &Path) -> Result<IndexMap<String, String>> {
        (**self).read_dependencies(dir)
    }

    fn update_dependency(&self, dir: &Path, name: &str, version: &Version) -> Result<bool> {
        (**self).update_dependency(dir, name, version)
    }
}

pub(crate) fn parse_version(
    raw: &str,
    scheme: VersionScheme,
    path: &Path,
) -> Result<Version> {
    Version::parse(raw.trim(), scheme).map_err(|source| crate::ManifestError::InvalidVersion {
        path: path.to_path_buf(),
        source,
    })
}
