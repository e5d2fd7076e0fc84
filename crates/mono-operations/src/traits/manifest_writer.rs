use std::path::Path;

use mono_project::Config;
use mono_version::Version;

use crate::Result;

pub trait ManifestWriter: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be read or written.
    fn write_version(&self, config: &Config, package_dir: &Path, version: &Version) -> Result<()>;

    /// Returns whether the constraint on `dependency` had to change.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be read or written.
    fn update_dependency(
        &self,
        config: &Config,
        package_dir: &Path,
        dependency: &str,
        version: &Version,
    ) -> Result<bool>;
}
