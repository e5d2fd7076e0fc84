use std::path::Path;

use mono_project::Config;
use mono_version::Version;

use crate::Result;
use crate::traits::ManifestWriter;

/// Writes through the manifest adapter of the configured language.
pub struct FileSystemManifestWriter;

impl FileSystemManifestWriter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemManifestWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestWriter for FileSystemManifestWriter {
    fn write_version(&self, config: &Config, package_dir: &Path, version: &Version) -> Result<()> {
        Ok(config.adapter().write_version(package_dir, version)?)
    }

    fn update_dependency(
        &self,
        config: &Config,
        package_dir: &Path,
        dependency: &str,
        version: &Version,
    ) -> Result<bool> {
        Ok(config
            .adapter()
            .update_dependency(package_dir, dependency, version)?)
    }
}
