use std::path::{Path, PathBuf};

use mono_manifest::ManifestAdapter;
use mono_version::Version;

use crate::CONFIG_FILE;
use crate::config::Config;
use crate::error::ProjectError;
use crate::package::Package;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectKind {
    SinglePackage,
    Monorepo,
}

#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
    pub config: Config,
    pub kind: ProjectKind,
    /// Sorted by name.
    pub packages: Vec<Package>,
}

impl Project {
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    #[must_use]
    pub fn package(&self, name: &str) -> Option<&Package> {
        self.packages.iter().find(|p| p.name == name)
    }

    #[must_use]
    pub fn package_names(&self) -> Vec<String> {
        self.packages.iter().map(|p| p.name.clone()).collect()
    }

    /// `<name>-v<version>` in a monorepo, `<tag_prefix><version>` otherwise.
    #[must_use]
    pub fn tag_name(&self, package: &Package, version: &Version) -> String {
        let formatted = version.format(package.scheme);
        match self.kind {
            ProjectKind::Monorepo => format!("{}-v{formatted}", package.name),
            ProjectKind::SinglePackage => format!("{}{formatted}", self.config.tag_prefix()),
        }
    }
}

/// Finds the nearest `mono.yml` at or above `start_dir` and loads every
/// package it describes.
///
/// # Errors
///
/// Returns [`ProjectError::ConfigNotFound`] if no config exists, or an error
/// if the config or a package manifest cannot be read.
pub fn discover_project(start_dir: &Path) -> Result<Project, ProjectError> {
    let not_found = || ProjectError::ConfigNotFound {
        start_dir: start_dir.to_path_buf(),
    };
    let start = start_dir.canonicalize().map_err(|_| not_found())?;
    let root = start
        .ancestors()
        .find(|dir| dir.join(CONFIG_FILE).is_file())
        .ok_or_else(not_found)?
        .to_path_buf();

    let config = Config::load(&root.join(CONFIG_FILE))?;
    let adapter = config.adapter();

    let (kind, mut packages) = match &config.packages_dir {
        Some(packages_dir) => (
            ProjectKind::Monorepo,
            collect_packages(&root.join(packages_dir), adapter.as_ref())?,
        ),
        None => (
            ProjectKind::SinglePackage,
            vec![Package::load(&root, adapter.as_ref())?],
        ),
    };
    packages.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(Project {
        root,
        config,
        kind,
        packages,
    })
}

fn collect_packages(
    packages_dir: &Path,
    adapter: &dyn ManifestAdapter,
) -> Result<Vec<Package>, ProjectError> {
    let read_error = |source: std::io::Error| ProjectError::PackagesDirRead {
        path: packages_dir.to_path_buf(),
        source,
    };

    let mut dirs: Vec<PathBuf> = std::fs::read_dir(packages_dir)
        .map_err(read_error)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_dir() && adapter.is_package(path))
        .collect();
    dirs.sort();

    if dirs.is_empty() {
        return Err(ProjectError::NoPackages {
            dir: packages_dir.to_path_buf(),
        });
    }

    let mut packages = dirs
        .iter()
        .map(|dir| Package::load(dir, adapter))
        .collect::<Result<Vec<_>, _>>()?;
    packages.sort_by(|a, b| a.name.cmp(&b.name));

    if let Some(pair) = packages.windows(2).find(|pair| pair[0].name == pair[1].name) {
        return Err(ProjectError::DuplicatePackage {
            name: pair[0].name.clone(),
            first: pair[0].path.clone(),
            second: pair[1].path.clone(),
        });
    }

    Ok(packages)
}
