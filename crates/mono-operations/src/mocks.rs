use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use mono_changelog::{CommitLinks, VersionRelease};
use mono_core::{BumpType, ChangeType, Changeset, CommitRef};
use mono_git::{CommitInfo, TagInfo};
use mono_project::{Config, Language, Package, Project, ProjectKind};
use mono_version::{Version, VersionScheme};

use crate::Result;
use crate::error::OperationError;
use crate::traits::{
    ChangelogWriteResult, ChangelogWriter, ChangesetReader, ChangesetWriter, CommandRunner,
    CommandStatus, GitProvider, ManifestWriter, ProjectProvider,
};

pub(crate) const MOCK_ROOT: &str = "/mock";

/// A Node package under `/mock/packages/<name>`.
///
/// # Panics
///
/// Panics if the version is not valid semver.
pub(crate) fn node_package(name: &str, version: &str, dependencies: &[&str]) -> Package {
    let version = Version::parse(version, VersionScheme::Semver).expect("valid version");
    dependencies.iter().fold(
        Package::new(name, Path::new(MOCK_ROOT).join("packages").join(name), version),
        |package, dep| package.with_dependency(*dep, "^0.0.0"),
    )
}

pub(crate) fn monorepo(mut packages: Vec<Package>) -> Project {
    packages.sort_by(|a, b| a.name.cmp(&b.name));
    let mut config = Config::new(Language::Nodejs);
    config.packages_dir = Some(PathBuf::from("packages"));
    Project {
        root: PathBuf::from(MOCK_ROOT),
        config,
        kind: ProjectKind::Monorepo,
        packages,
    }
}

pub(crate) fn single_package(package: Package) -> Project {
    Project {
        root: PathBuf::from(MOCK_ROOT),
        config: Config::new(Language::Nodejs),
        kind: ProjectKind::SinglePackage,
        packages: vec![Package {
            path: PathBuf::from(MOCK_ROOT),
            ..package
        }],
    }
}

pub(crate) struct MockProjectProvider {
    project: Project,
}

impl MockProjectProvider {
    pub(crate) fn new(project: Project) -> Self {
        Self { project }
    }

    pub(crate) fn monorepo(packages: Vec<Package>) -> Self {
        Self::new(monorepo(packages))
    }

    pub(crate) fn with_repo(mut self, url: &str) -> Self {
        self.project.config.repo = Some(url.to_string());
        self
    }
}

impl ProjectProvider for MockProjectProvider {
    fn discover_project(&self, _start_path: &Path) -> Result<Project> {
        Ok(self.project.clone())
    }
}

#[derive(Clone, Default)]
pub(crate) struct MockChangesetReader {
    changesets: Arc<Mutex<Vec<Changeset>>>,
}

impl MockChangesetReader {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub(crate) fn with_changeset(
        self,
        path: &str,
        bump: BumpType,
        change_type: ChangeType,
        message: &str,
    ) -> Self {
        self.changesets
            .lock()
            .expect("lock poisoned")
            .push(Changeset::from_file(path, bump, change_type, message));
        self
    }

    /// Changesets written through [`ChangesetWriter`].
    pub(crate) fn written(&self) -> Vec<Changeset> {
        self.changesets.lock().expect("lock poisoned").clone()
    }
}

impl ChangesetReader for MockChangesetReader {
    fn list_changesets(&self, changeset_dir: &Path) -> Result<Vec<PathBuf>> {
        let changesets = self.changesets.lock().expect("lock poisoned");
        let mut paths: Vec<PathBuf> = changesets
            .iter()
            .filter_map(Changeset::path)
            .filter(|path| path.parent() == Some(changeset_dir))
            .map(Path::to_path_buf)
            .collect();
        paths.sort();
        Ok(paths)
    }

    fn read_changeset(&self, path: &Path) -> Result<Changeset> {
        self.changesets
            .lock()
            .expect("lock poisoned")
            .iter()
            .find(|c| c.path() == Some(path))
            .cloned()
            .ok_or_else(|| OperationError::ChangesetFileRead {
                path: path.to_path_buf(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            })
    }
}

impl ChangesetWriter for MockChangesetReader {
    fn write_changeset(
        &self,
        changeset_dir: &Path,
        bump: BumpType,
        change_type: ChangeType,
        message: &str,
    ) -> Result<PathBuf> {
        if message.trim().is_empty() {
            return Err(mono_parse::FormatError::EmptyMessage.into());
        }
        let mut changesets = self.changesets.lock().expect("lock poisoned");
        let path = changeset_dir.join(format!("changeset-{}.md", changesets.len()));
        changesets.push(Changeset::from_file(&path, bump, change_type, message.trim()));
        Ok(path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum GitCall {
    Delete(PathBuf),
    StageAll,
    Commit(String),
    Tag(String),
}

#[derive(Clone, Default)]
pub(crate) struct MockGitProvider {
    history: Arc<HashMap<PathBuf, Vec<CommitRef>>>,
    calls: Arc<Mutex<Vec<GitCall>>>,
}

impl MockGitProvider {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_history(mut self, path: &str, commits: Vec<CommitRef>) -> Self {
        Arc::make_mut(&mut self.history).insert(PathBuf::from(path), commits);
        self
    }

    pub(crate) fn calls(&self) -> Vec<GitCall> {
        self.calls.lock().expect("lock poisoned").clone()
    }

    fn record(&self, call: GitCall) {
        self.calls.lock().expect("lock poisoned").push(call);
    }
}

impl GitProvider for MockGitProvider {
    fn file_history(&self, path: &Path) -> Result<Vec<CommitRef>> {
        Ok(self.history.get(path).cloned().unwrap_or_default())
    }

    fn delete_file(&self, _project_root: &Path, path: &Path) -> Result<()> {
        self.record(GitCall::Delete(path.to_path_buf()));
        Ok(())
    }

    fn stage_all(&self, _project_root: &Path) -> Result<()> {
        self.record(GitCall::StageAll);
        Ok(())
    }

    fn commit(&self, _project_root: &Path, message: &str) -> Result<CommitInfo> {
        self.record(GitCall::Commit(message.to_string()));
        Ok(CommitInfo {
            sha: "0123456789abcdef".to_string(),
            message: message.to_string(),
        })
    }

    fn create_tag(&self, _project_root: &Path, tag_name: &str, _message: &str) -> Result<TagInfo> {
        self.record(GitCall::Tag(tag_name.to_string()));
        Ok(TagInfo {
            name: tag_name.to_string(),
            target_sha: "0123456789abcdef".to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ManifestCall {
    Version { dir: PathBuf, version: Version },
    Dependency { dir: PathBuf, name: String, version: Version },
}

#[derive(Clone, Default)]
pub(crate) struct MockManifestWriter {
    calls: Arc<Mutex<Vec<ManifestCall>>>,
}

impl MockManifestWriter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn calls(&self) -> Vec<ManifestCall> {
        self.calls.lock().expect("lock poisoned").clone()
    }
}

impl ManifestWriter for MockManifestWriter {
    fn write_version(&self, _config: &Config, package_dir: &Path, version: &Version) -> Result<()> {
        self.calls.lock().expect("lock poisoned").push(ManifestCall::Version {
            dir: package_dir.to_path_buf(),
            version: *version,
        });
        Ok(())
    }

    fn update_dependency(
        &self,
        _config: &Config,
        package_dir: &Path,
        dependency: &str,
        version: &Version,
    ) -> Result<bool> {
        self.calls.lock().expect("lock poisoned").push(ManifestCall::Dependency {
            dir: package_dir.to_path_buf(),
            name: dependency.to_string(),
            version: *version,
        });
        Ok(true)
    }
}

#[derive(Clone, Default)]
pub(crate) struct MockChangelogWriter {
    written: Arc<Mutex<Vec<(PathBuf, VersionRelease, bool)>>>,
}

impl MockChangelogWriter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// `(path, release, linked)` for every write.
    pub(crate) fn written(&self) -> Vec<(PathBuf, VersionRelease, bool)> {
        self.written.lock().expect("lock poisoned").clone()
    }
}

impl ChangelogWriter for MockChangelogWriter {
    fn write_release(
        &self,
        changelog_path: &Path,
        release: &VersionRelease,
        links: Option<&CommitLinks>,
    ) -> Result<ChangelogWriteResult> {
        self.written.lock().expect("lock poisoned").push((
            changelog_path.to_path_buf(),
            release.clone(),
            links.is_some(),
        ));
        Ok(ChangelogWriteResult {
            path: changelog_path.to_path_buf(),
            created: false,
        })
    }
}

#[derive(Clone, Default)]
pub(crate) struct MockCommandRunner {
    failing: Option<String>,
    unspawnable: bool,
    calls: Arc<Mutex<Vec<(String, PathBuf)>>>,
}

impl MockCommandRunner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Reports exit code 1 for `command`.
    pub(crate) fn failing_on(mut self, command: &str) -> Self {
        self.failing = Some(command.to_string());
        self
    }

    pub(crate) fn unspawnable(mut self) -> Self {
        self.unspawnable = true;
        self
    }

    pub(crate) fn calls(&self) -> Vec<(String, PathBuf)> {
        self.calls.lock().expect("lock poisoned").clone()
    }
}

impl CommandRunner for MockCommandRunner {
    fn run(&self, command: &str, dir: &Path) -> Result<CommandStatus> {
        if self.unspawnable {
            return Err(OperationError::CommandSpawn {
                command: command.to_string(),
                dir: dir.to_path_buf(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            });
        }
        self.calls
            .lock()
            .expect("lock poisoned")
            .push((command.to_string(), dir.to_path_buf()));
        if self.failing.as_deref() == Some(command) {
            return Ok(CommandStatus::failed(1));
        }
        Ok(CommandStatus::succeeded())
    }
}
