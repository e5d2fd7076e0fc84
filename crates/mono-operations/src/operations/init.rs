use std::path::{Path, PathBuf};

use mono_project::{CONFIG_FILE, Config, Language, ProjectError};
use tracing::{debug, info};

use crate::Result;
use crate::error::OperationError;
use crate::traits::ProjectProvider;

#[derive(Debug, Clone)]
pub struct InitInput {
    pub language: Language,
    /// Set for a monorepo.
    pub packages_dir: Option<PathBuf>,
    pub repo: Option<String>,
}

#[derive(Debug, Clone)]
pub struct InitOutput {
    pub config_path: PathBuf,
    /// Changeset directories that now exist, one per discovered package.
    pub changeset_dirs: Vec<PathBuf>,
}

pub struct InitOperation<P> {
    project_provider: P,
}

impl<P> InitOperation<P>
where
    P: ProjectProvider,
{
    pub fn new(project_provider: P) -> Self {
        Self { project_provider }
    }

    /// Writes a new config file in `root` and creates a changeset directory
    /// for every package found. A monorepo without packages yet is not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns an error if a config already exists, it cannot be written, or
    /// a changeset directory cannot be created.
    pub fn execute(&self, root: &Path, input: &InitInput) -> Result<InitOutput> {
        let mut config = Config::new(input.language);
        config.packages_dir.clone_from(&input.packages_dir);
        config.repo.clone_from(&input.repo);

        let config_path = root.join(CONFIG_FILE);
        config.save_new(&config_path)?;
        info!(path = %config_path.display(), language = input.language.as_str(), "wrote config");

        let project = match self.project_provider.discover_project(root) {
            Ok(project) => project,
            Err(OperationError::Project(ProjectError::NoPackages { dir })) => {
                debug!(dir = %dir.display(), "no packages yet");
                return Ok(InitOutput {
                    config_path,
                    changeset_dirs: Vec::new(),
                });
            }
            Err(err) => return Err(err),
        };

        let mut changeset_dirs = Vec::with_capacity(project.packages.len());
        for package in &project.packages {
            changeset_dirs.push(package.ensure_changeset_dir()?);
        }

        Ok(InitOutput {
            config_path,
            changeset_dirs,
        })
    }
}
