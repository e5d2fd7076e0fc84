use std::path::{Path, PathBuf};

use mono_core::{BumpType, ChangeType};
use mono_project::{Package, Project};
use tracing::info;

use super::available_packages;
use crate::Result;
use crate::error::OperationError;
use crate::traits::{ChangesetWriter, ProjectProvider};

#[derive(Debug, Clone)]
pub struct AddInput {
    /// Target package. Optional when the project has a single package.
    pub package: Option<String>,
    pub bump: BumpType,
    pub change_type: ChangeType,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOutput {
    pub package: String,
    pub path: PathBuf,
}

pub struct AddOperation<P, W> {
    project_provider: P,
    changeset_writer: W,
}

impl<P, W> AddOperation<P, W>
where
    P: ProjectProvider,
    W: ChangesetWriter,
{
    pub fn new(project_provider: P, changeset_writer: W) -> Self {
        Self {
            project_provider,
            changeset_writer,
        }
    }

    /// Writes a new changeset file into the target package's changeset
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the package cannot be resolved, the message is
    /// empty, or the file cannot be written.
    pub fn execute(&self, start_path: &Path, input: &AddInput) -> Result<AddOutput> {
        let project = self.project_provider.discover_project(start_path)?;
        let package = select_package(&project, input.package.as_deref())?;

        let path = self.changeset_writer.write_changeset(
            &package.changeset_dir(),
            input.bump,
            input.change_type,
            &input.message,
        )?;

        info!(package = %package.name, path = %path.display(), "created changeset");

        Ok(AddOutput {
            package: package.name.clone(),
            path,
        })
    }
}

fn select_package<'a>(project: &'a Project, name: Option<&str>) -> Result<&'a Package> {
    match name {
        Some(name) => project
            .package(name)
            .ok_or_else(|| OperationError::unknown_package(name, &project.package_names())),
        None => match project.packages.as_slice() {
            [only] => Ok(only),
            _ => Err(OperationError::PackageRequired {
                available: available_packages(project),
            }),
        },
    }
}
