use std::path::Path;

use tracing::info;

use crate::Result;
use crate::dependency_tree::DependencyTree;
use crate::error::OperationError;
use crate::traits::{CommandRunner, ProjectProvider};

/// What to run in each package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunCommand {
    Shell(String),
    /// The configured or language default test command.
    Test,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutput {
    pub command: String,
    /// Packages the command succeeded in, dependency-first.
    pub packages: Vec<String>,
}

pub struct RunOperation<P, X> {
    project_provider: P,
    command_runner: X,
}

impl<P, X> RunOperation<P, X>
where
    P: ProjectProvider,
    X: CommandRunner,
{
    pub fn new(project_provider: P, command_runner: X) -> Self {
        Self {
            project_provider,
            command_runner,
        }
    }

    /// Runs `command` in every package directory, dependencies first.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::CommandFailed`] for the first package where
    /// the command exits unsuccessfully; later packages are not run.
    pub fn execute(&self, start_path: &Path, command: &RunCommand) -> Result<RunOutput> {
        let project = self.project_provider.discover_project(start_path)?;
        let command = match command {
            RunCommand::Shell(command) => command.clone(),
            RunCommand::Test => project
                .config
                .test_command()
                .ok_or_else(|| OperationError::NoCommand {
                    kind: "test",
                    language: project.config.language.as_str().to_string(),
                })?
                .to_string(),
        };
        let tree = DependencyTree::build(project.packages);

        let mut output = RunOutput {
            command,
            packages: Vec::new(),
        };
        let command = output.command.as_str();
        for package in tree.ordered_packages()? {
            info!(package = %package.name, command, "running");
            let status = self.command_runner.run(command, &package.path)?;
            if !status.success {
                return Err(OperationError::CommandFailed {
                    command: command.to_string(),
                    dir: package.path.clone(),
                    code: status.code,
                });
            }
            output.packages.push(package.name.clone());
        }

        Ok(output)
    }
}
