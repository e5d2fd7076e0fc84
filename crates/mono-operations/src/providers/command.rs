use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::Result;
use crate::error::OperationError;
use crate::traits::{CommandRunner, CommandStatus};

/// Runs commands through the platform shell, inheriting stdio.
pub struct ShellCommandRunner;

impl ShellCommandRunner {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for ShellCommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

fn shell(command: &str) -> Command {
    if cfg!(windows) {
        let mut shell = Command::new("cmd");
        shell.args(["/C", command]);
        shell
    } else {
        let mut shell = Command::new("sh");
        shell.args(["-c", command]);
        shell
    }
}

impl CommandRunner for ShellCommandRunner {
    fn run(&self, command: &str, dir: &Path) -> Result<CommandStatus> {
        debug!(command, dir = %dir.display(), "running command");

        let status = shell(command)
            .current_dir(dir)
            .status()
            .map_err(|source| OperationError::CommandSpawn {
                command: command.to_string(),
                dir: dir.to_path_buf(),
                source,
            })?;

        Ok(CommandStatus {
            success: status.success(),
            code: status.code(),
        })
    }
}
