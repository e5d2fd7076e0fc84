use std::path::Path;

use mono_operations::operations::{RunCommand, RunOperation, RunOutput};
use mono_operations::providers::{FileSystemProjectProvider, ShellCommandRunner};

use super::RunArgs;
use crate::error::{CliError, Result};

pub(super) fn run(args: &RunArgs, start_path: &Path) -> Result<()> {
    if args.command.is_empty() {
        return Err(CliError::MissingCommand);
    }
    execute(start_path, &RunCommand::Shell(args.command.join(" ")))
}

pub(super) fn test(start_path: &Path) -> Result<()> {
    execute(start_path, &RunCommand::Test)
}

fn execute(start_path: &Path, command: &RunCommand) -> Result<()> {
    let operation = RunOperation::new(FileSystemProjectProvider::new(), ShellCommandRunner::new());
    let RunOutput { command, packages } = operation.execute(start_path, command)?;

    println!("Ran `{command}` in {} package(s): {}", packages.len(), packages.join(", "));
    Ok(())
}
