use std::path::Path;

use mono_operations::operations::{StatusInput, StatusOperation};
use mono_operations::providers::{FileSystemChangesetIO, FileSystemProjectProvider, Git2Provider};

use super::StatusArgs;
use crate::error::Result;
use crate::output::format_status;

pub(super) fn run(args: &StatusArgs, start_path: &Path) -> Result<()> {
    let operation = StatusOperation::new(
        FileSystemProjectProvider::new(),
        FileSystemChangesetIO::new(),
        Git2Provider::new(),
    );
    let output = operation.execute(
        start_path,
        &StatusInput {
            prerelease: args.prerelease,
        },
    )?;

    print!("{}", format_status(&output));
    Ok(())
}
