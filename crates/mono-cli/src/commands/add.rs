use std::path::Path;

use mono_operations::operations::{AddInput, AddOperation};
use mono_operations::providers::{FileSystemChangesetIO, FileSystemProjectProvider};

use super::AddArgs;
use crate::error::Result;

pub(super) fn run(args: AddArgs, start_path: &Path) -> Result<()> {
    let input = AddInput {
        package: args.package,
        bump: args.bump,
        change_type: args.change_type,
        message: args.message,
    };

    let operation =
        AddOperation::new(FileSystemProjectProvider::new(), FileSystemChangesetIO::new());
    let output = operation.execute(start_path, &input)?;

    println!("Created changeset for {}: {}", output.package, output.path.display());
    Ok(())
}
