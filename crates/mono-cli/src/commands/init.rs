use std::path::Path;

use mono_operations::operations::{InitInput, InitOperation};
use mono_operations::providers::FileSystemProjectProvider;

use super::InitArgs;
use crate::error::Result;

pub(super) fn run(args: InitArgs, start_path: &Path) -> Result<()> {
    let input = InitInput {
        language: args.language,
        packages_dir: args.packages_dir,
        repo: args.repo,
    };

    let output = InitOperation::new(FileSystemProjectProvider::new()).execute(start_path, &input)?;

    println!("Created {}", output.config_path.display());
    for dir in &output.changeset_dirs {
        println!("Created {}", dir.display());
    }
    Ok(())
}
