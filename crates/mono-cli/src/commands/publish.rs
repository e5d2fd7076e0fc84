use std::path::Path;

use mono_operations::operations::{PublishInput, PublishOperation, PublishOutcome};
use mono_operations::providers::{
    FileSystemChangelogWriter, FileSystemChangesetIO, FileSystemManifestWriter,
    FileSystemProjectProvider, Git2Provider, ShellCommandRunner,
};

use super::PublishArgs;
use crate::error::Result;
use crate::output::{format_plan, format_published};

pub(super) fn run(args: PublishArgs, start_path: &Path) -> Result<()> {
    let input = PublishInput {
        packages: args.packages,
        prerelease: args.prerelease,
        dry_run: args.dry_run,
        no_push: args.no_push,
    };

    let operation = PublishOperation::new(
        FileSystemProjectProvider::new(),
        FileSystemChangesetIO::new(),
        FileSystemManifestWriter::new(),
        FileSystemChangelogWriter::new(),
        Git2Provider::new(),
        ShellCommandRunner::new(),
    );

    match operation.execute(start_path, &input)? {
        PublishOutcome::NothingToPublish => println!("Nothing to publish."),
        PublishOutcome::DryRun(plan) => print!("{}", format_plan(&plan)),
        PublishOutcome::Published(output) => print!("{}", format_published(&output)),
    }
    Ok(())
}
