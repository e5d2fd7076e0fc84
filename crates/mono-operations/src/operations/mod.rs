mod add;
mod init;
mod plan;
mod publish;
mod run;
mod status;

pub use add::{AddInput, AddOperation, AddOutput};
pub use init::{InitInput, InitOperation, InitOutput};
pub use plan::{PlannedRelease, ReleasePlan, ReleasePlanner};
pub use publish::{PublishInput, PublishOperation, PublishOutcome, PublishOutput, PublishedPackage};
pub use run::{RunCommand, RunOperation, RunOutput};
pub use status::{PackageStatus, StatusInput, StatusOperation, StatusOutput};

use mono_project::Project;

use crate::Result;
use crate::traits::{ChangesetReader, GitProvider};

/// Fills every package's changeset collection from its changeset directory,
/// attaching the commits that touched each file.
fn load_changesets<R, G>(project: &mut Project, reader: &R, git: &G) -> Result<()>
where
    R: ChangesetReader,
    G: GitProvider,
{
    for package in &mut project.packages {
        for path in reader.list_changesets(&package.changeset_dir())? {
            let commits = git.file_history(&path)?;
            let changeset = reader.read_changeset(&path)?.with_commits(commits);
            package.changesets.push(changeset);
        }
        tracing::debug!(
            package = %package.name,
            changesets = package.changesets.len(),
            "loaded changesets"
        );
    }
    Ok(())
}

fn available_packages(project: &Project) -> String {
    project.package_names().join(", ")
}
