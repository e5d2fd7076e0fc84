use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use mono_changelog::{CHANGELOG_FILE, CommitLinks};
use mono_core::PrereleaseTrack;
use mono_git::CommitInfo;
use mono_project::Project;
use tracing::{debug, info};

use super::load_changesets;
use super::plan::{PlannedRelease, ReleasePlan, ReleasePlanner};
use crate::Result;
use crate::error::OperationError;
use crate::traits::{
    ChangelogWriter, ChangesetReader, CommandRunner, GitProvider, ManifestWriter, ProjectProvider,
};

pub(crate) const PUSH_COMMAND: &str = "git push --follow-tags";

#[derive(Debug, Clone, Default)]
pub struct PublishInput {
    /// Restricts which packages seed the release. Dependents of a seed are
    /// still released.
    pub packages: Vec<String>,
    pub prerelease: Option<PrereleaseTrack>,
    pub dry_run: bool,
    pub no_push: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedPackage {
    pub name: String,
    pub version: String,
    pub tag: String,
}

#[derive(Debug, Clone)]
pub struct PublishOutput {
    pub packages: Vec<PublishedPackage>,
    pub commit: CommitInfo,
    pub changelogs: Vec<PathBuf>,
    pub changesets_consumed: Vec<PathBuf>,
    pub pushed: bool,
}

#[derive(Debug)]
pub enum PublishOutcome {
    NothingToPublish,
    DryRun(ReleasePlan),
    Published(PublishOutput),
}

pub struct PublishOperation<P, R, M, C, G, X> {
    project_provider: P,
    changeset_reader: R,
    manifest_writer: M,
    changelog_writer: C,
    git_provider: G,
    command_runner: X,
}

impl<P, R, M, C, G, X> PublishOperation<P, R, M, C, G, X>
where
    P: ProjectProvider,
    R: ChangesetReader,
    M: ManifestWriter,
    C: ChangelogWriter,
    G: GitProvider,
    X: CommandRunner,
{
    pub fn new(
        project_provider: P,
        changeset_reader: R,
        manifest_writer: M,
        changelog_writer: C,
        git_provider: G,
        command_runner: X,
    ) -> Self {
        Self {
            project_provider,
            changeset_reader,
            manifest_writer,
            changelog_writer,
            git_provider,
            command_runner,
        }
    }

    /// Plans the release in memory, then applies it unless `dry_run` is set.
    /// Planning errors (unknown package, cycle, downgrade) leave every file
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if planning fails, a file cannot be written, a git
    /// step fails, or a build, publish or push command exits unsuccessfully.
    pub fn execute(&self, start_path: &Path, input: &PublishInput) -> Result<PublishOutcome> {
        let mut project = self.project_provider.discover_project(start_path)?;
        load_changesets(&mut project, &self.changeset_reader, &self.git_provider)?;

        let plan = ReleasePlanner::new(input.prerelease)
            .with_seeds(input.packages.clone())
            .plan(&project)?;

        if plan.is_empty() {
            info!("no pending changesets");
            return Ok(PublishOutcome::NothingToPublish);
        }
        if input.dry_run {
            return Ok(PublishOutcome::DryRun(plan));
        }

        self.write_versions(&project, &plan)?;
        let changelogs = self.write_changelogs(&project, &plan.releases)?;
        let changesets_consumed = self.consume_changesets(&project, &plan.releases)?;

        if let Some(build) = project.config.build_command() {
            self.run_in_packages(build, &plan.releases)?;
        }

        self.git_provider.stage_all(&project.root)?;
        let commit = self
            .git_provider
            .commit(&project.root, &commit_message(&plan.releases))?;
        info!(sha = %commit.sha, "committed release");

        for release in &plan.releases {
            let message = format!("Release {} {}", release.name, release.formatted_next());
            self.git_provider.create_tag(&project.root, &release.tag, &message)?;
            debug!(tag = %release.tag, "created tag");
        }

        if let Some(publish) = project.config.publish_command() {
            self.run_in_packages(publish, &plan.releases)?;
        }

        if !input.no_push {
            self.run_checked(PUSH_COMMAND, &project.root)?;
            info!("pushed release commit and tags");
        }

        Ok(PublishOutcome::Published(PublishOutput {
            packages: plan
                .releases
                .iter()
                .map(|release| PublishedPackage {
                    name: release.name.clone(),
                    version: release.formatted_next(),
                    tag: release.tag.clone(),
                })
                .collect(),
            commit,
            changelogs,
            changesets_consumed,
            pushed: !input.no_push,
        }))
    }

    /// Writes each new version, then points in-repo dependency constraints
    /// at the released versions.
    fn write_versions(&self, project: &Project, plan: &ReleasePlan) -> Result<()> {
        for release in &plan.releases {
            self.manifest_writer
                .write_version(&project.config, &release.path, &release.next)?;
            info!(
                package = %release.name,
                from = %release.formatted_current(),
                to = %release.formatted_next(),
                "updated version"
            );
        }

        for release in &plan.releases {
            for dependency in &release.dependencies {
                let Some(released) = plan.release(dependency) else {
                    continue;
                };
                let updated = self.manifest_writer.update_dependency(
                    &project.config,
                    &release.path,
                    dependency,
                    &released.next,
                )?;
                if updated {
                    debug!(package = %release.name, dependency = %dependency, "updated constraint");
                }
            }
        }

        Ok(())
    }

    fn write_changelogs(
        &self,
        project: &Project,
        releases: &[PlannedRelease],
    ) -> Result<Vec<PathBuf>> {
        let links = project.config.repo.as_deref().map(CommitLinks::new);

        releases
            .iter()
            .map(|release| {
                let result = self.changelog_writer.write_release(
                    &release.path.join(CHANGELOG_FILE),
                    &release.version_release(),
                    links.as_ref(),
                )?;
                debug!(path = %result.path.display(), created = result.created, "wrote changelog");
                Ok(result.path)
            })
            .collect()
    }

    fn consume_changesets(
        &self,
        project: &Project,
        releases: &[PlannedRelease],
    ) -> Result<Vec<PathBuf>> {
        let mut consumed = Vec::new();
        for release in releases {
            for path in release.changesets.file_paths() {
                self.git_provider.delete_file(&project.root, path)?;
                consumed.push(path.to_path_buf());
            }
        }
        Ok(consumed)
    }

    fn run_in_packages(&self, command: &str, releases: &[PlannedRelease]) -> Result<()> {
        for release in releases {
            info!(package = %release.name, command, "running");
            self.run_checked(command, &release.path)?;
        }
        Ok(())
    }

    fn run_checked(&self, command: &str, dir: &Path) -> Result<()> {
        let status = self.command_runner.run(command, dir)?;
        if status.success {
            return Ok(());
        }
        Err(OperationError::CommandFailed {
            command: command.to_string(),
            dir: dir.to_path_buf(),
            code: status.code,
        })
    }
}

fn commit_message(releases: &[PlannedRelease]) -> String {
    let mut message = String::from("Publish packages\n\n");
    for release in releases {
        let _ = writeln!(message, "- {} {}", release.name, release.formatted_next());
    }
    message
}
