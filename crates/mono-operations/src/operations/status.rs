use std::path::Path;

use mono_core::{BumpType, Changeset, PrereleaseTrack};

use super::load_changesets;
use super::plan::ReleasePlanner;
use crate::Result;
use crate::traits::{ChangesetReader, GitProvider, ProjectProvider};

#[derive(Debug, Clone, Default)]
pub struct StatusInput {
    pub prerelease: Option<PrereleaseTrack>,
}

#[derive(Debug, Clone)]
pub struct PackageStatus {
    pub name: String,
    pub version: String,
    /// Pending changesets in changelog order, propagated ones included.
    pub changesets: Vec<Changeset>,
    pub next_bump: Option<BumpType>,
    pub next_version: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StatusOutput {
    /// Dependency-first order.
    pub packages: Vec<PackageStatus>,
}

impl StatusOutput {
    #[must_use]
    pub fn has_pending_releases(&self) -> bool {
        self.packages.iter().any(|p| p.next_version.is_some())
    }
}

pub struct StatusOperation<P, R, G> {
    project_provider: P,
    changeset_reader: R,
    git_provider: G,
}

impl<P, R, G> StatusOperation<P, R, G>
where
    P: ProjectProvider,
    R: ChangesetReader,
    G: GitProvider,
{
    pub fn new(project_provider: P, changeset_reader: R, git_provider: G) -> Self {
        Self {
            project_provider,
            changeset_reader,
            git_provider,
        }
    }

    /// # Errors
    ///
    /// Returns an error if the project cannot be discovered, a changeset
    /// cannot be read, or next versions cannot be computed.
    pub fn execute(&self, start_path: &Path, input: &StatusInput) -> Result<StatusOutput> {
        let mut project = self.project_provider.discover_project(start_path)?;
        load_changesets(&mut project, &self.changeset_reader, &self.git_provider)?;

        let plan = ReleasePlanner::new(input.prerelease).plan(&project)?;

        let mut packages = Vec::with_capacity(plan.order.len());
        for name in &plan.order {
            if let Some(release) = plan.release(name) {
                packages.push(PackageStatus {
                    name: name.clone(),
                    version: release.formatted_current(),
                    changesets: release.changesets.sorted().into_iter().cloned().collect(),
                    next_bump: Some(release.bump),
                    next_version: Some(release.formatted_next()),
                });
            } else if let Some(package) = project.package(name) {
                packages.push(PackageStatus {
                    name: name.clone(),
                    version: package.formatted_version(),
                    changesets: Vec::new(),
                    next_bump: None,
                    next_version: None,
                });
            }
        }

        Ok(StatusOutput { packages })
    }
}
