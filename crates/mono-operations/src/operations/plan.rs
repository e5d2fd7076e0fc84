use std::path::PathBuf;

use mono_changelog::{CommitLinks, VersionRelease, format_version_release};
use mono_core::{BumpType, ChangesetCollection, PrereleaseTrack};
use mono_project::Project;
use mono_version::{Version, VersionScheme, promote};

use crate::Result;
use crate::dependency_tree::DependencyTree;
use crate::promoter::PackagePromoter;

/// A package that will be released, with everything needed to write it.
#[derive(Debug, Clone)]
pub struct PlannedRelease {
    pub name: String,
    pub path: PathBuf,
    pub scheme: VersionScheme,
    pub current: Version,
    pub next: Version,
    pub bump: BumpType,
    pub changesets: ChangesetCollection,
    /// In-repo dependencies, each released before this package.
    pub dependencies: Vec<String>,
    pub tag: String,
    /// The changelog section, exactly as it will be written.
    pub changelog: String,
}

impl PlannedRelease {
    #[must_use]
    pub fn formatted_current(&self) -> String {
        self.current.format(self.scheme)
    }

    #[must_use]
    pub fn formatted_next(&self) -> String {
        self.next.format(self.scheme)
    }

    #[must_use]
    pub fn version_release(&self) -> VersionRelease {
        VersionRelease::from_collection(self.formatted_next(), &self.changesets)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReleasePlan {
    /// Every package name, dependency-first.
    pub order: Vec<String>,
    /// The packages that get a new version, dependency-first.
    pub releases: Vec<PlannedRelease>,
}

impl ReleasePlan {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }

    #[must_use]
    pub fn release(&self, name: &str) -> Option<&PlannedRelease> {
        self.releases.iter().find(|r| r.name == name)
    }
}

/// Computes every next version and changelog section in memory.
pub struct ReleasePlanner {
    track: Option<PrereleaseTrack>,
    seeds: Option<Vec<String>>,
}

impl ReleasePlanner {
    #[must_use]
    pub fn new(track: Option<PrereleaseTrack>) -> Self {
        Self { track, seeds: None }
    }

    #[must_use]
    pub fn with_seeds(mut self, seeds: Vec<String>) -> Self {
        if !seeds.is_empty() {
            self.seeds = Some(seeds);
        }
        self
    }

    /// # Errors
    ///
    /// Returns an error for unknown seed packages, a dependency cycle, or a
    /// prerelease downgrade.
    pub fn plan(&self, project: &Project) -> Result<ReleasePlan> {
        let mut tree = DependencyTree::build(project.packages.clone());

        let mut promoter = PackagePromoter::new(&mut tree).with_prerelease(self.track);
        if let Some(seeds) = &self.seeds {
            promoter = promoter.with_seeds(seeds.clone());
        }
        let changed = promoter.changed_packages()?;

        let links = project.config.repo.as_deref().map(CommitLinks::new);
        let mut plan = ReleasePlan::default();

        for name in tree.ordered_names()? {
            let Some(package) = tree.package(&name) else {
                continue;
            };
            plan.order.push(name.clone());
            let Some(bump) = package.next_bump().filter(|_| changed.contains(&name)) else {
                continue;
            };

            let next = promote(&package.version, bump, self.track)?;
            let release =
                VersionRelease::from_collection(next.format(package.scheme), &package.changesets);

            plan.releases.push(PlannedRelease {
                name: name.clone(),
                path: package.path.clone(),
                scheme: package.scheme,
                current: package.version,
                next,
                bump,
                changesets: package.changesets.clone(),
                dependencies: tree.dependencies(&name).map(str::to_string).collect(),
                tag: project.tag_name(package, &next),
                changelog: format_version_release(&release, links.as_ref()),
            });
        }

        Ok(plan)
    }
}
