use indexmap::IndexSet;
use mono_core::{Changeset, PrereleaseTrack};
use mono_version::{Version, promote};
use tracing::debug;

use crate::Result;
use crate::dependency_tree::DependencyTree;
use crate::error::OperationError;

/// Decides which packages need a release and records why on each of them.
///
/// Packages with pending changesets are released. A package on a prerelease
/// with nothing pending is released too, carrying a synthetic finalize
/// changeset. Every dependent of a released package is released with a
/// synthetic dependency-bump changeset naming the dependency's next version,
/// transitively.
pub struct PackagePromoter<'a> {
    tree: &'a mut DependencyTree,
    track: Option<PrereleaseTrack>,
    seeds: Option<Vec<String>>,
}

impl<'a> PackagePromoter<'a> {
    #[must_use]
    pub fn new(tree: &'a mut DependencyTree) -> Self {
        Self {
            tree,
            track: None,
            seeds: None,
        }
    }

    /// Prerelease track the next versions are computed on.
    #[must_use]
    pub fn with_prerelease(mut self, track: Option<PrereleaseTrack>) -> Self {
        self.track = track;
        self
    }

    /// Restricts the packages released for their own changes to `names`.
    /// Dependents of those packages are still released.
    #[must_use]
    pub fn with_seeds(mut self, names: Vec<String>) -> Self {
        self.seeds = Some(names);
        self
    }

    /// Appends synthetic changesets and returns the names of every package
    /// that needs a release, in dependency-first order.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::UnknownPackage`] for a seed that is not in
    /// the tree, [`OperationError::CircularDependency`] if the tree cannot be
    /// ordered, or a version error if a next version cannot be computed.
    /// Nothing is appended when an error is returned before propagation.
    pub fn changed_packages(self) -> Result<Vec<String>> {
        let Self { tree, track, seeds } = self;

        if let Some(seeds) = &seeds {
            if let Some(unknown) = seeds.iter().find(|name| !tree.contains(name)) {
                return Err(OperationError::unknown_package(unknown, &tree.names()));
            }
        }

        let order = tree.ordered_names()?;
        let mut changed: IndexSet<String> = IndexSet::new();

        for name in &order {
            if seeds.as_ref().is_some_and(|seeds| !seeds.contains(name)) {
                continue;
            }
            let Some(package) = tree.package_mut(name) else {
                continue;
            };

            if package.changesets.is_empty() {
                if !package.version.is_prerelease() {
                    continue;
                }
                debug!(package = %name, version = %package.version, "finalizing prerelease");
                package.changesets.push(Changeset::finalize());
            }
            changed.insert(name.clone());
        }

        for name in &order {
            if !changed.contains(name) {
                continue;
            }
            let Some((next, formatted)) = next_version(tree, name, track)? else {
                continue;
            };

            let dependents: Vec<String> = tree.dependents(name).map(str::to_string).collect();
            for dependent in dependents {
                let Some(package) = tree.package_mut(&dependent) else {
                    continue;
                };
                if !package.changesets.has_dependency_bump_for(name) {
                    debug!(
                        package = %dependent,
                        dependency = %name,
                        version = %next,
                        "propagating dependency bump"
                    );
                    package
                        .changesets
                        .push(Changeset::dependency_bump(name.as_str(), &formatted));
                }
                changed.insert(dependent);
            }
        }

        Ok(order.into_iter().filter(|name| changed.contains(name)).collect())
    }
}

/// Next version of `name`, also formatted in its own scheme. Dependencies are
/// visited before dependents, so the collection is final when this is asked.
fn next_version(
    tree: &DependencyTree,
    name: &str,
    track: Option<PrereleaseTrack>,
) -> Result<Option<(Version, String)>> {
    let Some(package) = tree.package(name) else {
        return Ok(None);
    };
    let Some(bump) = package.next_bump() else {
        return Ok(None);
    };
    let next = promote(&package.version, bump, track)?;
    Ok(Some((next, next.format(package.scheme))))
}
