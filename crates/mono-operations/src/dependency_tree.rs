use std::collections::{HashMap, VecDeque};

use indexmap::{IndexMap, IndexSet};
use mono_project::Package;
use tracing::debug;

use crate::Result;
use crate::error::OperationError;

/// Consecutive requeues of one package, with no package placed in between,
/// after which the remaining packages are reported as circular.
const STALL_LIMIT: usize = 10;

/// A package together with its in-repo edges.
#[derive(Debug, Clone)]
pub struct DependencyEntry {
    pub package: Package,
    /// Declared dependencies that are packages of this repository.
    pub dependencies: IndexSet<String>,
    /// Packages that declare a dependency on this one.
    pub dependents: IndexSet<String>,
}

/// The in-repo dependency graph, keyed by package name. Owns the packages so
/// that bump propagation can append to their changeset collections.
#[derive(Debug, Clone, Default)]
pub struct DependencyTree {
    entries: IndexMap<String, DependencyEntry>,
}

impl DependencyTree {
    /// Links every package to the declared dependencies that name another
    /// package in `packages`. Dependencies on anything else are dropped.
    #[must_use]
    pub fn build(packages: Vec<Package>) -> Self {
        let names: IndexSet<String> = packages.iter().map(|p| p.name.clone()).collect();

        let mut entries: IndexMap<String, DependencyEntry> = packages
            .into_iter()
            .map(|package| {
                let dependencies = package
                    .dependencies
                    .keys()
                    .filter(|name| names.contains(*name))
                    .cloned()
                    .collect();
                let entry = DependencyEntry {
                    package,
                    dependencies,
                    dependents: IndexSet::new(),
                };
                (entry.package.name.clone(), entry)
            })
            .collect();

        let edges: Vec<(String, String)> = entries
            .values()
            .flat_map(|entry| {
                entry
                    .dependencies
                    .iter()
                    .map(|dependency| (dependency.clone(), entry.package.name.clone()))
            })
            .collect();
        for (dependency, dependent) in edges {
            if let Some(entry) = entries.get_mut(&dependency) {
                entry.dependents.insert(dependent);
            }
        }

        Self { entries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Package names in the order they were given to [`Self::build`].
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&DependencyEntry> {
        self.entries.get(name)
    }

    #[must_use]
    pub fn package(&self, name: &str) -> Option<&Package> {
        self.entries.get(name).map(|entry| &entry.package)
    }

    pub fn package_mut(&mut self, name: &str) -> Option<&mut Package> {
        self.entries.get_mut(name).map(|entry| &mut entry.package)
    }

    /// Direct dependents of `name`. Empty for unknown names.
    pub fn dependents(&self, name: &str) -> impl Iterator<Item = &str> {
        self.entries
            .get(name)
            .into_iter()
            .flat_map(|entry| entry.dependents.iter().map(String::as_str))
    }

    /// Direct in-repo dependencies of `name`. Empty for unknown names.
    pub fn dependencies(&self, name: &str) -> impl Iterator<Item = &str> {
        self.entries
            .get(name)
            .into_iter()
            .flat_map(|entry| entry.dependencies.iter().map(String::as_str))
    }

    /// Names in dependency-first order.
    ///
    /// Packages are taken from a queue and placed once all their dependencies
    /// are placed, otherwise requeued. Each requeue bumps that package's stall
    /// counter and any placement resets all counters. Once a counter passes
    /// [`STALL_LIMIT`], the whole queue has been cycled without progress, so the
    /// packages still queued are reported. The limit is a heuristic: it is
    /// only exact because counters reset on every placement.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::CircularDependency`] naming every package
    /// that could not be placed.
    pub fn ordered_names(&self) -> Result<Vec<String>> {
        let mut queue: VecDeque<&str> = self.entries.keys().map(String::as_str).collect();
        let mut sorted: IndexSet<&str> = IndexSet::with_capacity(queue.len());
        let mut stalls: HashMap<&str, usize> = HashMap::new();

        while let Some(name) = queue.pop_front() {
            if self.dependencies(name).all(|dep| sorted.contains(dep)) {
                sorted.insert(name);
                stalls.clear();
                continue;
            }

            let count = stalls.entry(name).or_insert(0);
            *count += 1;
            if *count > STALL_LIMIT {
                let mut remaining: Vec<String> = std::iter::once(name)
                    .chain(queue.iter().copied())
                    .map(str::to_string)
                    .collect();
                remaining.sort();
                debug!(packages = ?remaining, "dependency order stalled");
                return Err(OperationError::CircularDependency {
                    packages: remaining,
                });
            }
            queue.push_back(name);
        }

        Ok(sorted.into_iter().map(str::to_string).collect())
    }

    /// Packages in dependency-first order.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::CircularDependency`] if the graph has a cycle.
    pub fn ordered_packages(&self) -> Result<Vec<&Package>> {
        Ok(self
            .ordered_names()?
            .iter()
            .filter_map(|name| self.package(name))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mono_version::Version;

    fn package(name: &str, dependencies: &[&str]) -> Package {
        dependencies.iter().fold(
            Package::new(name, name, Version::new(1, 0, 0)),
            |package, dep| package.with_dependency(*dep, "^1.0.0"),
        )
    }

    #[test]
    fn external_dependencies_are_dropped() {
        let tree = DependencyTree::build(vec![
            package("core", &["serde"]),
            package("ui", &["core", "react"]),
        ]);

        assert_eq!(tree.dependencies("ui").collect::<Vec<_>>(), ["core"]);
        assert!(tree.dependencies("core").next().is_none());
    }

    #[test]
    fn dependents_are_inverse_edges() {
        let tree = DependencyTree::build(vec![
            package("core", &[]),
            package("ui", &["core"]),
            package("cli", &["core", "ui"]),
        ]);

        assert_eq!(tree.dependents("core").collect::<Vec<_>>(), ["ui", "cli"]);
        assert_eq!(tree.dependents("ui").collect::<Vec<_>>(), ["cli"]);
        assert!(tree.dependents("cli").next().is_none());
        assert!(tree.dependents("unknown").next().is_none());
    }

    #[test]
    fn orders_dependencies_first() -> anyhow::Result<()> {
        let tree = DependencyTree::build(vec![
            package("app", &["ui", "core"]),
            package("ui", &["core"]),
            package("core", &[]),
        ]);

        assert_eq!(tree.ordered_names()?, ["core", "ui", "app"]);
        Ok(())
    }

    #[test]
    fn independent_packages_keep_input_order() -> anyhow::Result<()> {
        let tree = DependencyTree::build(vec![
            package("b", &[]),
            package("a", &[]),
            package("c", &[]),
        ]);

        assert_eq!(tree.ordered_names()?, ["b", "a", "c"]);
        Ok(())
    }

    #[test]
    fn three_package_cycle_is_reported() {
        let tree = DependencyTree::build(vec![
            package("a", &["b"]),
            package("b", &["c"]),
            package("c", &["a"]),
        ]);

        let err = tree.ordered_names().expect_err("cycle");

        match err {
            OperationError::CircularDependency { packages } => {
                assert_eq!(packages, ["a", "b", "c"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn cycle_reports_only_unplaced_packages() {
        let tree = DependencyTree::build(vec![
            package("base", &[]),
            package("x", &["base", "y"]),
            package("y", &["x"]),
            package("app", &["x"]),
        ]);

        let err = tree.ordered_names().expect_err("cycle");

        assert!(matches!(
            err,
            OperationError::CircularDependency { ref packages } if packages == &["app", "x", "y"]
        ));
    }

    #[test]
    fn long_chain_in_reverse_order_is_not_a_cycle() -> anyhow::Result<()> {
        let names: Vec<String> = (0..30).map(|i| format!("p{i:02}")).collect();
        let packages: Vec<Package> = names
            .iter()
            .enumerate()
            .rev()
            .map(|(i, name)| match i {
                0 => package(name, &[]),
                _ => package(name, &[names[i - 1].as_str()]),
            })
            .collect();
        let tree = DependencyTree::build(packages);

        assert_eq!(tree.ordered_names()?, names);
        Ok(())
    }

    #[test]
    fn ordered_packages_follow_names() -> anyhow::Result<()> {
        let tree = DependencyTree::build(vec![package("ui", &["core"]), package("core", &[])]);

        let ordered: Vec<&str> = tree
            .ordered_packages()?
            .iter()
            .map(|p| p.name.as_str())
            .collect();

        assert_eq!(ordered, ["core", "ui"]);
        Ok(())
    }
}
