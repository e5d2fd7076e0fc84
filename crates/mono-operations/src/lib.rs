mod dependency_tree;
mod error;
pub mod operations;
mod promoter;
pub mod providers;
pub mod traits;

#[cfg(test)]
pub(crate) mod mocks;

pub use dependency_tree::{DependencyEntry, DependencyTree};
pub use error::{OperationError, Result};
pub use promoter::PackagePromoter;
