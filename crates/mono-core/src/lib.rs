mod changeset;
pub mod types;

pub use changeset::{Changeset, ChangesetCollection, ChangesetSource, SyntheticKind};
pub use types::*;
