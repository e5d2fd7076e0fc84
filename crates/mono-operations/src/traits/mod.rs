mod changelog_writer;
mod changeset_io;
mod command_runner;
mod git_provider;
mod manifest_writer;
mod project_provider;

pub use changelog_writer::{ChangelogWriteResult, ChangelogWriter};
pub use changeset_io::{ChangesetReader, ChangesetWriter};
pub use command_runner::{CommandRunner, CommandStatus};
pub use git_provider::GitProvider;
pub use manifest_writer::ManifestWriter;
pub use project_provider::ProjectProvider;
