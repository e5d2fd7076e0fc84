mod changelog;
mod changeset_io;
mod command;
mod git;
mod manifest;
mod project;

pub use changelog::FileSystemChangelogWriter;
pub use changeset_io::FileSystemChangesetIO;
pub use command::ShellCommandRunner;
pub use git::Git2Provider;
pub use manifest::FileSystemManifestWriter;
pub use project::FileSystemProjectProvider;
