mod changelog;
mod entry;
mod error;
mod format;

pub use changelog::{CHANGELOG_FILE, Changelog};
pub use entry::{ChangelogEntry, CommitLinks, VersionRelease};
pub use error::ChangelogError;
pub use format::{format_entries, format_entry, format_version_header, format_version_release};

pub type Result<T> = std::result::Result<T, ChangelogError>;
