use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    Git(#[from] mono_git::GitError),

    #[error(transparent)]
    Project(#[from] mono_project::ProjectError),

    #[error(transparent)]
    Manifest(#[from] mono_manifest::ManifestError),

    #[error(transparent)]
    Changelog(#[from] mono_changelog::ChangelogError),

    #[error(transparent)]
    Format(#[from] mono_parse::FormatError),

    #[error("version calculation failed")]
    Version(#[from] mono_version::VersionError),

    #[error("failed to read changeset file '{path}'")]
    ChangesetFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse changeset file '{path}'")]
    ChangesetParse {
        path: PathBuf,
        #[source]
        source: mono_parse::FormatError,
    },

    #[error("failed to write changeset file '{path}'")]
    ChangesetFileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("circular dependency between packages: {}", packages.join(", "))]
    CircularDependency { packages: Vec<String> },

    #[error("unknown package '{name}' (available: {available})")]
    UnknownPackage { name: String, available: String },

    #[error("--package is required in a monorepo (available: {available})")]
    PackageRequired { available: String },

    #[error("failed to start command '{command}' in '{dir}'")]
    CommandSpawn {
        command: String,
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no {kind} command configured for language '{language}'")]
    NoCommand { kind: &'static str, language: String },

    #[error("command '{command}' failed in '{dir}'{}", exit_suffix(*code))]
    CommandFailed {
        command: String,
        dir: PathBuf,
        code: Option<i32>,
    },
}

pub type Result<T> = std::result::Result<T, OperationError>;

fn exit_suffix(code: Option<i32>) -> String {
    code.map(|c| format!(" with exit code {c}")).unwrap_or_default()
}

impl OperationError {
    pub(crate) fn unknown_package(name: &str, available: &[String]) -> Self {
        Self::UnknownPackage {
            name: name.to_string(),
            available: available.join(", "),
        }
    }
}
