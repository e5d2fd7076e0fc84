use std::path::PathBuf;

use mono_manifest::ManifestError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("no mono.yml found traversing from '{start_dir}'")]
    ConfigNotFound { start_dir: PathBuf },

    #[error("failed to read config at '{path}'")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config at '{path}'")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yml::Error,
    },

    #[error("failed to serialize config")]
    ConfigSerialize(#[source] serde_yml::Error),

    #[error("failed to write config at '{path}'")]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config already exists at '{path}'")]
    ConfigExists { path: PathBuf },

    #[error("invalid config at '{path}': {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    #[error("failed to read packages directory '{path}'")]
    PackagesDirRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no packages found in '{dir}'")]
    NoPackages { dir: PathBuf },

    #[error("package name '{name}' is declared by both '{first}' and '{second}'")]
    DuplicatePackage {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("failed to create changeset directory '{path}'")]
    ChangesetDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("package manifest error")]
    Manifest(#[from] ManifestError),
}
