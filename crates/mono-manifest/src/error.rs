use std::path::PathBuf;

use mono_version::VersionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest at '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write manifest at '{path}'")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON at '{path}'")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no file matching '{pattern}' in '{dir}'")]
    FileNotFound { dir: PathBuf, pattern: String },

    #[error("missing required field '{field}' in '{path}'")]
    MissingField { path: PathBuf, field: String },

    #[error("invalid version in '{path}'")]
    InvalidVersion {
        path: PathBuf,
        #[source]
        source: VersionError,
    },

    #[error("invalid file pattern")]
    Glob(#[from] glob::PatternError),

    #[error("invalid manifest pattern")]
    Pattern(#[from] regex::Error),
}
