use std::fmt;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("missing opening metadata delimiter '---'")]
    MissingOpeningDelimiter,

    #[error("missing closing metadata delimiter '---' or '...'")]
    MissingClosingDelimiter,

    #[error("failed to parse metadata YAML")]
    Yaml(#[from] serde_yml::Error),

    #[error("metadata must be a mapping of keys to values")]
    NotAMapping,
}

/// A single problem with a changeset's metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    MissingBump,
    UnknownBump(String),
    MissingType,
    UnknownType(String),
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingBump => f.write_str("'bump' is missing"),
            Self::UnknownBump(value) => write!(
                f,
                "'bump' value '{value}' is not one of: major, minor, patch"
            ),
            Self::MissingType => f.write_str("'type' is missing"),
            Self::UnknownType(value) => write!(
                f,
                "'type' value '{value}' is not one of: add, change, deprecate, remove, fix, security"
            ),
        }
    }
}

/// Every metadata violation found in a changeset, reported together.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid changeset: {}", join_violations(violations))]
pub struct InvalidChangeset {
    pub violations: Vec<Violation>,
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error(transparent)]
    Metadata(#[from] MetadataError),

    #[error(transparent)]
    Invalid(#[from] InvalidChangeset),

    #[error("changeset message is empty")]
    EmptyMessage,

    #[error("input exceeds maximum size of {max_bytes} bytes")]
    InputTooLarge { max_bytes: usize },

    #[error("failed to serialize changeset metadata")]
    Serialize(#[source] serde_yml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_changeset_lists_all_violations() {
        let err = InvalidChangeset {
            violations: vec![Violation::UnknownBump("huge".into()), Violation::MissingType],
        };

        let msg = err.to_string();

        assert!(msg.contains("'huge'"));
        assert!(msg.contains("'type' is missing"));
        assert!(msg.contains("; "));
    }
}
