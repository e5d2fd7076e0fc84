use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

/// Magnitude of a version increment. Ordered by severity, so `max()` over a
/// set of bumps yields the one that wins.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum BumpType {
    Patch,
    Minor,
    Major,
}

impl BumpType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Patch => "patch",
            Self::Minor => "minor",
            Self::Major => "major",
        }
    }
}

impl fmt::Display for BumpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BumpType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "patch" => Ok(Self::Patch),
            "minor" => Ok(Self::Minor),
            "major" => Ok(Self::Major),
            _ => Err(UnknownVariant {
                kind: "bump",
                value: s.to_string(),
                expected: "major, minor, patch",
            }),
        }
    }
}

/// Classification of a change. The declaration order is the changelog
/// section order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Add,
    Change,
    Deprecate,
    Remove,
    Fix,
    Security,
}

impl ChangeType {
    pub const ALL: [Self; 6] = [
        Self::Add,
        Self::Change,
        Self::Deprecate,
        Self::Remove,
        Self::Fix,
        Self::Security,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Change => "change",
            Self::Deprecate => "deprecate",
            Self::Remove => "remove",
            Self::Fix => "fix",
            Self::Security => "security",
        }
    }

    /// Heading used for this type's changelog section.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Add => "Added",
            Self::Change => "Changed",
            Self::Deprecate => "Deprecated",
            Self::Remove => "Removed",
            Self::Fix => "Fixed",
            Self::Security => "Security",
        }
    }

    #[must_use]
    pub fn sort_index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChangeType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "type",
                value: s.to_string(),
                expected: "add, change, deprecate, remove, fix, security",
            })
    }
}

/// Prerelease channel. `Rc` is the most finished track.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PrereleaseTrack {
    Alpha,
    Beta,
    Rc,
}

impl PrereleaseTrack {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Alpha => "alpha",
            Self::Beta => "beta",
            Self::Rc => "rc",
        }
    }
}

impl fmt::Display for PrereleaseTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A commit that touched a changeset file, used for changelog attribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRef {
    pub short_sha: String,
    pub sha: String,
    pub date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bump_type_ordering_patch_is_smallest() {
        assert!(BumpType::Patch < BumpType::Minor);
        assert!(BumpType::Patch < BumpType::Major);
    }

    #[test]
    fn bump_type_ordering_major_is_largest() {
        assert!(BumpType::Major > BumpType::Patch);
        assert!(BumpType::Major > BumpType::Minor);
    }

    #[test]
    fn bump_type_max_returns_largest() {
        let bumps = [BumpType::Minor, BumpType::Patch, BumpType::Major];
        assert_eq!(bumps.iter().max(), Some(&BumpType::Major));
    }

    #[test]
    fn bump_type_parses_known_names() {
        assert_eq!("minor".parse::<BumpType>(), Ok(BumpType::Minor));
        let err = "huge".parse::<BumpType>().expect_err("unknown bump");
        assert!(err.to_string().contains("'huge'"));
    }

    #[test]
    fn change_type_labels_and_indices() {
        let labels: Vec<_> = ChangeType::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(
            labels,
            ["Added", "Changed", "Deprecated", "Removed", "Fixed", "Security"]
        );
        let indices: Vec<_> = ChangeType::ALL.iter().map(|t| t.sort_index()).collect();
        assert_eq!(indices, [0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn change_type_rejects_label_as_key() {
        assert!("Added".parse::<ChangeType>().is_err());
        assert_eq!("security".parse::<ChangeType>(), Ok(ChangeType::Security));
    }

    #[test]
    fn prerelease_tracks_ordered_alpha_beta_rc() {
        assert!(PrereleaseTrack::Alpha < PrereleaseTrack::Beta);
        assert!(PrereleaseTrack::Beta < PrereleaseTrack::Rc);
    }
}
