use std::fmt;
use std::str::FromStr;

use mono_core::{PrereleaseTrack, UnknownVariant};
use serde::{Deserialize, Serialize};

/// How a version string is laid out on disk for a given ecosystem.
///
/// | scheme   | example          |
/// |----------|------------------|
/// | `semver` | `1.2.3-alpha.1`  |
/// | `ruby`   | `1.2.3.alpha.1`  |
/// | `pep440` | `1.2.3a1`        |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionScheme {
    #[default]
    Semver,
    Ruby,
    Pep440,
}

pub(crate) struct SchemeRules {
    pub prerelease_separator: &'static str,
    pub number_separator: &'static str,
    pub labels: [(PrereleaseTrack, &'static str); 3],
    /// Accepts `1.1a` as shorthand for `1.1.0a0`.
    pub lenient: bool,
}

const SEMVER_RULES: SchemeRules = SchemeRules {
    prerelease_separator: "-",
    number_separator: ".",
    labels: [
        (PrereleaseTrack::Alpha, "alpha"),
        (PrereleaseTrack::Beta, "beta"),
        (PrereleaseTrack::Rc, "rc"),
    ],
    lenient: false,
};

const RUBY_RULES: SchemeRules = SchemeRules {
    prerelease_separator: ".",
    ..SEMVER_RULES
};

const PEP440_RULES: SchemeRules = SchemeRules {
    prerelease_separator: "",
    number_separator: "",
    labels: [
        (PrereleaseTrack::Alpha, "a"),
        (PrereleaseTrack::Beta, "b"),
        (PrereleaseTrack::Rc, "rc"),
    ],
    lenient: true,
};

impl VersionScheme {
    pub(crate) fn rules(self) -> &'static SchemeRules {
        match self {
            Self::Semver => &SEMVER_RULES,
            Self::Ruby => &RUBY_RULES,
            Self::Pep440 => &PEP440_RULES,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Semver => "semver",
            Self::Ruby => "ruby",
            Self::Pep440 => "pep440",
        }
    }

    #[must_use]
    pub fn label(self, track: PrereleaseTrack) -> &'static str {
        self.rules()
            .labels
            .iter()
            .find_map(|(t, label)| (*t == track).then_some(*label))
            .unwrap_or_else(|| track.as_str())
    }

    pub(crate) fn track_for_label(self, label: &str) -> Option<PrereleaseTrack> {
        self.rules()
            .labels
            .iter()
            .find_map(|(track, l)| (*l == label).then_some(*track))
    }
}

impl fmt::Display for VersionScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VersionScheme {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "semver" => Ok(Self::Semver),
            "ruby" => Ok(Self::Ruby),
            "pep440" => Ok(Self::Pep440),
            _ => Err(UnknownVariant {
                kind: "version scheme",
                value: s.to_string(),
                expected: "semver, ruby, pep440",
            }),
        }
    }
}
