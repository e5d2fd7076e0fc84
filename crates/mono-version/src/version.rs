use std::cmp::Ordering;
use std::fmt;

use mono_core::{BumpType, PrereleaseTrack};

use crate::error::VersionError;
use crate::scheme::VersionScheme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Prerelease {
    pub track: PrereleaseTrack,
    pub number: u64,
}

/// An immutable `major.minor.patch` version with an optional prerelease.
///
/// A prerelease always carries both its track and its number, so a finished
/// release is simply one without a [`Prerelease`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    prerelease: Option<Prerelease>,
}

impl Version {
    #[must_use]
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            prerelease: None,
        }
    }

    #[must_use]
    pub const fn with_prerelease(self, track: PrereleaseTrack, number: u64) -> Self {
        Self {
            prerelease: Some(Prerelease { track, number }),
            ..self
        }
    }

    /// The same base version with the prerelease removed.
    #[must_use]
    pub const fn finished(self) -> Self {
        Self {
            prerelease: None,
            ..self
        }
    }

    #[must_use]
    pub const fn major(&self) -> u64 {
        self.major
    }

    #[must_use]
    pub const fn minor(&self) -> u64 {
        self.minor
    }

    #[must_use]
    pub const fn patch(&self) -> u64 {
        self.patch
    }

    #[must_use]
    pub const fn prerelease(&self) -> Option<Prerelease> {
        self.prerelease
    }

    #[must_use]
    pub const fn is_prerelease(&self) -> bool {
        self.prerelease.is_some()
    }

    /// Which base bump produced this prerelease track: `x.0.0` came from a
    /// major bump, `x.y.0` from a minor one, anything else from a patch.
    /// Finished releases have no severity.
    #[must_use]
    pub const fn prerelease_severity(&self) -> Option<BumpType> {
        if self.prerelease.is_none() {
            return None;
        }
        if self.minor == 0 && self.patch == 0 {
            Some(BumpType::Major)
        } else if self.patch == 0 {
            Some(BumpType::Minor)
        } else {
            Some(BumpType::Patch)
        }
    }

    /// Increments `bump`'s component and zeroes the less significant ones.
    /// The result is always a finished version.
    ///
    /// # Errors
    ///
    /// Returns [`VersionError::Overflow`] if the component is already at
    /// its maximum.
    pub fn bump_base(&self, bump: BumpType) -> Result<Self, VersionError> {
        let overflow = || VersionError::Overflow {
            version: *self,
            bump,
        };
        Ok(match bump {
            BumpType::Major => Self::new(self.major.checked_add(1).ok_or_else(overflow)?, 0, 0),
            BumpType::Minor => {
                Self::new(self.major, self.minor.checked_add(1).ok_or_else(overflow)?, 0)
            }
            BumpType::Patch => Self::new(
                self.major,
                self.minor,
                self.patch.checked_add(1).ok_or_else(overflow)?,
            ),
        })
    }

    /// # Errors
    ///
    /// Returns [`VersionError::Parse`] if `input` does not follow `scheme`.
    pub fn parse(input: &str, scheme: VersionScheme) -> Result<Self, VersionError> {
        parse_version(input, scheme).ok_or_else(|| VersionError::Parse {
            input: input.to_string(),
            scheme,
        })
    }

    #[must_use]
    pub fn format(&self, scheme: VersionScheme) -> String {
        let mut output = format!("{}.{}.{}", self.major, self.minor, self.patch);
        if let Some(pre) = self.prerelease {
            let rules = scheme.rules();
            output.push_str(rules.prerelease_separator);
            output.push_str(scheme.label(pre.track));
            output.push_str(rules.number_separator);
            output.push_str(&pre.number.to_string());
        }
        output
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(VersionScheme::Semver))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| match (self.prerelease, other.prerelease) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => a.cmp(&b),
            })
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl TryFrom<&Version> for semver::Version {
    type Error = semver::Error;

    fn try_from(version: &Version) -> Result<Self, Self::Error> {
        semver::Version::parse(&version.format(VersionScheme::Semver))
    }
}

fn split_digits(input: &str) -> (&str, &str) {
    let end = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());
    input.split_at(end)
}

fn parse_version(input: &str, scheme: VersionScheme) -> Option<Version> {
    let rules = scheme.rules();

    let mut release = Vec::with_capacity(3);
    let mut rest = input;
    loop {
        let (digits, tail) = split_digits(rest);
        if digits.is_empty() {
            return None;
        }
        release.push(digits.parse::<u64>().ok()?);
        rest = tail;

        match rest.strip_prefix('.') {
            Some(next) if next.starts_with(|c: char| c.is_ascii_digit()) => rest = next,
            _ => break,
        }
    }

    let valid_len = if rules.lenient {
        (1..=3).contains(&release.len())
    } else {
        release.len() == 3
    };
    if !valid_len {
        return None;
    }
    release.resize(3, 0);
    let version = Version::new(release[0], release[1], release[2]);

    if rest.is_empty() {
        return Some(version);
    }

    let rest = rest.strip_prefix(rules.prerelease_separator)?;
    let label_end = rest
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(rest.len());
    let (label, rest) = rest.split_at(label_end);
    let track = scheme.track_for_label(label)?;

    if rest.is_empty() && rules.lenient {
        return Some(version.with_prerelease(track, 0));
    }

    let rest = rest.strip_prefix(rules.number_separator)?;
    let (digits, trailing) = split_digits(rest);
    if digits.is_empty() || !trailing.is_empty() {
        return None;
    }
    // Prerelease numbers start at 1. PEP 440 spells the shorthand `a` as `a0`.
    let number: u64 = digits.parse().ok()?;
    if number == 0 && !rules.lenient {
        return None;
    }
    Some(version.with_prerelease(track, number))
}
