use mono_core::{BumpType, PrereleaseTrack};
use thiserror::Error;

use crate::{Version, VersionScheme};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("'{input}' is not a valid {scheme} version")]
    Parse {
        input: String,
        scheme: VersionScheme,
    },

    #[error("cannot move a prerelease from the {from} track back to the {to} track")]
    UnsupportedDowngrade {
        from: PrereleaseTrack,
        to: PrereleaseTrack,
    },

    #[error("cannot apply a {bump} bump to {version}: component overflow")]
    Overflow { version: Version, bump: BumpType },
}
