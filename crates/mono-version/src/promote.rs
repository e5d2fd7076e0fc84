use mono_core::{BumpType, PrereleaseTrack};

use crate::error::VersionError;
use crate::version::Version;

/// Computes the version that follows `current` for a `bump`, optionally on a
/// prerelease `track`.
///
/// A finished version always gets a new base. A prerelease only gets a new
/// base when the requested bump is larger than the one that started its
/// track; otherwise the prerelease itself advances, or is finalized when no
/// track is requested.
///
/// # Errors
///
/// Returns [`VersionError::UnsupportedDowngrade`] when advancing an existing
/// prerelease to a less finished track (for example `rc` to `beta`), and
/// [`VersionError::Overflow`] when a component cannot grow any further.
pub fn promote(
    current: &Version,
    bump: BumpType,
    track: Option<PrereleaseTrack>,
) -> Result<Version, VersionError> {
    let Some((pre, severity)) = current.prerelease().zip(current.prerelease_severity()) else {
        return Ok(start_track(current.bump_base(bump)?, track));
    };

    if bump > severity {
        return Ok(start_track(current.bump_base(bump)?, track));
    }

    let Some(track) = track else {
        return Ok(current.finished());
    };

    match track.cmp(&pre.track) {
        std::cmp::Ordering::Equal => {
            let number = pre.number.checked_add(1).ok_or(VersionError::Overflow {
                version: *current,
                bump,
            })?;
            Ok(current.with_prerelease(track, number))
        }
        std::cmp::Ordering::Greater => Ok(current.with_prerelease(track, 1)),
        std::cmp::Ordering::Less => Err(VersionError::UnsupportedDowngrade {
            from: pre.track,
            to: track,
        }),
    }
}

fn start_track(base: Version, track: Option<PrereleaseTrack>) -> Version {
    match track {
        Some(track) => base.with_prerelease(track, 1),
        None => base,
    }
}

#[cfg(test)]
mod tests {
    use mono_core::PrereleaseTrack::{Alpha, Beta, Rc};

    use super::*;
    use crate::VersionScheme;

    const BUMPS: [BumpType; 3] = [BumpType::Patch, BumpType::Minor, BumpType::Major];
    const TRACKS: [PrereleaseTrack; 3] = [Alpha, Beta, Rc];

    fn pre(major: u64, minor: u64, patch: u64, track: PrereleaseTrack, n: u64) -> Version {
        Version::new(major, minor, patch).with_prerelease(track, n)
    }

    #[test]
    fn patch_bump_of_finished_version() {
        let next = promote(&Version::new(1, 2, 3), BumpType::Patch, None).expect("promote");
        assert_eq!(next, Version::new(1, 2, 4));
        assert_eq!(next.format(VersionScheme::Semver), "1.2.4");
    }

    #[test]
    fn major_bump_onto_alpha_track() {
        let next = promote(&Version::new(2, 0, 0), BumpType::Major, Some(Alpha)).expect("promote");
        assert_eq!(next, pre(3, 0, 0, Alpha, 1));
        assert_eq!(next.format(VersionScheme::Semver), "3.0.0-alpha.1");
    }

    #[test]
    fn finished_bumps_zero_less_significant_components() {
        let samples = [(0, 0, 0), (1, 2, 3), (4, 0, 9), (7, 7, 0)];
        for (major, minor, patch) in samples {
            let current = Version::new(major, minor, patch);
            assert_eq!(
                promote(&current, BumpType::Major, None),
                Ok(Version::new(major + 1, 0, 0))
            );
            assert_eq!(
                promote(&current, BumpType::Minor, None),
                Ok(Version::new(major, minor + 1, 0))
            );
            assert_eq!(
                promote(&current, BumpType::Patch, None),
                Ok(Version::new(major, minor, patch + 1))
            );
        }
    }

    #[test]
    fn same_track_increments_number_and_keeps_base() {
        let current = pre(2, 1, 0, Alpha, 3);
        for bump in [BumpType::Patch, BumpType::Minor] {
            assert_eq!(promote(&current, bump, Some(Alpha)), Ok(pre(2, 1, 0, Alpha, 4)));
        }
    }

    #[test]
    fn more_finished_track_restarts_numbering() {
        let current = pre(2, 0, 0, Alpha, 5);
        assert_eq!(promote(&current, BumpType::Minor, Some(Beta)), Ok(pre(2, 0, 0, Beta, 1)));
        assert_eq!(promote(&current, BumpType::Major, Some(Rc)), Ok(pre(2, 0, 0, Rc, 1)));
    }

    #[test]
    fn downgrading_track_is_rejected() {
        let err = promote(&pre(2, 0, 0, Rc, 1), BumpType::Major, Some(Alpha))
            .expect_err("rc to alpha must fail");
        assert_eq!(err, VersionError::UnsupportedDowngrade { from: Rc, to: Alpha });
        assert!(err.to_string().contains("rc"));
        assert!(err.to_string().contains("alpha"));
    }

    #[test]
    fn larger_bump_starts_new_base() {
        let current = pre(1, 0, 1, Beta, 2);
        assert_eq!(promote(&current, BumpType::Minor, Some(Beta)), Ok(pre(1, 1, 0, Beta, 1)));
        assert_eq!(promote(&current, BumpType::Major, None), Ok(Version::new(2, 0, 0)));
    }

    #[test]
    fn larger_bump_may_restart_on_less_finished_track() {
        let current = pre(1, 1, 0, Rc, 1);
        assert_eq!(promote(&current, BumpType::Major, Some(Alpha)), Ok(pre(2, 0, 0, Alpha, 1)));
    }

    #[test]
    fn finalize_drops_prerelease() {
        for bump in BUMPS {
            assert_eq!(promote(&pre(3, 0, 0, Rc, 2), bump, None), Ok(Version::new(3, 0, 0)));
        }
    }

    #[test]
    fn forward_track_moves_never_fail() {
        let bases = [Version::new(0, 1, 0), Version::new(1, 2, 3), Version::new(5, 0, 0)];
        for base in bases {
            for bump in BUMPS {
                for (i, &earlier) in TRACKS.iter().enumerate() {
                    for &later in &TRACKS[i..] {
                        let first = promote(&base, bump, Some(earlier)).expect("first promote");
                        assert!(promote(&first, bump, Some(later)).is_ok());

                        if earlier != later {
                            let first = promote(&base, bump, Some(later)).expect("first promote");
                            assert!(matches!(
                                promote(&first, bump, Some(earlier)),
                                Err(VersionError::UnsupportedDowngrade { .. })
                            ));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn promotion_always_moves_forward() {
        let current = [
            Version::new(1, 2, 3),
            pre(2, 0, 0, Alpha, 1),
            pre(2, 3, 0, Beta, 4),
            pre(2, 3, 1, Rc, 1),
        ];
        for version in current {
            for bump in BUMPS {
                for track in [None, Some(Rc)] {
                    let next = promote(&version, bump, track).expect("promote");
                    assert!(next > version, "{version} -> {next}");
                }
            }
        }
    }

    #[test]
    fn exhausted_components_are_reported() {
        let counter = pre(1, 0, 0, Beta, u64::MAX);
        assert!(matches!(
            promote(&counter, BumpType::Patch, Some(Beta)),
            Err(VersionError::Overflow { .. })
        ));

        let major = Version::new(u64::MAX, 0, 0);
        assert!(matches!(
            promote(&major, BumpType::Major, None),
            Err(VersionError::Overflow { .. })
        ));
    }
}
