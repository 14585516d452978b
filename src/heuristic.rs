//! Zone-distance estimates.
//!
//! Zones are numbered `1`..`6` in the centre and `a`..`d` further out. Both
//! schemes are laid on a single scale so any two zones have a distance.

use thiserror::Error;

use crate::cost::Minutes;
use crate::space::Zone;
use crate::space::ZoneSet;

/// Assumed travel time to cross a zone.
pub const MINUTES_PER_ZONE: Minutes = 10;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ZoneError {
    #[error("Unknown zone '{0}'")]
    UnknownZone(Zone),
    #[error("Station has no zones")]
    EmptyZones,
}

/// Estimates the cost of going from a station to the goal.
pub trait Heuristic: std::fmt::Debug {
    fn h(current: &ZoneSet, goal: &ZoneSet) -> Result<Minutes, ZoneError>;
}

/// Position of a zone on the shared scale.
///
/// ```
/// use transit_search::heuristic::zone_position;
/// use transit_search::space::Zone;
///
/// assert_eq!(zone_position(Zone('1')), Ok(1));
/// assert_eq!(zone_position(Zone('6')), Ok(6));
/// assert_eq!(zone_position(Zone('a')), Ok(7));
/// assert_eq!(zone_position(Zone('d')), Ok(10));
/// assert!(zone_position(Zone('7')).is_err());
/// ```
pub fn zone_position(zone: Zone) -> Result<Minutes, ZoneError> {
    match zone.0 {
        c @ '1'..='6' => Ok(c as Minutes - '0' as Minutes),
        c @ 'a'..='d' => Ok(c as Minutes - 'a' as Minutes + 7),
        _ => Err(ZoneError::UnknownZone(zone)),
    }
}

/// The `[min, max]` positions of a set of zones.
fn span(zones: &ZoneSet) -> Result<[Minutes; 2], ZoneError> {
    let mut positions = zones.iter().map(|z| zone_position(*z));
    let first = positions.next().ok_or(ZoneError::EmptyZones)??;

    positions.try_fold([first, first], |[lo, hi], p| {
        let p = p?;
        Ok([lo.min(p), hi.max(p)])
    })
}

/// Minutes needed to cross the zones between two stations.
///
/// Overlapping zone sets don't make the estimate 0, only the closest ends of
/// both sets are compared. This is not admissible.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZoneDistance;

impl Heuristic for ZoneDistance {
    fn h(current: &ZoneSet, goal: &ZoneSet) -> Result<Minutes, ZoneError> {
        let [current_min, current_max] = span(current)?;
        let [goal_min, goal_max] = span(goal)?;

        let zones = std::cmp::min(
            goal_min.abs_diff(current_max),
            current_min.abs_diff(goal_max),
        );
        Ok(MINUTES_PER_ZONE * zones)
    }
}

#[cfg(test)]
mod tests {
    use smallvec::smallvec;

    use super::*;

    fn zones(labels: &str) -> ZoneSet {
        labels.chars().map(Zone).collect()
    }

    #[test]
    fn same_zone() {
        assert_eq!(ZoneDistance::h(&zones("1"), &zones("1")), Ok(0));
    }

    #[test]
    fn ten_minutes_per_zone() {
        assert_eq!(ZoneDistance::h(&zones("1"), &zones("4")), Ok(30));
        assert_eq!(ZoneDistance::h(&zones("4"), &zones("1")), Ok(30));
    }

    #[test]
    fn letters_follow_digits() {
        assert_eq!(ZoneDistance::h(&zones("6"), &zones("a")), Ok(10));
        assert_eq!(ZoneDistance::h(&zones("1"), &zones("d")), Ok(90));
    }

    #[test]
    fn closest_pair_of_ends() {
        // Current spans 2..3, goal 5..6. Closest is 3 to 5.
        assert_eq!(ZoneDistance::h(&zones("23"), &zones("56")), Ok(20));
        // Reversed roles.
        assert_eq!(ZoneDistance::h(&zones("56"), &zones("23")), Ok(20));
    }

    #[test]
    fn overlapping_sets_compare_ends() {
        // min(|2-3|, |2-3|)
        assert_eq!(ZoneDistance::h(&zones("23"), &zones("23")), Ok(10));
    }

    #[test]
    fn unknown_zone() {
        assert_eq!(
            ZoneDistance::h(&zones("1"), &zones("x")),
            Err(ZoneError::UnknownZone(Zone('x')))
        );
        assert_eq!(
            ZoneDistance::h(&zones("17"), &zones("1")),
            Err(ZoneError::UnknownZone(Zone('7')))
        );
    }

    #[test]
    fn empty_zones() {
        let empty: ZoneSet = smallvec![];
        assert_eq!(
            ZoneDistance::h(&empty, &zones("1")),
            Err(ZoneError::EmptyZones)
        );
    }
}
