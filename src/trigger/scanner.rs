//! Geofence scanner.

use crate::geo::Coordinate;
use crate::guide::GuideTrack;
use std::collections::HashSet;

/// Return the tracks that `position` newly brings into range.
///
/// A track matches when it carries an auto-trigger geofence, has not
/// fired this session, and the great-circle distance from `position` to
/// the geofence center is within its radius. Pure and deterministic;
/// result order follows input order.
///
/// `position` is expected to be finite. A non-finite position yields NaN
/// distances, which never compare within a radius, so nothing matches.
pub fn scan<'a>(
    position: &Coordinate,
    tracks: &'a [GuideTrack],
    fired: &HashSet<String>,
) -> Vec<&'a GuideTrack> {
    tracks
        .iter()
        .filter(|track| match &track.geofence {
            Some(fence) => {
                fence.auto_trigger && !fired.contains(&track.id) && fence.contains(position)
            }
            None => false,
        })
        .collect()
}
