use crate::model::{Hole, Level, OopsieKind, Weights, round1};
use crate::score::rules::{allowed_shots_to_sd, target_after_sd};

/// Stroke-and-distance, not configurable.
pub const LOST_BALL_PENALTY: f64 = 2.0;

/// Putts beyond two on a hole.
#[must_use]
pub fn putting_lost(putts: Option<u32>) -> u32 {
    putts.map_or(0, |p| p.saturating_sub(2))
}

/// Strokes one kind of mishap costs, per occurrence.
#[must_use]
pub fn oopsie_cost(kind: OopsieKind, weights: &Weights) -> f64 {
    weights.for_kind(kind).unwrap_or(LOST_BALL_PENALTY)
}

/// Strokes lost on a hole. Works on unfinished holes, since it only reads mishaps and putts.
#[must_use]
pub fn hole_strokes_lost(hole: &Hole, weights: &Weights) -> f64 {
    let mishaps: f64 = OopsieKind::ALL
        .iter()
        .map(|&kind| f64::from(hole.oopsies.count(kind)) * oopsie_cost(kind, weights))
        .sum();
    round1(mishaps + f64::from(putting_lost(hole.putts)))
}

/// Whether the hole played like a successful par-3 finish.
///
/// On par 4s and 5s this assumes the player used exactly the allotted shots
/// to reach scoring distance. That is an approximation, not a measurement.
#[must_use]
pub fn par3_equivalent(level: Level, hole: &Hole) -> Option<bool> {
    let strokes = i64::from(hole.strokes?);
    let target = i64::from(target_after_sd(hole));
    if hole.is_par3() {
        return Some(strokes <= target);
    }
    let allowed = i64::from(allowed_shots_to_sd(level, hole)?);
    Some(strokes - allowed <= target)
}
