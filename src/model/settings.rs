use std::ops::RangeInclusive;

/// Yards from the green inside which the player counts as "in scoring distance".
pub const SCORING_DISTANCE_RANGE: RangeInclusive<u32> = 40..=200;

#[must_use]
pub fn clamp_scoring_distance(value: u32) -> u32 {
    value.clamp(*SCORING_DISTANCE_RANGE.start(), *SCORING_DISTANCE_RANGE.end())
}
