use crate::model::{Hole, Level};

/// Shots a player at `level` gets to reach scoring distance; `None` on par 3s.
#[must_use]
pub fn allowed_shots_to_sd(level: Level, hole: &Hole) -> Option<u32> {
    if hole.is_par3() {
        return None;
    }
    Some(match level {
        Level::Scratch => 1,
        Level::BogeyGolf => 2,
        Level::Break80 => {
            if hole.stroke_index >= 10 {
                1
            } else {
                2
            }
        }
    })
}

/// Strokes expected once inside scoring distance.
///
/// Harder par 3s (stroke index 1..=9) get 4, everything else 3.
#[must_use]
pub fn target_after_sd(hole: &Hole) -> u32 {
    if hole.is_par3() && hole.stroke_index <= 9 {
        4
    } else {
        3
    }
}

#[must_use]
pub fn goal_score(level: Level, par: u8, stroke_index: u8) -> u32 {
    let par = u32::from(par);
    match level {
        Level::Scratch => par,
        Level::BogeyGolf => par + 1,
        Level::Break80 => {
            if stroke_index >= 10 {
                par + 1
            } else {
                par
            }
        }
    }
}
