use chrono::Utc;
use uuid::Uuid;

use crate::model::{
    CourseTemplate, Hole, HolesCount, Level, RoundState, TemplateHole, Weights,
};

/// `count` par 4s with stroke index equal to their position.
#[must_use]
pub fn make_default_holes(count: usize) -> Vec<Hole> {
    (1..=count)
        .map(|n| Hole::new(u8::try_from(n).unwrap_or(u8::MAX)))
        .collect()
}

#[must_use]
pub fn new_round(
    holes_count: HolesCount,
    level: Level,
    scoring_distance: u32,
    weights: Weights,
) -> RoundState {
    RoundState {
        holes_count,
        level,
        scoring_distance,
        weights,
        holes: make_default_holes(holes_count.get()),
    }
}

/// Switches between 9 and 18 holes. Holes past the active count are kept, missing ones are added.
pub fn resize_holes(round: &mut RoundState, holes_count: HolesCount) {
    let wanted = holes_count.get();
    if round.holes.len() < wanted {
        let start = round.holes.len() + 1;
        round.holes.extend(
            (start..=wanted).map(|n| Hole::new(u8::try_from(n).unwrap_or(u8::MAX))),
        );
    }
    round.holes_count = holes_count;
}

#[must_use]
pub fn template_from_round(round: &RoundState, name: &str) -> CourseTemplate {
    CourseTemplate {
        id: Uuid::new_v4().to_string(),
        name: name.trim().to_string(),
        holes_count: round.holes_count,
        holes: round
            .active_holes()
            .iter()
            .map(|h| TemplateHole {
                n: h.n,
                par: h.par,
                stroke_index: h.stroke_index,
            })
            .collect(),
        created_at: Utc::now(),
    }
}

/// Fresh round on a known layout. Settings (level, weights, scoring distance) come from `base`.
#[must_use]
pub fn apply_template_to_new_round(template: &CourseTemplate, base: &RoundState) -> RoundState {
    let mut holes = make_default_holes(template.holes_count.get());
    for (hole, layout) in holes.iter_mut().zip(&template.holes) {
        hole.par = layout.par;
        hole.stroke_index = layout.stroke_index;
    }
    RoundState {
        holes_count: template.holes_count,
        level: base.level,
        scoring_distance: base.scoring_distance,
        weights: base.weights,
        holes,
    }
}

/// Same course, every entry cleared.
#[must_use]
pub fn reset_round_keep_course(round: &RoundState) -> RoundState {
    RoundState {
        holes: round.holes.iter().map(Hole::cleared).collect(),
        ..round.clone()
    }
}
