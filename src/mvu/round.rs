use log::warn;

use crate::error::CoreError;
use crate::model::{
    CourseTemplate, DEFAULT_SCORING_DISTANCE, Hole, HolesCount, Level, OopsieKind, RoundState,
    RoundSummary, TeeShotResult, Weights, clamp_scoring_distance,
};
use crate::score::{
    apply_template_to_new_round, compute_round_summary, new_round, reset_round_keep_course,
    resize_holes, template_from_round,
};
use crate::storage::Storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    Empty,
    InProgress,
    Finished,
}

#[must_use]
pub fn round_phase(round: &RoundState, completed: bool) -> RoundPhase {
    if completed {
        RoundPhase::Finished
    } else if round.holes.iter().any(Hole::has_entries) {
        RoundPhase::InProgress
    } else {
        RoundPhase::Empty
    }
}

#[derive(Debug, Clone)]
pub struct RoundModel {
    pub round: Option<RoundState>,
    pub completed: bool,
    pub summary: Option<RoundSummary>,
    pub last_template: Option<CourseTemplate>,
    pub error: Option<CoreError>,
}

impl RoundModel {
    #[must_use]
    pub fn new() -> Self {
        Self {
            round: None,
            completed: false,
            summary: None,
            last_template: None,
            error: None,
        }
    }

    #[must_use]
    pub fn with_round(round: RoundState, completed: bool) -> Self {
        Self {
            round: Some(round),
            completed,
            ..Self::new()
        }
    }

    #[must_use]
    pub fn phase(&self) -> Option<RoundPhase> {
        self.round
            .as_ref()
            .map(|round| round_phase(round, self.completed))
    }
}

impl Default for RoundModel {
    fn default() -> Self {
        Self::new()
    }
}

/// One field edit on a single hole.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HoleEdit {
    Par(u8),
    StrokeIndex(u8),
    Strokes(Option<u32>),
    Putts(Option<u32>),
    MissedPutts6ft(Option<u32>),
    ReachedSd(Option<bool>),
    TeeShot(Option<TeeShotResult>),
    Oopsie(OopsieKind, i32),
}

/// Applies `edit` to `hole`. Out-of-range par or stroke index leaves the hole untouched and returns false.
pub fn apply_hole_edit(hole: &mut Hole, edit: HoleEdit) -> bool {
    match edit {
        HoleEdit::Par(par) if !(3..=5).contains(&par) => {
            warn!("par {par} on hole {} is not 3, 4 or 5, ignoring", hole.n);
            return false;
        }
        HoleEdit::StrokeIndex(si) if !(1..=18).contains(&si) => {
            warn!("stroke index {si} on hole {} is not in 1..=18, ignoring", hole.n);
            return false;
        }
        HoleEdit::Par(par) => hole.par = par,
        HoleEdit::StrokeIndex(si) => hole.stroke_index = si,
        HoleEdit::Strokes(strokes) => hole.strokes = strokes,
        HoleEdit::Putts(putts) => hole.putts = putts,
        HoleEdit::MissedPutts6ft(missed) => hole.missed_putts_6ft = missed,
        HoleEdit::ReachedSd(reached) => hole.reached_sd = reached,
        HoleEdit::TeeShot(result) => hole.tee_shot_result = result,
        HoleEdit::Oopsie(kind, delta) => hole.oopsies.adjust(kind, delta),
    }
    true
}

#[derive(Debug, Clone)]
pub enum Msg {
    Load,
    RoundLoaded {
        round: Option<RoundState>,
        completed: bool,
    },
    NewRound {
        holes_count: HolesCount,
        level: Level,
        scoring_distance: u32,
        weights: Weights,
    },
    SetHolesCount(HolesCount),
    SetLevel(Level),
    SetScoringDistance(u32),
    SetWeights(Weights),
    EditHole {
        n: u8,
        edit: HoleEdit,
    },
    ResetKeepCourse,
    ApplyTemplate(CourseTemplate),
    SaveAsTemplate(String),
    Finish,
    Clear,
    Summarized(RoundSummary),
    Saved,
    TemplateSaved(CourseTemplate),
    Failed(CoreError),
}

#[derive(Debug, Clone)]
pub enum Effect {
    LoadRound,
    Summarize,
    Save,
    Clear,
    MarkCompleted(bool),
    SaveTemplate(CourseTemplate),
}

fn start_round(model: &mut RoundModel, round: RoundState) -> Vec<Effect> {
    model.round = Some(round);
    model.completed = false;
    model.summary = None;
    vec![Effect::Clear, Effect::Save, Effect::Summarize]
}

/// Applies `msg` to `model` and returns the effects to run, in order.
pub fn update(model: &mut RoundModel, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::Load => vec![Effect::LoadRound],
        Msg::RoundLoaded { round, completed } => {
            let has_round = round.is_some();
            model.round = round;
            model.completed = has_round && completed;
            model.summary = None;
            if has_round {
                vec![Effect::Summarize]
            } else {
                vec![]
            }
        }
        Msg::NewRound {
            holes_count,
            level,
            scoring_distance,
            weights,
        } if weights.is_valid() => start_round(
            model,
            new_round(
                holes_count,
                level,
                clamp_scoring_distance(scoring_distance),
                weights,
            ),
        ),
        Msg::NewRound { weights, .. } => {
            warn!("new round ignored, weights {weights:?} must be finite and not negative");
            vec![]
        }
        Msg::ResetKeepCourse => match model.round.as_ref() {
            Some(round) => {
                let fresh = reset_round_keep_course(round);
                start_round(model, fresh)
            }
            None => {
                warn!("reset requested with no round loaded");
                vec![]
            }
        },
        Msg::ApplyTemplate(template) => {
            let base = model.round.clone().unwrap_or_else(|| {
                new_round(
                    template.holes_count,
                    Level::default(),
                    DEFAULT_SCORING_DISTANCE,
                    Weights::default(),
                )
            });
            let fresh = apply_template_to_new_round(&template, &base);
            start_round(model, fresh)
        }
        Msg::SaveAsTemplate(name) => match model.round.as_ref() {
            Some(round) => vec![Effect::SaveTemplate(template_from_round(round, &name))],
            None => {
                warn!("cannot save template '{name}' with no round loaded");
                vec![]
            }
        },
        Msg::Finish => {
            if model.round.is_none() {
                warn!("finish requested with no round loaded");
                return vec![];
            }
            model.completed = true;
            vec![Effect::MarkCompleted(true)]
        }
        Msg::Clear => {
            model.round = None;
            model.completed = false;
            model.summary = None;
            vec![Effect::Clear]
        }
        Msg::SetHolesCount(_)
        | Msg::SetLevel(_)
        | Msg::SetScoringDistance(_)
        | Msg::SetWeights(_)
        | Msg::EditHole { .. } => edit_round(model, msg),
        Msg::Summarized(summary) => {
            model.summary = Some(summary);
            vec![]
        }
        Msg::Saved => vec![],
        Msg::TemplateSaved(template) => {
            model.last_template = Some(template);
            vec![]
        }
        Msg::Failed(e) => {
            model.error = Some(e);
            vec![]
        }
    }
}

fn edit_round(model: &mut RoundModel, msg: Msg) -> Vec<Effect> {
    if model.completed {
        warn!("round is finished, ignoring {msg:?}");
        return vec![];
    }
    let Some(round) = model.round.as_mut() else {
        warn!("no round loaded, ignoring {msg:?}");
        return vec![];
    };
    match msg {
        Msg::SetHolesCount(count) => resize_holes(round, count),
        Msg::SetLevel(level) => round.level = level,
        Msg::SetScoringDistance(distance) => {
            round.scoring_distance = clamp_scoring_distance(distance);
        }
        Msg::SetWeights(weights) => {
            if !weights.is_valid() {
                warn!("ignoring weights {weights:?}, must be finite and not negative");
                return vec![];
            }
            round.weights = weights;
        }
        Msg::EditHole { n, edit } => match round.hole_mut(n) {
            Some(hole) => {
                if !apply_hole_edit(hole, edit) {
                    return vec![];
                }
            }
            None => {
                warn!("no hole {n} in this round");
                return vec![];
            }
        },
        _ => return vec![],
    }
    vec![Effect::Summarize, Effect::Save]
}

/// Executes one effect and reports the outcome as the next message.
pub async fn run_effect(effect: Effect, model: &RoundModel, storage: &dyn Storage) -> Msg {
    match effect {
        Effect::LoadRound => {
            let round = match storage.load_round().await {
                Ok(round) => round,
                Err(e) => return Msg::Failed(e.into()),
            };
            match storage.round_completed().await {
                Ok(completed) => Msg::RoundLoaded { round, completed },
                Err(e) => Msg::Failed(e.into()),
            }
        }
        Effect::Summarize => match model.round.as_ref() {
            Some(round) => Msg::Summarized(compute_round_summary(round)),
            None => Msg::Failed(CoreError::NotFound("round".into())),
        },
        Effect::Save => match model.round.as_ref() {
            Some(round) => match storage.save_round(round).await {
                Ok(()) => Msg::Saved,
                Err(e) => Msg::Failed(e.into()),
            },
            None => Msg::Failed(CoreError::NotFound("round".into())),
        },
        Effect::Clear => match storage.clear_round().await {
            Ok(()) => Msg::Saved,
            Err(e) => Msg::Failed(e.into()),
        },
        Effect::MarkCompleted(completed) => match storage.set_completed(completed).await {
            Ok(()) => Msg::Saved,
            Err(e) => Msg::Failed(e.into()),
        },
        Effect::SaveTemplate(template) => match storage.save_template(&template).await {
            Ok(()) => Msg::TemplateSaved(template),
            Err(e) => Msg::Failed(e.into()),
        },
    }
}
