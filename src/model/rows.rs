//! Row shapes of the remote store. Field names follow the table columns.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::model::hole::{Hole, Oopsies, TeeShotResult};
use crate::model::round::{HolesCount, Level, RoundState, Weights};
use crate::model::summary::RoundSummary;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RoundRow {
    pub holes_count: u8,
    pub level: String,
    pub scoring_distance: u32,
    pub weights: Weights,
    pub completed: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HoleRow {
    pub hole_no: u8,
    pub par: u8,
    pub stroke_index: u8,
    pub strokes: Option<u32>,
    pub putts: Option<u32>,
    pub reached_sd: Option<bool>,
    pub oopsies: Oopsies,
    pub missed_putts_6ft: Option<u32>,
    pub tee_shot_result: Option<TeeShotResult>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SummaryRow {
    pub strokes: Option<u32>,
    pub to_par: Option<i32>,
    pub sd_pct: Option<u32>,
    pub sd_made: u32,
    pub sd_eligible: u32,
    pub npir_pct: Option<u32>,
    pub npir_made: u32,
    pub npir_eligible: u32,
    pub p3_pct: Option<u32>,
    pub p3_made: u32,
    pub p3_eligible: u32,
    pub avg_putts: Option<f64>,
    pub putts_lost_total: f64,
    pub missed_putts_6ft_total: u32,
    pub missed_putts_6ft_pct: Option<u32>,
    pub tee_shots_fairway_total: u32,
    pub tee_shots_trouble_total: u32,
    pub tee_shots_fairway_pct: Option<u32>,
    pub strokes_lost_total: f64,
}

impl RoundRow {
    #[must_use]
    pub fn from_round(round: &RoundState, completed: bool) -> Self {
        Self {
            holes_count: u8::from(round.holes_count),
            level: round.level.to_string(),
            scoring_distance: round.scoring_distance,
            weights: round.weights,
            completed,
        }
    }

    /// Rebuilds the in-memory round from its row and hole rows.
    ///
    /// # Errors
    /// Returns an error if the level or holes count stored in the row is unknown.
    pub fn into_round(self, mut holes: Vec<HoleRow>) -> Result<RoundState, CoreError> {
        holes.sort_by_key(|h| h.hole_no);
        Ok(RoundState {
            holes_count: HolesCount::try_from(self.holes_count)?,
            level: self.level.parse::<Level>()?,
            scoring_distance: self.scoring_distance,
            weights: self.weights,
            holes: holes.into_iter().map(Hole::from).collect(),
        })
    }
}

impl From<&Hole> for HoleRow {
    fn from(hole: &Hole) -> Self {
        Self {
            hole_no: hole.n,
            par: hole.par,
            stroke_index: hole.stroke_index,
            strokes: hole.strokes,
            putts: hole.putts,
            reached_sd: hole.reached_sd,
            oopsies: hole.oopsies,
            missed_putts_6ft: hole.missed_putts_6ft,
            tee_shot_result: hole.tee_shot_result,
        }
    }
}

impl From<HoleRow> for Hole {
    fn from(row: HoleRow) -> Self {
        Self {
            n: row.hole_no,
            par: row.par,
            stroke_index: row.stroke_index,
            strokes: row.strokes,
            putts: row.putts,
            missed_putts_6ft: row.missed_putts_6ft,
            reached_sd: row.reached_sd,
            oopsies: row.oopsies,
            tee_shot_result: row.tee_shot_result,
        }
    }
}

impl From<&RoundSummary> for SummaryRow {
    fn from(s: &RoundSummary) -> Self {
        Self {
            strokes: s.strokes,
            to_par: s.to_par,
            sd_pct: s.sd_pct,
            sd_made: s.sd_made,
            sd_eligible: s.sd_eligible,
            npir_pct: s.npir_pct,
            npir_made: s.npir_made,
            npir_eligible: s.npir_eligible,
            p3_pct: s.p3_pct,
            p3_made: s.p3_made,
            p3_eligible: s.p3_eligible,
            avg_putts: s.avg_putts,
            putts_lost_total: s.putts_lost_total,
            missed_putts_6ft_total: s.missed_putts_6ft_total,
            missed_putts_6ft_pct: s.missed_putts_6ft_pct,
            tee_shots_fairway_total: s.tee_shots_fairway_total,
            tee_shots_trouble_total: s.tee_shots_trouble_total,
            tee_shots_fairway_pct: s.tee_shots_fairway_pct,
            strokes_lost_total: s.strokes_lost_total,
        }
    }
}

impl From<SummaryRow> for RoundSummary {
    fn from(r: SummaryRow) -> Self {
        Self {
            strokes: r.strokes,
            to_par: r.to_par,
            sd_pct: r.sd_pct,
            sd_made: r.sd_made,
            sd_eligible: r.sd_eligible,
            npir_pct: r.npir_pct,
            npir_made: r.npir_made,
            npir_eligible: r.npir_eligible,
            p3_pct: r.p3_pct,
            p3_made: r.p3_made,
            p3_eligible: r.p3_eligible,
            avg_putts: r.avg_putts,
            putts_lost_total: r.putts_lost_total,
            missed_putts_6ft_total: r.missed_putts_6ft_total,
            missed_putts_6ft_pct: r.missed_putts_6ft_pct,
            tee_shots_fairway_total: r.tee_shots_fairway_total,
            tee_shots_trouble_total: r.tee_shots_trouble_total,
            tee_shots_fairway_pct: r.tee_shots_fairway_pct,
            strokes_lost_total: r.strokes_lost_total,
        }
    }
}
