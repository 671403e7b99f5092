use std::fmt::Write;

use crate::model::{
    CourseTemplate, Hole, OopsieKind, RoundState, RoundSummary, format_time_ago,
};
use crate::mvu::RoundPhase;
use crate::score::{goal_score, hole_strokes_lost};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreDisplay {
    Condor,
    Albatross,
    Eagle,
    Birdie,
    Par,
    Bogey,
    DoubleBogey,
    TripleBogey,
    Worse,
}

impl ScoreDisplay {
    /// `diff` is strokes minus par.
    #[must_use]
    pub fn from_i32(diff: i32) -> Self {
        match diff {
            i32::MIN..=-4 => Self::Condor,
            -3 => Self::Albatross,
            -2 => Self::Eagle,
            -1 => Self::Birdie,
            0 => Self::Par,
            1 => Self::Bogey,
            2 => Self::DoubleBogey,
            3 => Self::TripleBogey,
            _ => Self::Worse,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Condor => "condor",
            Self::Albatross => "albatross",
            Self::Eagle => "eagle",
            Self::Birdie => "birdie",
            Self::Par => "par",
            Self::Bogey => "bogey",
            Self::DoubleBogey => "double",
            Self::TripleBogey => "triple",
            Self::Worse => "worse",
        }
    }
}

impl From<i32> for ScoreDisplay {
    fn from(value: i32) -> Self {
        Self::from_i32(value)
    }
}

fn opt<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn pct_str(value: Option<u32>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v}%"))
}

fn hole_line(round: &RoundState, hole: &Hole) -> String {
    let goal = goal_score(round.level, hole.par, hole.stroke_index);
    let result = hole.strokes.map_or("", |s| {
        let diff = i64::from(s) - i64::from(hole.par);
        ScoreDisplay::from(i32::try_from(diff).unwrap_or(i32::MAX)).label()
    });
    let reached = match (hole.is_par3(), hole.reached_sd) {
        (true, _) => "n/a",
        (false, Some(true)) => "yes",
        (false, Some(false)) => "no",
        (false, None) => "-",
    };
    format!(
        "{:>2}  {:>3}  {:>2}  {:>4}  {:>7}  {:>5}  {:>3}  {:>3}  {:>4}  {:<8}",
        hole.n,
        hole.par,
        hole.stroke_index,
        goal,
        opt(hole.strokes),
        opt(hole.putts),
        reached,
        OopsieKind::ALL
            .iter()
            .map(|&kind| u64::from(hole.oopsies.count(kind)))
            .sum::<u64>(),
        hole_strokes_lost(hole, &round.weights),
        result,
    )
}

#[must_use]
pub fn render_round(round: &RoundState, phase: RoundPhase) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} holes, level {}, scoring distance {}y, weights bunker {} duffed {} ({phase:?})",
        round.holes_count,
        round.level,
        round.scoring_distance,
        round.weights.bunker,
        round.weights.duffed,
    );
    let _ = writeln!(
        out,
        " #  par  si  goal  strokes  putts   sd  oops  lost  result"
    );
    for hole in round.active_holes() {
        let _ = writeln!(out, "{}", hole_line(round, hole));
    }
    out
}

#[must_use]
pub fn render_summary(summary: &RoundSummary) -> String {
    let mut out = String::new();
    let to_par = summary
        .to_par
        .map_or_else(|| "-".to_string(), |v| format!("{v:+}"));
    let _ = writeln!(out, "strokes            {} ({to_par})", opt(summary.strokes));
    let _ = writeln!(
        out,
        "scoring distance   {}  ({}/{})",
        pct_str(summary.sd_pct),
        summary.sd_made,
        summary.sd_eligible
    );
    let _ = writeln!(
        out,
        "missed SD (NPIR)   {}  ({}/{})",
        pct_str(summary.npir_pct),
        summary.npir_made,
        summary.npir_eligible
    );
    let _ = writeln!(
        out,
        "par-3 finishes     {}  ({}/{})",
        pct_str(summary.p3_pct),
        summary.p3_made,
        summary.p3_eligible
    );
    let _ = writeln!(out, "avg putts          {}", opt(summary.avg_putts));
    let _ = writeln!(out, "putts lost         {}", summary.putts_lost_total);
    let _ = writeln!(
        out,
        "missed inside 6ft  {}  (holes {})",
        summary.missed_putts_6ft_total,
        pct_str(summary.missed_putts_6ft_pct)
    );
    let _ = writeln!(
        out,
        "fairways           {}  ({} fairway, {} trouble)",
        pct_str(summary.tee_shots_fairway_pct),
        summary.tee_shots_fairway_total,
        summary.tee_shots_trouble_total
    );
    let _ = writeln!(out, "strokes lost       {}", summary.strokes_lost_total);
    out
}

#[must_use]
pub fn render_templates(templates: &[CourseTemplate], now: chrono::DateTime<chrono::Utc>) -> String {
    if templates.is_empty() {
        return "no saved courses\n".to_string();
    }
    let mut out = String::new();
    for t in templates {
        let _ = writeln!(
            out,
            "{}  {:<24} {:>2} holes  par {:>2}  saved {} ago",
            t.id,
            t.name,
            t.holes_count,
            t.total_par(),
            format_time_ago(now - t.created_at),
        );
    }
    out
}
