use crate::model::{RoundState, RoundSummary, TeeShotResult, pct, round1};
use crate::score::loss::{hole_strokes_lost, par3_equivalent, putting_lost};

#[derive(Default)]
struct Tally {
    played_par: i64,
    total_strokes: i64,
    holes_with_strokes: u32,
    sd_made: u32,
    sd_eligible: u32,
    npir_made: u32,
    npir_eligible: u32,
    p3_made: u32,
    p3_eligible: u32,
    putts_entered: u32,
    putts_total: u64,
    putts_lost_total: f64,
    holes_with_putts: u32,
    missed_putts_6ft_total: u64,
    holes_with_missed_putts_6ft: u32,
    tee_fairway: u32,
    tee_trouble: u32,
    strokes_lost_total: f64,
}

/// Single pass over the active holes of `round`.
///
/// Pure and deterministic: calling it twice on the same round gives equal summaries.
#[must_use]
pub fn compute_round_summary(round: &RoundState) -> RoundSummary {
    let mut t = Tally::default();

    for hole in round.active_holes() {
        // unfinished holes still carry their losses
        t.strokes_lost_total += hole_strokes_lost(hole, &round.weights);

        if let Some(strokes) = hole.strokes {
            t.holes_with_strokes += 1;
            t.total_strokes += i64::from(strokes);
            // to-par only compares against holes actually played
            t.played_par += i64::from(hole.par);

            if !hole.is_par3() {
                t.sd_eligible += 1;
                t.npir_eligible += 1;
                if hole.reached_sd == Some(true) {
                    t.sd_made += 1;
                } else {
                    t.npir_made += 1;
                }
            }

            if let Some(made) = par3_equivalent(round.level, hole) {
                t.p3_eligible += 1;
                if made {
                    t.p3_made += 1;
                }
            }
        }

        if let Some(putts) = hole.putts {
            t.putts_entered += 1;
            t.putts_total += u64::from(putts);
            t.putts_lost_total += f64::from(putting_lost(Some(putts)));
            t.holes_with_putts += 1;
        }

        if let Some(missed) = hole.missed_putts_6ft.filter(|m| *m > 0) {
            t.missed_putts_6ft_total += u64::from(missed);
            if hole.putts.is_some() {
                t.holes_with_missed_putts_6ft += 1;
            }
        }

        if !hole.is_par3() {
            match hole.tee_shot_result {
                Some(TeeShotResult::Fairway) => t.tee_fairway += 1,
                Some(TeeShotResult::Trouble) => t.tee_trouble += 1,
                None => {}
            }
        }
    }

    let played = t.holes_with_strokes > 0;
    RoundSummary {
        strokes: played.then(|| u32::try_from(t.total_strokes).unwrap_or(u32::MAX)),
        to_par: played.then(|| i32::try_from(t.total_strokes - t.played_par).unwrap_or(i32::MAX)),
        sd_pct: pct(t.sd_made, t.sd_eligible),
        sd_made: t.sd_made,
        sd_eligible: t.sd_eligible,
        npir_pct: pct(t.npir_made, t.npir_eligible),
        npir_made: t.npir_made,
        npir_eligible: t.npir_eligible,
        p3_pct: pct(t.p3_made, t.p3_eligible),
        p3_made: t.p3_made,
        p3_eligible: t.p3_eligible,
        avg_putts: (t.putts_entered > 0)
            .then(|| round1(t.putts_total as f64 / f64::from(t.putts_entered))),
        putts_lost_total: round1(t.putts_lost_total),
        missed_putts_6ft_total: u32::try_from(t.missed_putts_6ft_total).unwrap_or(u32::MAX),
        missed_putts_6ft_pct: pct(t.holes_with_missed_putts_6ft, t.holes_with_putts),
        tee_shots_fairway_total: t.tee_fairway,
        tee_shots_trouble_total: t.tee_trouble,
        tee_shots_fairway_pct: pct(t.tee_fairway, t.tee_fairway + t.tee_trouble),
        strokes_lost_total: round1(t.strokes_lost_total),
    }
}
