mod common;

use common::{busy_round, flat_round, oopsies, round_with};
use rusty_golf_rounds::model::{HolesCount, Level, RoundSummary, TeeShotResult, round1};
use rusty_golf_rounds::score::{compute_round_summary, hole_strokes_lost, resize_holes};

#[test]
fn test3_single_finished_hole() {
    let mut round = flat_round(Level::BogeyGolf);
    round.holes[0].strokes = Some(5);
    round.holes[0].putts = Some(2);
    round.holes[0].reached_sd = Some(true);

    assert_eq!(hole_strokes_lost(&round.holes[0], &round.weights), 0.0);

    let summary = compute_round_summary(&round);
    let expected = RoundSummary {
        strokes: Some(5),
        to_par: Some(1),
        sd_pct: Some(100),
        sd_made: 1,
        sd_eligible: 1,
        npir_pct: Some(0),
        npir_made: 0,
        npir_eligible: 1,
        p3_pct: Some(100),
        p3_made: 1,
        p3_eligible: 1,
        avg_putts: Some(2.0),
        putts_lost_total: 0.0,
        missed_putts_6ft_total: 0,
        missed_putts_6ft_pct: Some(0),
        tee_shots_fairway_total: 0,
        tee_shots_trouble_total: 0,
        tee_shots_fairway_pct: None,
        strokes_lost_total: 0.0,
    };
    assert_eq!(summary, expected);
}

#[test]
fn test3_empty_round_has_no_percentages() {
    let summary = compute_round_summary(&flat_round(Level::Scratch));
    assert_eq!(summary.strokes, None);
    assert_eq!(summary.to_par, None);
    assert_eq!(summary.avg_putts, None);
    assert_eq!(summary.sd_pct, None);
    assert_eq!(summary.npir_pct, None);
    assert_eq!(summary.p3_pct, None);
    assert_eq!(summary.missed_putts_6ft_pct, None);
    assert_eq!(summary.tee_shots_fairway_pct, None);
    assert_eq!(summary.strokes_lost_total, 0.0);
}

#[test]
fn test3_all_par3_round_has_no_scoring_distance_pct() {
    let mut round = round_with(HolesCount::Nine, Level::BogeyGolf);
    for hole in &mut round.holes {
        hole.par = 3;
        hole.strokes = Some(3);
        hole.reached_sd = Some(true);
    }
    let summary = compute_round_summary(&round);
    assert_eq!(summary.sd_eligible, 0);
    assert_eq!(summary.sd_pct, None);
    assert_eq!(summary.npir_pct, None);
    assert_eq!(summary.p3_eligible, 9);
    assert_eq!(summary.p3_pct, Some(100));
    assert_eq!(summary.to_par, Some(0));
}

#[test]
fn test3_unset_reached_sd_counts_as_missed() {
    let mut round = flat_round(Level::BogeyGolf);
    round.holes[0].strokes = Some(6);
    round.holes[1].strokes = Some(4);
    round.holes[1].reached_sd = Some(false);
    round.holes[2].strokes = Some(5);
    round.holes[2].reached_sd = Some(true);
    // no strokes: not eligible
    round.holes[3].reached_sd = Some(true);

    let summary = compute_round_summary(&round);
    assert_eq!((summary.sd_made, summary.sd_eligible), (1, 3));
    assert_eq!((summary.npir_made, summary.npir_eligible), (2, 3));
    assert_eq!(summary.sd_pct, Some(33));
    assert_eq!(summary.npir_pct, Some(67));
    assert_eq!(summary.strokes, Some(15));
    assert_eq!(summary.to_par, Some(3));
}

#[test]
fn test3_holes_beyond_count_are_ignored() {
    let mut round = round_with(HolesCount::Eighteen, Level::BogeyGolf);
    round.holes[11].strokes = Some(9);
    round.holes[11].putts = Some(4);
    round.holes[11].tee_shot_result = Some(TeeShotResult::Trouble);
    resize_holes(&mut round, HolesCount::Nine);
    assert_eq!(round.holes.len(), 18);

    let summary = compute_round_summary(&round);
    assert_eq!(summary, compute_round_summary(&round_with(HolesCount::Nine, Level::BogeyGolf)));
    assert_eq!(summary.strokes, None);
    assert_eq!(summary.strokes_lost_total, 0.0);
}

#[test]
fn test3_losses_count_on_unfinished_holes() {
    let mut round = flat_round(Level::Break80);
    round.holes[4].oopsies = oopsies(1, 1, 0);
    round.holes[4].putts = Some(3);

    let summary = compute_round_summary(&round);
    assert_eq!(summary.strokes, None);
    assert_eq!(summary.strokes_lost_total, 4.0);
    assert_eq!(summary.putts_lost_total, 1.0);
    assert_eq!(summary.avg_putts, Some(3.0));
}

#[test]
fn test3_average_putts_rounds_to_one_decimal() {
    let mut round = flat_round(Level::BogeyGolf);
    for (hole, putts) in round.holes.iter_mut().zip([2, 2, 1]) {
        hole.putts = Some(putts);
    }
    assert_eq!(compute_round_summary(&round).avg_putts, Some(1.7));
}

#[test]
fn test3_tee_shots_skip_par3s() {
    let mut round = flat_round(Level::BogeyGolf);
    for (hole, result) in round.holes.iter_mut().zip([
        TeeShotResult::Fairway,
        TeeShotResult::Fairway,
        TeeShotResult::Trouble,
        TeeShotResult::Fairway,
    ]) {
        hole.tee_shot_result = Some(result);
    }
    round.holes[5].par = 3;
    round.holes[5].tee_shot_result = Some(TeeShotResult::Trouble);

    let summary = compute_round_summary(&round);
    assert_eq!(summary.tee_shots_fairway_total, 3);
    assert_eq!(summary.tee_shots_trouble_total, 1);
    assert_eq!(summary.tee_shots_fairway_pct, Some(75));
}

#[test]
fn test3_missed_short_putts() {
    let mut round = flat_round(Level::BogeyGolf);
    round.holes[0].putts = Some(3);
    round.holes[0].missed_putts_6ft = Some(1);
    round.holes[1].putts = Some(2);
    round.holes[1].missed_putts_6ft = Some(0);
    round.holes[2].putts = Some(1);
    round.holes[3].putts = Some(2);
    // no putts entered: counted in the total only
    round.holes[4].missed_putts_6ft = Some(2);

    let summary = compute_round_summary(&round);
    assert_eq!(summary.missed_putts_6ft_total, 3);
    assert_eq!(summary.missed_putts_6ft_pct, Some(25));
}

#[test]
fn test3_total_loss_matches_holes() {
    let round = busy_round();
    let summary = compute_round_summary(&round);
    let by_hole: f64 = round
        .active_holes()
        .iter()
        .map(|h| hole_strokes_lost(h, &round.weights))
        .sum();
    assert_eq!(summary.strokes_lost_total, round1(by_hole));
    assert_eq!(summary.strokes_lost_total, 8.0);
    assert_eq!(summary.putts_lost_total, 2.0);
}

#[test]
fn test3_summary_is_deterministic() {
    let round = busy_round();
    let first = compute_round_summary(&round);
    let second = compute_round_summary(&round);
    assert_eq!(first, second);
    assert_eq!(first.strokes, Some(38));
    // hole 7 has no strokes, so its par 5 is left out
    assert_eq!(first.to_par, Some(38 - 31));
}

#[test]
fn test3_huge_putt_counts_saturate() {
    let mut round = flat_round(Level::BogeyGolf);
    round.holes[0].putts = Some(u32::MAX);
    round.holes[1].putts = Some(2);
    round.holes[2].missed_putts_6ft = Some(u32::MAX);
    round.holes[3].missed_putts_6ft = Some(1);

    let summary = compute_round_summary(&round);
    assert_eq!(summary.missed_putts_6ft_total, u32::MAX);
    let avg = summary.avg_putts.unwrap();
    assert!(avg > 2.0e9);
    assert!(summary.putts_lost_total > 4.0e9);
    assert!(summary.strokes_lost_total.is_finite());
}
