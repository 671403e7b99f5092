mod common;

use chrono::{Duration, Utc};
use common::busy_round;
use rusty_golf_rounds::mvu::{RoundPhase, round_phase};
use rusty_golf_rounds::score::{compute_round_summary, template_from_round};
use rusty_golf_rounds::view::{ScoreDisplay, render_round, render_summary, render_templates};

#[test]
fn test8_score_display() {
    assert_eq!(ScoreDisplay::from(-5), ScoreDisplay::Condor);
    assert_eq!(ScoreDisplay::from(-1), ScoreDisplay::Birdie);
    assert_eq!(ScoreDisplay::from(0).label(), "par");
    assert_eq!(ScoreDisplay::from(2).label(), "double");
    assert_eq!(ScoreDisplay::from(7), ScoreDisplay::Worse);
}

#[test]
fn test8_render_round_lists_active_holes() {
    let round = busy_round();
    let phase = round_phase(&round, false);
    assert_eq!(phase, RoundPhase::InProgress);

    let text = render_round(&round, phase);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2 + 18);
    assert!(lines[0].starts_with("18 holes, level Break80"));
    assert!(lines[0].ends_with("(InProgress)"));
    assert!(lines[3].trim_end().ends_with("bogey"));
}

#[test]
fn test8_render_summary() {
    let text = render_summary(&compute_round_summary(&busy_round()));
    assert!(text.contains("strokes            38 (+7)"));
    assert!(text.contains("strokes lost       8"));

    let empty = render_summary(&Default::default());
    assert!(empty.contains("strokes            - (-)"));
    assert!(empty.contains("scoring distance   -  (0/0)"));
}

#[test]
fn test8_render_templates() {
    let now = Utc::now();
    assert_eq!(render_templates(&[], now), "no saved courses\n");

    let mut template = template_from_round(&busy_round(), "Links");
    template.created_at = now - Duration::days(3);
    let text = render_templates(&[template.clone()], now);
    assert!(text.starts_with(&template.id));
    assert!(text.contains("Links"));
    assert!(text.contains("par 72"));
    assert!(text.trim_end().ends_with("saved 3 days ago"));
}

#[test]
fn test8_render_round_with_huge_oopsie_counts() {
    let mut round = busy_round();
    round.holes[0].oopsies.bunker = u32::MAX;
    round.holes[0].oopsies.duffed = u32::MAX;
    let text = render_round(&round, RoundPhase::InProgress);
    let expected = (u64::from(u32::MAX) * 2).to_string();
    assert!(text.lines().nth(2).unwrap().contains(&expected));
}
