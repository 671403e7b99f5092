#![allow(dead_code)]

use rusty_golf_rounds::model::{Hole, HolesCount, Level, Oopsies, RoundState, Weights};
use rusty_golf_rounds::score::new_round;

pub fn round_with(holes_count: HolesCount, level: Level) -> RoundState {
    new_round(holes_count, level, 100, Weights::default())
}

/// 18 par 4s at stroke index 10, nothing entered.
pub fn flat_round(level: Level) -> RoundState {
    let mut round = round_with(HolesCount::Eighteen, level);
    for hole in &mut round.holes {
        hole.stroke_index = 10;
    }
    round
}

pub fn hole(par: u8, stroke_index: u8) -> Hole {
    Hole::with_layout(1, par, stroke_index)
}

pub fn played(par: u8, stroke_index: u8, strokes: u32, putts: Option<u32>) -> Hole {
    Hole {
        strokes: Some(strokes),
        putts,
        ..hole(par, stroke_index)
    }
}

pub fn oopsies(lost_ball: u32, bunker: u32, duffed: u32) -> Oopsies {
    Oopsies {
        lost_ball,
        bunker,
        duffed,
    }
}

/// Round with some of everything entered on the front nine.
pub fn busy_round() -> RoundState {
    let mut round = round_with(HolesCount::Eighteen, Level::Break80);
    let entries: [(u8, u8, Option<u32>, Option<u32>, Option<bool>); 9] = [
        (4, 7, Some(5), Some(2), Some(true)),
        (3, 15, Some(4), Some(3), None),
        (5, 1, Some(7), Some(2), Some(false)),
        (4, 11, Some(4), Some(1), Some(true)),
        (4, 3, Some(6), Some(3), Some(false)),
        (3, 5, Some(3), Some(2), None),
        (5, 13, None, Some(2), None),
        (4, 9, Some(5), None, Some(true)),
        (4, 17, Some(4), Some(2), Some(true)),
    ];
    for (hole, (par, si, strokes, putts, reached)) in round.holes.iter_mut().zip(entries) {
        hole.par = par;
        hole.stroke_index = si;
        hole.strokes = strokes;
        hole.putts = putts;
        hole.reached_sd = reached;
    }
    round.holes[2].oopsies = oopsies(1, 1, 0);
    round.holes[4].oopsies = oopsies(0, 2, 1);
    round.holes[4].missed_putts_6ft = Some(1);
    round.holes[7].missed_putts_6ft = Some(2);
    round
}
