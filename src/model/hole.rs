use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CoreError;

/// Short-game and tee mishaps recorded against a hole.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Oopsies {
    pub lost_ball: u32,
    pub bunker: u32,
    pub duffed: u32,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum OopsieKind {
    LostBall,
    Bunker,
    Duffed,
}

impl OopsieKind {
    pub const ALL: [OopsieKind; 3] = [Self::LostBall, Self::Bunker, Self::Duffed];
}

impl Oopsies {
    #[must_use]
    pub fn count(&self, kind: OopsieKind) -> u32 {
        match kind {
            OopsieKind::LostBall => self.lost_ball,
            OopsieKind::Bunker => self.bunker,
            OopsieKind::Duffed => self.duffed,
        }
    }

    /// Adds `delta` to the counter for `kind`, never going below zero.
    pub fn adjust(&mut self, kind: OopsieKind, delta: i32) {
        let slot = match kind {
            OopsieKind::LostBall => &mut self.lost_ball,
            OopsieKind::Bunker => &mut self.bunker,
            OopsieKind::Duffed => &mut self.duffed,
        };
        *slot = slot.saturating_add_signed(delta);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lost_ball == 0 && self.bunker == 0 && self.duffed == 0
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TeeShotResult {
    Fairway,
    Trouble,
}

impl TeeShotResult {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TeeShotResult::Fairway => "fairway",
            TeeShotResult::Trouble => "trouble",
        }
    }
}

impl FromStr for TeeShotResult {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fairway" => Ok(TeeShotResult::Fairway),
            "trouble" => Ok(TeeShotResult::Trouble),
            other => Err(CoreError::Parse(format!("unknown tee shot result '{other}'"))),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Hole {
    pub n: u8,
    pub par: u8,
    pub stroke_index: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strokes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub putts: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missed_putts_6ft: Option<u32>,
    #[serde(rename = "reachedSD", default, skip_serializing_if = "Option::is_none")]
    pub reached_sd: Option<bool>,
    #[serde(default)]
    pub oopsies: Oopsies,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tee_shot_result: Option<TeeShotResult>,
}

impl Hole {
    /// A par 4 with no entries, stroke index matching its position.
    #[must_use]
    pub fn new(n: u8) -> Self {
        Self::with_layout(n, 4, n)
    }

    #[must_use]
    pub fn with_layout(n: u8, par: u8, stroke_index: u8) -> Self {
        Self {
            n,
            par,
            stroke_index,
            strokes: None,
            putts: None,
            missed_putts_6ft: None,
            reached_sd: None,
            oopsies: Oopsies::default(),
            tee_shot_result: None,
        }
    }

    #[must_use]
    pub fn is_par3(&self) -> bool {
        self.par == 3
    }

    /// Same position and layout, every entry field cleared.
    #[must_use]
    pub fn cleared(&self) -> Self {
        Self::with_layout(self.n, self.par, self.stroke_index)
    }

    /// True once anything beyond the course layout has been entered.
    #[must_use]
    pub fn has_entries(&self) -> bool {
        self.strokes.is_some()
            || self.putts.is_some()
            || self.missed_putts_6ft.is_some()
            || self.reached_sd.is_some()
            || self.tee_shot_result.is_some()
            || !self.oopsies.is_empty()
    }
}
