use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::model::hole::{Hole, OopsieKind};

pub const DEFAULT_SCORING_DISTANCE: u32 = 100;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Level {
    #[default]
    BogeyGolf,
    #[value(name = "break80")]
    Break80,
    Scratch,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Level::BogeyGolf => "BogeyGolf",
            Level::Break80 => "Break80",
            Level::Scratch => "Scratch",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Level {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BogeyGolf" => Ok(Level::BogeyGolf),
            "Break80" => Ok(Level::Break80),
            "Scratch" => Ok(Level::Scratch),
            other => Err(CoreError::Parse(format!("unknown level '{other}'"))),
        }
    }
}

/// Multipliers applied to bunker and duffed counts when summing stroke loss.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Weights {
    pub bunker: f64,
    pub duffed: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            bunker: 1.0,
            duffed: 1.0,
        }
    }
}

impl Weights {
    /// Both multipliers finite and `>= 0`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        [self.bunker, self.duffed]
            .iter()
            .all(|w| w.is_finite() && *w >= 0.0)
    }

    /// Lost balls carry a fixed penalty and have no configurable weight.
    #[must_use]
    pub fn for_kind(&self, kind: OopsieKind) -> Option<f64> {
        match kind {
            OopsieKind::LostBall => None,
            OopsieKind::Bunker => Some(self.bunker),
            OopsieKind::Duffed => Some(self.duffed),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(try_from = "u8", into = "u8")]
pub enum HolesCount {
    Nine,
    #[default]
    Eighteen,
}

impl HolesCount {
    #[must_use]
    pub fn get(self) -> usize {
        match self {
            HolesCount::Nine => 9,
            HolesCount::Eighteen => 18,
        }
    }
}

impl TryFrom<u8> for HolesCount {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            9 => Ok(HolesCount::Nine),
            18 => Ok(HolesCount::Eighteen),
            other => Err(CoreError::Invalid(format!(
                "holes count must be 9 or 18, got {other}"
            ))),
        }
    }
}

impl From<HolesCount> for u8 {
    fn from(value: HolesCount) -> Self {
        match value {
            HolesCount::Nine => 9,
            HolesCount::Eighteen => 18,
        }
    }
}

impl fmt::Display for HolesCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoundState {
    pub holes_count: HolesCount,
    pub level: Level,
    pub scoring_distance: u32,
    #[serde(default)]
    pub weights: Weights,
    pub holes: Vec<Hole>,
}

impl RoundState {
    /// The holes that count for this round; the rest are kept for 9/18 toggling.
    #[must_use]
    pub fn active_holes(&self) -> &[Hole] {
        let end = self.holes_count.get().min(self.holes.len());
        &self.holes[..end]
    }

    #[must_use]
    pub fn hole(&self, n: u8) -> Option<&Hole> {
        self.holes.iter().find(|h| h.n == n)
    }

    pub fn hole_mut(&mut self, n: u8) -> Option<&mut Hole> {
        self.holes.iter_mut().find(|h| h.n == n)
    }

    /// Checks the layout invariants. The scoring functions never call this.
    ///
    /// # Errors
    /// Returns `CoreError::Invalid` naming the first violated invariant.
    pub fn validate(&self) -> Result<(), CoreError> {
        let count = self.holes_count.get();
        if self.holes.len() < count {
            return Err(CoreError::Invalid(format!(
                "round has {} holes, expected at least {count}",
                self.holes.len()
            )));
        }
        for (idx, hole) in self.holes.iter().enumerate() {
            if usize::from(hole.n) != idx + 1 {
                return Err(CoreError::Invalid(format!(
                    "hole at position {} is numbered {}",
                    idx + 1,
                    hole.n
                )));
            }
            if !(3..=5).contains(&hole.par) {
                return Err(CoreError::Invalid(format!(
                    "hole {} has par {}, expected 3, 4 or 5",
                    hole.n, hole.par
                )));
            }
            if !(1..=18).contains(&hole.stroke_index) {
                return Err(CoreError::Invalid(format!(
                    "hole {} has stroke index {}, expected 1..=18",
                    hole.n, hole.stroke_index
                )));
            }
        }
        Ok(())
    }
}
