use serde::{Deserialize, Serialize};

/// Derived view of a round. Always rebuilt in full, never patched.
///
/// Percentages are `None` whenever their denominator is zero. Missing values are left out
/// of the JSON, same as unset hole fields.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoundSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strokes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_par: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sd_pct: Option<u32>,
    pub sd_made: u32,
    pub sd_eligible: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub npir_pct: Option<u32>,
    pub npir_made: u32,
    pub npir_eligible: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p3_pct: Option<u32>,
    pub p3_made: u32,
    pub p3_eligible: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_putts: Option<f64>,
    pub putts_lost_total: f64,
    pub missed_putts_6ft_total: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missed_putts_6ft_pct: Option<u32>,
    pub tee_shots_fairway_total: u32,
    pub tee_shots_trouble_total: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tee_shots_fairway_pct: Option<u32>,
    pub strokes_lost_total: f64,
}
