use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::round::HolesCount;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TemplateHole {
    pub n: u8,
    pub par: u8,
    pub stroke_index: u8,
}

/// Static course layout, no entry data.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CourseTemplate {
    pub id: String,
    pub name: String,
    pub holes_count: HolesCount,
    pub holes: Vec<TemplateHole>,
    pub created_at: DateTime<Utc>,
}

impl CourseTemplate {
    #[must_use]
    pub fn total_par(&self) -> u32 {
        self.holes.iter().map(|h| u32::from(h.par)).sum()
    }
}
