//! Defect-event entity model and DTOs.
//!
//! Events link to employees and defect types by name string, not foreign
//! key, matching the pre-existing store. The count and time columns are
//! raw text; normalization happens when the aggregator reads them.

use serde::{Deserialize, Serialize};
use shifttally_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A defect-event row from the `defect_events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DefectEvent {
    pub id: DbId,
    pub employee_name: String,
    pub defect_name: String,
    pub defect_count: String,
    /// Free-format time-of-day string, e.g. "14:30" or "14".
    #[serde(rename = "time")]
    pub event_time: String,
    pub created_at: Timestamp,
}

/// Count field as submitted by producers, who disagree on the JSON type.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CountField {
    Number(i64),
    Text(String),
}

impl CountField {
    /// Canonical text form for storage.
    pub fn as_text(&self) -> String {
        match self {
            CountField::Number(n) => n.to_string(),
            CountField::Text(s) => s.trim().to_string(),
        }
    }

    /// Parse as a non-negative integer, or `None` if malformed.
    pub fn as_non_negative(&self) -> Option<i64> {
        match self {
            CountField::Number(n) if *n >= 0 => Some(*n),
            CountField::Number(_) => None,
            CountField::Text(s) => s.trim().parse::<i64>().ok().filter(|n| *n >= 0),
        }
    }
}

/// DTO for recording a defect tally.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDefectEvent {
    pub employee_name: String,
    pub defect_name: String,
    pub defect_count: CountField,
    #[serde(rename = "time")]
    pub event_time: String,
}

/// DTO for the grid write-back path: replaces a record's count.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDefectEvent {
    pub defect_count: CountField,
}
