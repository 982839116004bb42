//! Defect-type entity model and DTOs.

use serde::{Deserialize, Serialize};
use shifttally_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A defect-type row from the `defect_types` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DefectType {
    pub id: DbId,
    pub defect_name: String,
    pub created_at: Timestamp,
}

/// DTO for defining a new defect type.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDefectType {
    pub defect_name: String,
}
