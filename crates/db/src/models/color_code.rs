//! Color-code entity model and DTOs.

use serde::{Deserialize, Serialize};
use shifttally_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

/// A color-code row from the `color_codes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ColorCode {
    pub id: DbId,
    pub color_name: String,
    pub hex_code: String,
    pub created_at: Timestamp,
}

/// DTO for defining a new color code.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateColorCode {
    #[validate(length(min = 1, message = "color_name must not be empty"))]
    pub color_name: String,
    pub hex_code: String,
}
