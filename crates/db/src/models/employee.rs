//! Employee entity model and DTOs.

use serde::{Deserialize, Serialize};
use shifttally_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

/// An employee row from the `employees` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Employee {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub color_name: String,
    pub color_code: String,
    /// Optional reference to an uploaded badge photo.
    pub image: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for registering a new employee.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEmployee {
    #[validate(length(min = 1, message = "first_name must not be empty"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "last_name must not be empty"))]
    pub last_name: String,
    #[validate(length(min = 1, message = "color_name is required"))]
    pub color_name: String,
    #[validate(length(min = 1, message = "color_code is required"))]
    pub color_code: String,
    pub image: Option<String>,
}

/// DTO for updating an existing employee. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEmployee {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub color_name: Option<String>,
    pub color_code: Option<String>,
    pub image: Option<String>,
}
