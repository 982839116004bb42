//! Admin credential model and auth DTOs.

use serde::{Deserialize, Serialize};
use shifttally_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

/// An admin row from the `admins` table. The password hash is never
/// serialized into responses.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Admin {
    pub id: DbId,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String,
    pub created_at: Timestamp,
}

/// DTO for registering an admin account.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterAdmin {
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
}

/// DTO for the login request.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
