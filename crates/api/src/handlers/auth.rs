//! Handlers for admin registration and login.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use shifttally_core::error::CoreError;
use shifttally_db::models::admin::{Admin, LoginRequest, RegisterAdmin};
use shifttally_db::repositories::AdminRepo;
use validator::Validate;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Login response payload: the signed token plus the admin's public fields.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub admin: Admin,
}

// ---------------------------------------------------------------------------
// POST /auth/register
// ---------------------------------------------------------------------------

/// Register a new admin account.
///
/// The password is Argon2id-hashed before storage; a duplicate email maps
/// to 409 via the unique constraint.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterAdmin>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    let admin = AdminRepo::create(&state.pool, &input.email, &password_hash).await?;

    tracing::info!(admin_id = admin.id, "Registered admin account");

    Ok(Json(DataResponse { data: admin }))
}

// ---------------------------------------------------------------------------
// POST /auth/login
// ---------------------------------------------------------------------------

/// Verify credentials and issue an access token.
///
/// Unknown email and wrong password produce the same 401 message so the
/// response does not reveal which accounts exist.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let invalid =
        || AppError::Core(CoreError::Unauthorized("Invalid email or password".into()));

    let admin = AdminRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(invalid)?;

    let verified = verify_password(&input.password, &admin.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification failed: {e}")))?;
    if !verified {
        return Err(invalid());
    }

    let token = generate_access_token(admin.id, &admin.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;

    tracing::info!(admin_id = admin.id, "Admin logged in");

    Ok(Json(DataResponse {
        data: LoginResponse { token, admin },
    }))
}
