//! Handlers for the color-code reference list.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use shifttally_core::catalog;
use shifttally_core::error::CoreError;
use shifttally_core::types::DbId;
use shifttally_db::models::color_code::CreateColorCode;
use shifttally_db::repositories::ColorCodeRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /color-codes
// ---------------------------------------------------------------------------

/// List all defined color codes in definition order.
pub async fn list_color_codes(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let colors = ColorCodeRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: colors }))
}

// ---------------------------------------------------------------------------
// POST /color-codes
// ---------------------------------------------------------------------------

/// Define a new color code. The hex value must be a 6-digit `#RRGGBB`.
pub async fn create_color_code(
    admin: AuthAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateColorCode>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    catalog::validate_hex_code(&input.hex_code)?;

    let color = ColorCodeRepo::create(&state.pool, &input).await?;

    tracing::info!(
        admin_id = admin.admin_id,
        color_id = color.id,
        color_name = %color.color_name,
        "Defined color code"
    );

    Ok(Json(DataResponse { data: color }))
}

// ---------------------------------------------------------------------------
// DELETE /color-codes/{id}
// ---------------------------------------------------------------------------

/// Remove a color code from the reference list.
pub async fn delete_color_code(
    admin: AuthAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ColorCodeRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "color code",
            id,
        }));
    }

    tracing::info!(admin_id = admin.admin_id, color_id = id, "Deleted color code");

    Ok(Json(DataResponse { data: deleted }))
}
