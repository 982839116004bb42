//! Handlers for the defect-type reference list.
//!
//! Creation is capped at `ServerConfig::max_defect_types` (the original
//! console enforced 7, later revisions 15, so the cap is configuration).

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use shifttally_core::catalog;
use shifttally_core::error::CoreError;
use shifttally_core::types::DbId;
use shifttally_db::models::defect_type::CreateDefectType;
use shifttally_db::repositories::DefectTypeRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /defect-types
// ---------------------------------------------------------------------------

/// List all defined defect types in definition order.
pub async fn list_defect_types(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let defect_types = DefectTypeRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: defect_types }))
}

// ---------------------------------------------------------------------------
// POST /defect-types
// ---------------------------------------------------------------------------

/// Define a new defect type, subject to the configured cap.
pub async fn create_defect_type(
    admin: AuthAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateDefectType>,
) -> AppResult<impl IntoResponse> {
    catalog::validate_defect_name(&input.defect_name)?;

    let current = DefectTypeRepo::count(&state.pool).await?;
    catalog::ensure_defect_type_capacity(current as usize, state.config.max_defect_types)?;

    let defect_type = DefectTypeRepo::create(&state.pool, &input).await?;

    tracing::info!(
        admin_id = admin.admin_id,
        defect_type_id = defect_type.id,
        defect_name = %defect_type.defect_name,
        "Defined defect type"
    );

    Ok(Json(DataResponse { data: defect_type }))
}

// ---------------------------------------------------------------------------
// DELETE /defect-types/{id}
// ---------------------------------------------------------------------------

/// Remove a defect type. Existing events naming it are skipped by the
/// aggregator from then on.
pub async fn delete_defect_type(
    admin: AuthAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = DefectTypeRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "defect type",
            id,
        }));
    }

    tracing::info!(admin_id = admin.admin_id, defect_type_id = id, "Deleted defect type");

    Ok(Json(DataResponse { data: deleted }))
}
