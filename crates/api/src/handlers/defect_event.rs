//! Handlers for recorded defect events.
//!
//! The count field accepts either a JSON number or a numeric string on the
//! wire; it is validated and stored in canonical text form.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use shifttally_core::error::CoreError;
use shifttally_core::types::DbId;
use shifttally_db::models::defect_event::{CreateDefectEvent, UpdateDefectEvent};
use shifttally_db::repositories::DefectEventRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /defect-events
// ---------------------------------------------------------------------------

/// List all recorded defect events in recording order.
pub async fn list_defect_events(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let events = DefectEventRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: events }))
}

// ---------------------------------------------------------------------------
// POST /defect-events
// ---------------------------------------------------------------------------

/// Record a defect observation.
///
/// The employee and defect names are free-form here; linkage to the
/// reference lists happens at aggregation time via fuzzy matching.
pub async fn create_defect_event(
    admin: AuthAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateDefectEvent>,
) -> AppResult<impl IntoResponse> {
    if input.employee_name.trim().is_empty() {
        return Err(AppError::BadRequest("employee_name must not be blank".into()));
    }
    if input.defect_name.trim().is_empty() {
        return Err(AppError::BadRequest("defect_name must not be blank".into()));
    }
    let count = input.defect_count.as_non_negative().ok_or_else(|| {
        AppError::BadRequest("defect_count must be a non-negative integer".into())
    })?;

    let event = DefectEventRepo::create(
        &state.pool,
        &input.employee_name,
        &input.defect_name,
        &count.to_string(),
        &input.event_time,
    )
    .await?;

    tracing::info!(
        admin_id = admin.admin_id,
        event_id = event.id,
        employee_name = %event.employee_name,
        defect_name = %event.defect_name,
        "Recorded defect event"
    );

    Ok(Json(DataResponse { data: event }))
}

// ---------------------------------------------------------------------------
// PUT /defect-events/{id}
// ---------------------------------------------------------------------------

/// Write back a corrected count for an existing event. The dashboard uses
/// this when a cell is edited in place.
pub async fn update_defect_event(
    admin: AuthAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDefectEvent>,
) -> AppResult<impl IntoResponse> {
    let count = input.defect_count.as_non_negative().ok_or_else(|| {
        AppError::BadRequest("defect_count must be a non-negative integer".into())
    })?;

    let event = DefectEventRepo::update_count(&state.pool, id, &count.to_string())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "defect event",
            id,
        }))?;

    tracing::info!(admin_id = admin.admin_id, event_id = id, "Updated defect count");

    Ok(Json(DataResponse { data: event }))
}

// ---------------------------------------------------------------------------
// DELETE /defect-events/{id}
// ---------------------------------------------------------------------------

/// Remove a recorded event.
pub async fn delete_defect_event(
    admin: AuthAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = DefectEventRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "defect event",
            id,
        }));
    }

    tracing::info!(admin_id = admin.admin_id, event_id = id, "Deleted defect event");

    Ok(Json(DataResponse { data: deleted }))
}
