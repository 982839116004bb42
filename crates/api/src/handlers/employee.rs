//! Handlers for the employee reference list.
//!
//! Reads are public (the grid and registration forms consume them);
//! mutations require an authenticated admin.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use shifttally_core::error::CoreError;
use shifttally_core::types::DbId;
use shifttally_db::models::employee::{CreateEmployee, UpdateEmployee};
use shifttally_db::repositories::EmployeeRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /employees
// ---------------------------------------------------------------------------

/// List all registered employees in registration order.
pub async fn list_employees(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let employees = EmployeeRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: employees }))
}

// ---------------------------------------------------------------------------
// GET /employees/{id}
// ---------------------------------------------------------------------------

/// Fetch a single employee by id.
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let employee = EmployeeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "employee",
            id,
        }))?;
    Ok(Json(DataResponse { data: employee }))
}

// ---------------------------------------------------------------------------
// POST /employees
// ---------------------------------------------------------------------------

/// Register a new employee.
pub async fn create_employee(
    admin: AuthAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateEmployee>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let employee = EmployeeRepo::create(&state.pool, &input).await?;

    tracing::info!(
        admin_id = admin.admin_id,
        employee_id = employee.id,
        "Registered employee"
    );

    Ok(Json(DataResponse { data: employee }))
}

// ---------------------------------------------------------------------------
// PUT /employees/{id}
// ---------------------------------------------------------------------------

/// Update an employee; only the provided fields change.
pub async fn update_employee(
    admin: AuthAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEmployee>,
) -> AppResult<impl IntoResponse> {
    let employee = EmployeeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "employee",
            id,
        }))?;

    tracing::info!(admin_id = admin.admin_id, employee_id = id, "Updated employee");

    Ok(Json(DataResponse { data: employee }))
}

// ---------------------------------------------------------------------------
// DELETE /employees/{id}
// ---------------------------------------------------------------------------

/// Remove an employee. Their defect events remain in the store and are
/// simply skipped by the aggregator once the name no longer resolves.
pub async fn delete_employee(
    admin: AuthAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = EmployeeRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "employee",
            id,
        }));
    }

    tracing::info!(admin_id = admin.admin_id, employee_id = id, "Deleted employee");

    Ok(Json(DataResponse { data: deleted }))
}
