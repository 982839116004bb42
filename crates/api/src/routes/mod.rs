pub mod auth;
pub mod color_code;
pub mod dashboard;
pub mod defect_event;
pub mod defect_type;
pub mod employee;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                    register admin (public)
/// /auth/login                       login (public)
///
/// /employees                        list (public), create (auth)
/// /employees/{id}                   get (public), update, delete (auth)
///
/// /defect-types                     list (public), create (auth, capped)
/// /defect-types/{id}                delete (auth)
///
/// /color-codes                      list (public), create (auth)
/// /color-codes/{id}                 delete (auth)
///
/// /defect-events                    list (public), create (auth)
/// /defect-events/{id}               update count, delete (auth)
///
/// /dashboard/matrix                 fresh aggregation snapshot (public)
/// /dashboard/matrix/cached          last background snapshot (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/employees", employee::router())
        .nest("/defect-types", defect_type::router())
        .nest("/color-codes", color_code::router())
        .nest("/defect-events", defect_event::router())
        .nest("/dashboard", dashboard::router())
}
