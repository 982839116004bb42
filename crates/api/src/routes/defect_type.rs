use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::defect_type;
use crate::state::AppState;

/// Routes mounted at `/defect-types`.
///
/// ```text
/// GET    /          -> list_defect_types
/// POST   /          -> create_defect_type
/// DELETE /{id}      -> delete_defect_type
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(defect_type::list_defect_types).post(defect_type::create_defect_type),
        )
        .route("/{id}", delete(defect_type::delete_defect_type))
}
