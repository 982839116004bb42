use axum::routing::{get, put};
use axum::Router;

use crate::handlers::defect_event;
use crate::state::AppState;

/// Routes mounted at `/defect-events`.
///
/// ```text
/// GET    /          -> list_defect_events
/// POST   /          -> create_defect_event
/// PUT    /{id}      -> update_defect_event (count write-back)
/// DELETE /{id}      -> delete_defect_event
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(defect_event::list_defect_events).post(defect_event::create_defect_event),
        )
        .route(
            "/{id}",
            put(defect_event::update_defect_event).delete(defect_event::delete_defect_event),
        )
}
