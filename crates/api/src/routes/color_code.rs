use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::color_code;
use crate::state::AppState;

/// Routes mounted at `/color-codes`.
///
/// ```text
/// GET    /          -> list_color_codes
/// POST   /          -> create_color_code
/// DELETE /{id}      -> delete_color_code
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(color_code::list_color_codes).post(color_code::create_color_code),
        )
        .route("/{id}", delete(color_code::delete_color_code))
}
