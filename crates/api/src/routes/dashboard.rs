use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Routes mounted at `/dashboard`.
///
/// ```text
/// GET /matrix           -> get_matrix (fresh rebuild, ?top= overrides summary size)
/// GET /matrix/cached    -> get_cached_matrix (last background snapshot)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/matrix", get(dashboard::get_matrix))
        .route("/matrix/cached", get(dashboard::get_cached_matrix))
}
