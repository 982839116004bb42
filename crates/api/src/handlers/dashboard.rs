//! Handlers for the aggregated defect dashboard.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::aggregate::{build_snapshot, TOP_DEFECT_COUNT};
use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the matrix endpoint.
#[derive(Debug, Deserialize)]
pub struct MatrixQuery {
    /// How many entries the top-defects summary should contain.
    pub top: Option<usize>,
}

// ---------------------------------------------------------------------------
// GET /dashboard/matrix
// ---------------------------------------------------------------------------

/// Build and return a fresh aggregation snapshot from current store state.
pub async fn get_matrix(
    State(state): State<AppState>,
    Query(query): Query<MatrixQuery>,
) -> AppResult<impl IntoResponse> {
    let top_n = query.top.unwrap_or(TOP_DEFECT_COUNT);
    let snapshot = build_snapshot(&state.pool, top_n).await?;
    Ok(Json(DataResponse { data: snapshot }))
}

// ---------------------------------------------------------------------------
// GET /dashboard/matrix/cached
// ---------------------------------------------------------------------------

/// Return the snapshot most recently produced by the background refresher.
///
/// Before the first refresh tick completes the payload is `{"data": null}`.
pub async fn get_cached_matrix(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let cached = state.matrix_cache.read().await.clone();
    Ok(Json(DataResponse { data: cached }))
}
