//! Periodic rebuild of the dashboard aggregation snapshot.
//!
//! Spawns a background task that recomputes the full matrix on a fixed
//! interval and swaps it into the shared cache, so the cached endpoint
//! serves without touching the aggregation path per request.

use std::time::Duration;

use shifttally_db::DbPool;
use tokio_util::sync::CancellationToken;

use crate::aggregate::{build_snapshot, TOP_DEFECT_COUNT};
use crate::state::MatrixCache;

/// Default refresh interval in seconds.
const DEFAULT_REFRESH_SECS: u64 = 60;

/// Run the matrix refresh loop.
///
/// Rebuilds the snapshot every `MATRIX_REFRESH_SECS` seconds (defaults to
/// 60). A failed rebuild is logged and the previous snapshot stays in
/// place. Runs until `cancel` is triggered.
pub async fn run(pool: DbPool, cache: MatrixCache, cancel: CancellationToken) {
    let refresh_secs: u64 = std::env::var("MATRIX_REFRESH_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_REFRESH_SECS);

    tracing::info!(refresh_secs, "Matrix refresh job started");

    let mut interval = tokio::time::interval(Duration::from_secs(refresh_secs));

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Matrix refresh job stopping");
                break;
            }
            _ = interval.tick() => {
                match build_snapshot(&pool, TOP_DEFECT_COUNT).await {
                    Ok(snapshot) => {
                        tracing::debug!(
                            processed = snapshot.processed_events,
                            skipped = snapshot.skipped_events,
                            "Matrix refresh: snapshot rebuilt"
                        );
                        *cache.write().await = Some(snapshot);
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Matrix refresh: rebuild failed, keeping previous snapshot");
                    }
                }
            }
        }
    }
}
