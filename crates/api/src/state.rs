use std::sync::Arc;

use tokio::sync::RwLock;

use crate::aggregate::MatrixSnapshot;
use crate::config::ServerConfig;

/// Latest matrix snapshot produced by the background refresher.
///
/// `None` until the first successful refresh. Each refresh swaps in a
/// fresh snapshot atomically (last-writer-wins); a failed refresh leaves
/// the previous snapshot in place.
pub type MatrixCache = Arc<RwLock<Option<MatrixSnapshot>>>;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: shifttally_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Last snapshot built by the background matrix refresher.
    pub matrix_cache: MatrixCache,
}
