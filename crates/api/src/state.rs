use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool is reference-counted internally and the config
/// sits behind an `Arc`. Handlers borrow a pooled connection per query.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: onboard_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
