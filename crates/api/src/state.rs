use std::sync::Arc;

use notekeep_db::SharedStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Users and notes store, opened at startup and closed after shutdown.
    pub store: SharedStore,
    /// Server configuration (token settings are read by the auth extractor).
    pub config: Arc<ServerConfig>,
}
