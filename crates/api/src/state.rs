use std::sync::Arc;

use exocat_core::catalog::CatalogStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The exoplanet catalog. Lives only as long as the process.
    pub catalog: Arc<CatalogStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            catalog: Arc::new(CatalogStore::new()),
            config: Arc::new(config),
        }
    }
}
