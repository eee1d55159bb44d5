use std::sync::Arc;

use fieldboard_registry::FieldStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The field registry, behind the storage interface.
    pub registry: Arc<dyn FieldStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
