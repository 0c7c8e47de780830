use std::sync::Arc;

use tubeagent_completion::ContentGenerator;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Read-only after startup and cheaply cloneable.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Prompt builders bound to the completion provider.
    pub generator: Arc<ContentGenerator>,
}
