use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Dashboard data routes mounted at `/dashboard`.
///
/// ```text
/// GET  /metrics     -> metrics
/// GET  /workflows   -> workflows
/// GET  /automations -> automations
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/metrics", get(dashboard::metrics))
        .route("/workflows", get(dashboard::workflows))
        .route("/automations", get(dashboard::automations))
}
