pub mod dashboard;
pub mod generation;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /generate-ideas                  POST  content ideas
/// /generate-script                 POST  video script
/// /generate-thumbnail              POST  placeholder thumbnails
/// /optimize-content                POST  SEO optimization
///
/// /dashboard/metrics               GET   overview metrics
/// /dashboard/workflows             GET   workflow status
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(generation::router())
        .nest("/dashboard", dashboard::router())
}
