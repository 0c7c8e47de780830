//! Route definitions for the generation endpoints.
//!
//! ```text
//! POST   /generate-ideas        generate_ideas
//! POST   /generate-script       generate_script
//! POST   /generate-thumbnail    generate_thumbnail
//! POST   /optimize-content      optimize_content
//! ```

use axum::routing::post;
use axum::Router;

use crate::handlers::{ideas, optimize, script, thumbnail};
use crate::state::AppState;

/// Generation routes, merged directly into `/api`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generate-ideas", post(ideas::generate_ideas))
        .route("/generate-script", post(script::generate_script))
        .route("/generate-thumbnail", post(thumbnail::generate_thumbnail))
        .route("/optimize-content", post(optimize::optimize_content))
}
