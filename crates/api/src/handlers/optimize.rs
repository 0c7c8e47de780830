//! Handler for SEO optimization of existing video metadata.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use tubeagent_core::optimize::Optimization;
use tubeagent_core::validation::{require_fields, text_field, OPTIMIZE_REQUIRED};

use crate::error::{AppError, AppResult};
use crate::handlers::{generated_at, within_deadline};
use crate::state::AppState;

const OPTIMIZE_FAILED: &str = "Failed to optimize content";

/// Request body for `POST /api/optimize-content`.
#[derive(Debug, Deserialize)]
pub struct OptimizeContentRequest {
    pub title: Option<Value>,
    pub description: Option<Value>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeMetadata {
    pub generated_at: String,
    pub tag_count: usize,
}

#[derive(Debug, Serialize)]
pub struct OptimizeResponse {
    pub optimization: Optimization,
    pub success: bool,
    pub metadata: OptimizeMetadata,
}

/// Unparseable model output is not an error here: the response then echoes
/// the submitted title, description and tags with a score of 50.
pub async fn optimize_content(
    State(state): State<AppState>,
    payload: Result<Json<OptimizeContentRequest>, JsonRejection>,
) -> AppResult<Json<OptimizeResponse>> {
    let Json(body) = payload.map_err(|e| AppError::processing(OPTIMIZE_FAILED, e))?;

    let [title, description] = require_fields(
        [text_field(body.title.as_ref()), text_field(body.description.as_ref())],
        OPTIMIZE_REQUIRED,
    )?;

    let optimization = within_deadline(
        &state,
        OPTIMIZE_FAILED,
        state.generator.optimize_content(title, description, &body.tags),
    )
    .await?;

    let tag_count = optimization.optimized_tags.len();
    Ok(Json(OptimizeResponse {
        optimization,
        success: true,
        metadata: OptimizeMetadata {
            generated_at: generated_at(),
            tag_count,
        },
    }))
}
