//! Handler for content idea generation.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use tubeagent_core::channel::ChannelType;
use tubeagent_core::validation::{require_fields, text_field, IDEAS_REQUIRED};

use crate::error::{AppError, AppResult};
use crate::handlers::{generated_at, within_deadline};
use crate::state::AppState;

const IDEAS_FAILED: &str = "Failed to generate content ideas";

/// Request body for `POST /api/generate-ideas`.
///
/// Fields stay untyped until validation so that a non-string value is
/// reported as missing (400) instead of failing extraction.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateIdeasRequest {
    pub topic: Option<Value>,
    pub channel_type: Option<Value>,
    pub additional_context: Option<Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeasMetadata {
    pub topic: String,
    pub channel_type: ChannelType,
    pub generated_at: String,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct IdeasResponse {
    pub ideas: Vec<String>,
    pub success: bool,
    pub metadata: IdeasMetadata,
}

/// Generate ten pipe-delimited video ideas for a topic and channel type.
pub async fn generate_ideas(
    State(state): State<AppState>,
    payload: Result<Json<GenerateIdeasRequest>, JsonRejection>,
) -> AppResult<Json<IdeasResponse>> {
    let Json(body) = payload.map_err(|e| AppError::processing(IDEAS_FAILED, e))?;

    let [topic, channel_type] = require_fields(
        [text_field(body.topic.as_ref()), text_field(body.channel_type.as_ref())],
        IDEAS_REQUIRED,
    )?;
    let channel: ChannelType = channel_type.parse()?;
    let context = text_field(body.additional_context.as_ref());

    let ideas = within_deadline(
        &state,
        IDEAS_FAILED,
        state.generator.generate_content_ideas(topic, channel, context),
    )
    .await?;

    let count = ideas.len();
    Ok(Json(IdeasResponse {
        ideas,
        success: true,
        metadata: IdeasMetadata {
            topic: topic.to_string(),
            channel_type: channel,
            generated_at: generated_at(),
            count,
        },
    }))
}
