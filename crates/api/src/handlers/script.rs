//! Handler for video script generation.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use tubeagent_core::script::{compose_tone, estimated_read_time, word_count};
use tubeagent_core::validation::{require_fields, text_field, SCRIPT_REQUIRED};

use crate::error::{AppError, AppResult};
use crate::handlers::{generated_at, within_deadline};
use crate::state::AppState;

const SCRIPT_FAILED: &str = "Failed to generate script";

/// Request body for `POST /api/generate-script`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateScriptRequest {
    pub title: Option<Value>,
    pub duration: Option<Value>,
    pub tone: Option<Value>,
    pub additional_requirements: Option<Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptMetadata {
    pub title: String,
    pub duration: String,
    /// The tone as submitted, without any appended requirements.
    pub tone: String,
    pub generated_at: String,
    pub word_count: usize,
    /// Minutes, rounded up.
    pub estimated_read_time: usize,
}

#[derive(Debug, Serialize)]
pub struct ScriptResponse {
    pub script: String,
    pub success: bool,
    pub metadata: ScriptMetadata,
}

pub async fn generate_script(
    State(state): State<AppState>,
    payload: Result<Json<GenerateScriptRequest>, JsonRejection>,
) -> AppResult<Json<ScriptResponse>> {
    let Json(body) = payload.map_err(|e| AppError::processing(SCRIPT_FAILED, e))?;

    let [title, duration, tone] = require_fields(
        [
            text_field(body.title.as_ref()),
            text_field(body.duration.as_ref()),
            text_field(body.tone.as_ref()),
        ],
        SCRIPT_REQUIRED,
    )?;
    let prompt_tone = compose_tone(tone, text_field(body.additional_requirements.as_ref()));

    let script = within_deadline(
        &state,
        SCRIPT_FAILED,
        state.generator.generate_video_script(title, duration, &prompt_tone),
    )
    .await?;

    let words = word_count(&script);
    Ok(Json(ScriptResponse {
        script,
        success: true,
        metadata: ScriptMetadata {
            title: title.to_string(),
            duration: duration.to_string(),
            tone: tone.to_string(),
            generated_at: generated_at(),
            word_count: words,
            estimated_read_time: estimated_read_time(words),
        },
    }))
}
