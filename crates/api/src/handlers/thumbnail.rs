//! Handler for thumbnail generation.
//!
//! Returns placeholder images only; no image service is involved.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use tubeagent_core::thumbnail::{
    placeholder_thumbnails, Thumbnail, THUMBNAIL_FORMAT, THUMBNAIL_RESOLUTION,
};
use tubeagent_core::validation::{require_fields, text_field, THUMBNAIL_REQUIRED};

use crate::error::{AppError, AppResult};
use crate::handlers::generated_at;

const THUMBNAIL_FAILED: &str = "Failed to generate thumbnails";

/// Request body for `POST /api/generate-thumbnail`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateThumbnailRequest {
    pub video_title: Option<Value>,
    pub style: Option<Value>,
    pub description: Option<Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailMetadata {
    pub video_title: String,
    pub style: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub generated_at: String,
    pub count: usize,
    pub resolution: &'static str,
    pub format: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ThumbnailResponse {
    pub thumbnails: Vec<Thumbnail>,
    pub success: bool,
    pub metadata: ThumbnailMetadata,
}

pub async fn generate_thumbnail(
    payload: Result<Json<GenerateThumbnailRequest>, JsonRejection>,
) -> AppResult<Json<ThumbnailResponse>> {
    let Json(body) = payload.map_err(|e| AppError::processing(THUMBNAIL_FAILED, e))?;

    let [video_title, style] = require_fields(
        [text_field(body.video_title.as_ref()), text_field(body.style.as_ref())],
        THUMBNAIL_REQUIRED,
    )?;

    let thumbnails = placeholder_thumbnails(video_title, style);
    tracing::debug!(%video_title, %style, "Returning placeholder thumbnails");

    let count = thumbnails.len();
    Ok(Json(ThumbnailResponse {
        thumbnails,
        success: true,
        metadata: ThumbnailMetadata {
            video_title: video_title.to_string(),
            style: style.to_string(),
            description: text_field(body.description.as_ref()).map(str::to_string),
            generated_at: generated_at(),
            count,
            resolution: THUMBNAIL_RESOLUTION,
            format: THUMBNAIL_FORMAT,
        },
    }))
}
