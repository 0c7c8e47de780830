use std::fmt::Display;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tubeagent_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Two tiers: validation failures become `400 {"error"}`, everything else
/// becomes `500 {"error", "details"}` with the underlying message attached.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `tubeagent_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure while processing an accepted request.
    #[error("{context}: {details}")]
    Processing {
        /// Endpoint-level summary, e.g. "Failed to generate script".
        context: &'static str,
        /// The underlying error message.
        details: String,
    },
}

impl AppError {
    pub fn processing(context: &'static str, err: impl Display) -> Self {
        AppError::Processing {
            context,
            details: err.to_string(),
        }
    }
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Core(CoreError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, json!({ "error": msg }))
            }
            AppError::Processing { context, details } => {
                tracing::error!(error = %details, "{context}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": context,
                        "details": details,
                    }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
