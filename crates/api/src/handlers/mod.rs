pub mod dashboard;
pub mod ideas;
pub mod optimize;
pub mod script;
pub mod thumbnail;

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use chrono::{SecondsFormat, Utc};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Current time as an RFC 3339 UTC timestamp with millisecond precision,
/// e.g. `2024-05-01T12:00:00.000Z`.
pub(crate) fn generated_at() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Await one generation call under `REQUEST_TIMEOUT_SECS`.
///
/// Both an upstream failure and an expired deadline become
/// [`AppError::Processing`] under `context`, so a slow completion still
/// answers with the `{error, details}` envelope.
pub(crate) async fn within_deadline<T, E, F>(
    state: &AppState,
    context: &'static str,
    call: F,
) -> AppResult<T>
where
    F: Future<Output = Result<T, E>>,
    E: Display,
{
    let limit = Duration::from_secs(state.config.request_timeout_secs);
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result.map_err(|e| AppError::processing(context, e)),
        Err(_) => Err(AppError::processing(
            context,
            format!("AI completion timed out after {}s", limit.as_secs()),
        )),
    }
}
