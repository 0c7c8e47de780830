//! HTTP client for the chat-completion endpoint.
//!
//! Issues exactly one `POST` per call using [`reqwest`]. There is no retry,
//! no streaming, and no timeout beyond the transport default.

use crate::config::CompletionConfig;
use crate::messages::{ChatCompletionRequest, ChatCompletionResponse};

/// Header carrying the tenant identifier.
pub const CUSTOMER_ID_HEADER: &str = "CustomerId";

/// Errors from the completion client.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    /// The endpoint answered with a non-2xx status.
    #[error("Failed to generate AI completion: AI API request failed: {status} {reason}")]
    RequestFailed {
        /// HTTP status code.
        status: u16,
        /// Canonical reason phrase for the status, if any.
        reason: String,
    },

    /// The request could not be sent or the response body could not be decoded.
    #[error("Failed to generate AI completion: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Client for a single chat-completion endpoint.
pub struct CompletionClient {
    client: reqwest::Client,
    config: CompletionConfig,
}

impl CompletionClient {
    pub fn new(config: CompletionConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Send one chat-completion request and return the decoded response.
    ///
    /// An empty `model` is replaced by the configured default.
    pub async fn generate_completion(
        &self,
        mut request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, CompletionError> {
        if request.model.is_empty() {
            request.model = self.config.model.clone();
        }

        tracing::debug!(
            model = %request.model,
            messages = request.messages.len(),
            "Sending chat completion request"
        );

        let result = self.send(&request).await;
        if let Err(ref e) = result {
            tracing::error!(error = %e, endpoint = %self.config.endpoint, "AI client error");
        }
        result
    }

    async fn send(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, CompletionError> {
        let response = self
            .client
            .post(&self.config.endpoint)
            .header(CUSTOMER_ID_HEADER, &self.config.customer_id)
            .bearer_auth(&self.config.api_key)
            .json(request)
            .send()
            .await?;

        let response = Self::ensure_success(response)?;
        let body = response.json::<ChatCompletionResponse>().await?;

        tracing::debug!(
            total_tokens = body.usage.total_tokens,
            choices = body.choices.len(),
            "Chat completion received"
        );
        Ok(body)
    }

    /// Map a non-2xx status to [`CompletionError::RequestFailed`].
    fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, CompletionError> {
        let status = response.status();
        if !status.is_success() {
            return Err(CompletionError::RequestFailed {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }
        Ok(response)
    }
}
