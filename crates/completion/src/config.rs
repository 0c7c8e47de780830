use std::fmt;

pub const DEFAULT_ENDPOINT: &str = "https://oi-server.onrender.com/chat/completions";
pub const DEFAULT_MODEL: &str = "openrouter/anthropic/claude-3.5-sonnet";

/// Connection settings for the chat-completion endpoint.
///
/// Read-only after construction; shared between requests.
#[derive(Clone)]
pub struct CompletionConfig {
    /// Full URL of the chat-completion endpoint.
    pub endpoint: String,
    /// Tenant identifier sent in the `CustomerId` header.
    pub customer_id: String,
    /// Bearer token sent in the `Authorization` header.
    pub api_key: String,
    /// Model used when a request does not name one.
    pub model: String,
}

impl CompletionConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var          | Default                                            |
    /// |------------------|----------------------------------------------------|
    /// | `AI_ENDPOINT`    | `https://oi-server.onrender.com/chat/completions`  |
    /// | `AI_CUSTOMER_ID` | empty                                              |
    /// | `AI_API_KEY`     | empty                                              |
    /// | `AI_MODEL`       | `openrouter/anthropic/claude-3.5-sonnet`           |
    pub fn from_env() -> Self {
        let endpoint = std::env::var("AI_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.into());

        let customer_id = std::env::var("AI_CUSTOMER_ID").unwrap_or_default();
        if customer_id.is_empty() {
            tracing::warn!("AI_CUSTOMER_ID is not set; completion requests will likely be rejected");
        }

        let api_key = std::env::var("AI_API_KEY").unwrap_or_default();
        if api_key.is_empty() {
            tracing::warn!("AI_API_KEY is not set; completion requests will likely be rejected");
        }

        let model = std::env::var("AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());

        Self {
            endpoint,
            customer_id,
            api_key,
            model,
        }
    }
}

impl fmt::Debug for CompletionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionConfig")
            .field("endpoint", &self.endpoint)
            .field("customer_id", &self.customer_id)
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .finish()
    }
}
