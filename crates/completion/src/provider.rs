use async_trait::async_trait;

use crate::client::{CompletionClient, CompletionError};
use crate::messages::{ChatCompletionRequest, Usage};

/// Text of a completion together with its token accounting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Completion {
    pub text: String,
    pub usage: Usage,
}

/// Anything that can turn a chat-completion request into text.
///
/// Implemented by [`CompletionClient`] for the real endpoint; tests supply
/// their own implementations.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, request: ChatCompletionRequest) -> Result<Completion, CompletionError>;
}

#[async_trait]
impl CompletionProvider for CompletionClient {
    async fn complete(&self, request: ChatCompletionRequest) -> Result<Completion, CompletionError> {
        let response = self.generate_completion(request).await?;
        Ok(Completion {
            text: response.first_content().to_string(),
            usage: response.usage,
        })
    }
}
