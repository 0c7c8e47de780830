//! Content generation on top of a [`CompletionProvider`].
//!
//! Each operation builds its prompt, makes one completion call, and
//! post-processes the returned text. Nothing is cached or retried.

use std::sync::Arc;

use tubeagent_core::channel::ChannelType;
use tubeagent_core::ideas::parse_idea_lines;
use tubeagent_core::optimize::{parse_optimization, Optimization};
use tubeagent_core::prompts;

use crate::client::CompletionError;
use crate::messages::ChatCompletionRequest;
use crate::provider::CompletionProvider;

#[derive(Clone)]
pub struct ContentGenerator {
    provider: Arc<dyn CompletionProvider>,
}

impl ContentGenerator {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    /// Generate a batch of pipe-delimited video ideas.
    pub async fn generate_content_ideas(
        &self,
        topic: &str,
        channel: ChannelType,
        context: Option<&str>,
    ) -> Result<Vec<String>, CompletionError> {
        let prompt = prompts::content_ideas(topic, channel, context);
        let completion = self
            .provider
            .complete(ChatCompletionRequest::from_prompt(prompt))
            .await?;

        let ideas = parse_idea_lines(&completion.text);
        tracing::info!(%topic, %channel, count = ideas.len(), "Generated content ideas");
        Ok(ideas)
    }

    /// Generate a full video script. The text is returned unparsed.
    pub async fn generate_video_script(
        &self,
        title: &str,
        duration: &str,
        tone: &str,
    ) -> Result<String, CompletionError> {
        let prompt = prompts::video_script(title, duration, tone);
        let completion = self
            .provider
            .complete(ChatCompletionRequest::from_prompt(prompt))
            .await?;

        tracing::info!(
            %title,
            completion_tokens = completion.usage.completion_tokens,
            "Generated video script"
        );
        Ok(completion.text)
    }

    /// Ask for optimized title, description, and tags.
    ///
    /// Transport failures propagate; an unparseable answer silently falls
    /// back to the input with the default score.
    pub async fn optimize_content(
        &self,
        title: &str,
        description: &str,
        tags: &[String],
    ) -> Result<Optimization, CompletionError> {
        let prompt = prompts::content_optimization(title, description, tags);
        let completion = self
            .provider
            .complete(ChatCompletionRequest::from_prompt(prompt))
            .await?;

        Ok(parse_optimization(&completion.text, title, description, tags))
    }
}
