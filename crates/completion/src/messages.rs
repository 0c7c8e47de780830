//! Wire types for the OpenAI-style chat-completion API.

use serde::{Deserialize, Serialize};
use tubeagent_core::chat::{ChatMessage, Prompt};

/// Request body sent to the chat-completion endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatCompletionRequest {
    /// Empty means "use the client's default model".
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Accepted by the endpoint but never enabled by this crate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
}

impl ChatCompletionRequest {
    /// Build a request from an assembled prompt, leaving the model to the
    /// client default.
    pub fn from_prompt(prompt: Prompt) -> Self {
        Self {
            model: String::new(),
            messages: prompt.messages,
            temperature: Some(prompt.temperature),
            max_tokens: Some(prompt.max_tokens),
            stream: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub index: u32,
    #[serde(default)]
    pub message: ResponseMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Token accounting reported by the endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

/// Response body returned by the chat-completion endpoint.
///
/// Every field is optional on the wire; providers differ in what they fill in.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Usage,
}

impl ChatCompletionResponse {
    /// Text of the first choice, or `""` when the endpoint returned none.
    pub fn first_content(&self) -> &str {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tubeagent_core::chat::ChatMessage;

    #[test]
    fn request_omits_unset_options() {
        let request = ChatCompletionRequest {
            model: "m".into(),
            messages: vec![ChatMessage::user("hi")],
            temperature: None,
            max_tokens: None,
            stream: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("temperature").is_none());
        assert!(json.get("max_tokens").is_none());
        assert!(json.get("stream").is_none());
        assert_eq!(json["messages"][0]["role"], "user");
    }

    #[test]
    fn from_prompt_carries_sampling_parameters() {
        let prompt = Prompt {
            messages: vec![ChatMessage::system("s"), ChatMessage::user("u")],
            temperature: 0.7,
            max_tokens: 2000,
        };
        let request = ChatCompletionRequest::from_prompt(prompt);
        assert_eq!(request.model, "");
        assert_eq!(request.temperature, Some(0.7));
        assert_eq!(request.max_tokens, Some(2000));
        assert_eq!(request.messages.len(), 2);
    }

    #[test]
    fn parses_full_response() {
        let raw = r#"{
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "created": 1700000000,
            "model": "gpt",
            "choices": [{"index": 0, "message": {"role": "assistant", "content": "hello"}, "finish_reason": "stop"}],
            "usage": {"prompt_tokens": 10, "completion_tokens": 2, "total_tokens": 12}
        }"#;
        let response: ChatCompletionResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.first_content(), "hello");
        assert_eq!(response.usage.total_tokens, 12);
    }

    #[test]
    fn missing_choices_yield_empty_text() {
        let response: ChatCompletionResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.first_content(), "");
        assert_eq!(response.usage, Usage::default());
    }

    #[test]
    fn null_content_yields_empty_text() {
        let raw = r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#;
        let response: ChatCompletionResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.first_content(), "");
    }
}
