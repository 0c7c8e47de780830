//! Chat-completion client and content generation.
//!
//! [`client::CompletionClient`] talks to an OpenAI-style chat-completion
//! endpoint over HTTP. [`generator::ContentGenerator`] pairs the prompt
//! builders from `tubeagent_core` with any [`provider::CompletionProvider`].

pub mod client;
pub mod config;
pub mod generator;
pub mod messages;
pub mod provider;

pub use client::{CompletionClient, CompletionError};
pub use config::CompletionConfig;
pub use generator::ContentGenerator;
pub use provider::CompletionProvider;
