//! Prompt builders for the three generation tasks.
//!
//! Each builder produces a fixed system message, a user message templated
//! from the caller's fields, and the sampling parameters for that task.

use crate::channel::ChannelType;
use crate::chat::{ChatMessage, Prompt};

// ---------------------------------------------------------------------------
// Sampling parameters
// ---------------------------------------------------------------------------

pub const IDEAS_TEMPERATURE: f32 = 0.8;
pub const IDEAS_MAX_TOKENS: u32 = 1500;

pub const SCRIPT_TEMPERATURE: f32 = 0.7;
pub const SCRIPT_MAX_TOKENS: u32 = 2000;

pub const OPTIMIZE_TEMPERATURE: f32 = 0.5;
pub const OPTIMIZE_MAX_TOKENS: u32 = 1500;

/// Number of ideas requested per batch.
pub const IDEAS_PER_BATCH: usize = 10;

// ---------------------------------------------------------------------------
// System messages
// ---------------------------------------------------------------------------

const IDEAS_SYSTEM: &str = "You are a YouTube content strategist expert. Generate engaging, \
trending content ideas that are specific, actionable, and optimized for high engagement.";

const SCRIPT_SYSTEM: &str = "You are a professional YouTube script writer. Create engaging, \
well-structured video scripts that maximize viewer retention and engagement.";

const OPTIMIZE_SYSTEM: &str = "You are a YouTube SEO expert. Optimize content for maximum \
discoverability, click-through rates, and algorithmic performance.";

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

/// Build the prompt asking for a batch of pipe-delimited video ideas.
pub fn content_ideas(topic: &str, channel: ChannelType, context: Option<&str>) -> Prompt {
    let mut user = format!(
        "Generate {IDEAS_PER_BATCH} compelling YouTube video ideas for a {channel} channel \
focusing on {topic}. Each idea should be:
1. Specific and actionable
2. Trending and engaging
3. SEO-optimized with strong keywords
4. Include estimated video length and difficulty level

Format each idea on its own line as: \"Title | Description | Keywords | Duration | Difficulty\""
    );
    if let Some(context) = context {
        user.push_str("\n\nAdditional context: ");
        user.push_str(context);
    }

    Prompt {
        messages: vec![ChatMessage::system(IDEAS_SYSTEM), ChatMessage::user(user)],
        temperature: IDEAS_TEMPERATURE,
        max_tokens: IDEAS_MAX_TOKENS,
    }
}

/// Build the prompt asking for a complete, timestamped video script.
pub fn video_script(title: &str, duration: &str, tone: &str) -> Prompt {
    let user = format!(
        "Write a complete YouTube video script for:
Title: \"{title}\"
Duration: {duration}
Tone: {tone}

Include:
- Hook (first 15 seconds)
- Clear structure with timestamps
- Engagement triggers (subscribe reminders, questions)
- Strong call-to-action
- Natural transitions
- Retention hooks throughout

Format with clear sections and timing markers."
    );

    Prompt {
        messages: vec![ChatMessage::system(SCRIPT_SYSTEM), ChatMessage::user(user)],
        temperature: SCRIPT_TEMPERATURE,
        max_tokens: SCRIPT_MAX_TOKENS,
    }
}

/// Build the prompt asking for a JSON-shaped SEO optimization.
pub fn content_optimization(title: &str, description: &str, tags: &[String]) -> Prompt {
    let tags = tags.join(", ");
    let user = format!(
        "Optimize this YouTube content for SEO and engagement:

Current Title: \"{title}\"
Current Description: \"{description}\"
Current Tags: {tags}

Provide:
1. Optimized title (under 60 chars, clickable, SEO-friendly)
2. Optimized description (with timestamps, keywords, calls-to-action)
3. Optimized tags (mix of broad and specific, trending keywords)
4. SEO score (1-100) with explanation

Format as JSON with keys: optimizedTitle, optimizedDescription, optimizedTags, seoScore, explanation"
    );

    Prompt {
        messages: vec![ChatMessage::system(OPTIMIZE_SYSTEM), ChatMessage::user(user)],
        temperature: OPTIMIZE_TEMPERATURE,
        max_tokens: OPTIMIZE_MAX_TOKENS,
    }
}
