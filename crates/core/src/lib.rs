//! Domain types and pure logic for the TubeAgent content backend.
//!
//! Nothing in this crate performs I/O. Prompt builders produce the messages
//! sent to the language model; the post-processing helpers turn raw model
//! text into the shapes the API returns.

pub mod channel;
pub mod chat;
pub mod dashboard;
pub mod error;
pub mod ideas;
pub mod optimize;
pub mod prompts;
pub mod script;
pub mod thumbnail;
pub mod validation;
