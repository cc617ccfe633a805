//! Completion service abstraction
//!
//! The submission handler talks to a `CompletionBackend`; the production
//! implementation is the blocking OpenRouter client.

mod client;
#[cfg(test)]
#[path = "../../tests/support/stub_server.rs"]
pub(crate) mod stub;
mod types;

use crate::error::CompletionError;
use crate::syllabus::Prompt;

pub(crate) use client::{ClientSettings, OpenRouterClient};

/// A hosted text-generation service
pub(crate) trait CompletionBackend {
    /// Display name for diagnostics
    fn name(&self) -> &'static str;

    /// Send one prompt and wait for the full completion text
    fn complete(&self, prompt: &Prompt) -> Result<String, CompletionError>;
}
