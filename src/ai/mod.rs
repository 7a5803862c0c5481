//! Vision-language model integration.
//!
//! One trait, one real client speaking the OpenAI-compatible chat-completions
//! API, and one mock for tests.

pub mod client;
pub mod mock;
pub mod types;

pub use client::OpenAiVisionClient;
pub use mock::MockVisionClient;

use crate::media::Media;
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait VisionService: Send + Sync {
    /// One multimodal completion: a system instruction, the user's prompt, and
    /// the attached media, answered with a single text reply.
    async fn analyze(&self, system: &str, prompt: &str, media: &[Media]) -> Result<String>;
}
