//! Image generation service integration
//!
//! Wraps the upstream image API behind [`ImageGenerationService`] so the proxy
//! can run against OpenAI or an in-memory mock.

pub mod mock;
pub mod openai;

pub use mock::MockImageGenerationClient;
pub use openai::OpenAiImageClient;

use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ImageGenerationService: Send + Sync {
    /// Generate one image for `prompt` and return its base64 payload.
    ///
    /// The credential is passed per call because it is validated per request.
    async fn generate_image(&self, api_key: &str, prompt: &str) -> Result<String>;
}
