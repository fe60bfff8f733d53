use super::client::OpenAiHttpClient;
use super::types::{ImageGenerationRequest, ImageGenerationResponse};
use crate::ai::ImageGenerationService;
use crate::models::IMAGE_SIZE;
use crate::{Error, Result};
use async_trait::async_trait;

const MODEL: &str = "gpt-image-1";
const QUALITY: &str = "high";

pub struct OpenAiImageClient {
    http: OpenAiHttpClient,
}

impl OpenAiImageClient {
    pub fn new(base_url: String) -> Self {
        Self::new_with_client(base_url, reqwest::Client::new())
    }

    pub fn new_with_client(base_url: String, client: reqwest::Client) -> Self {
        Self {
            http: OpenAiHttpClient::new_with_client(base_url, client),
        }
    }
}

#[async_trait]
impl ImageGenerationService for OpenAiImageClient {
    async fn generate_image(&self, api_key: &str, prompt: &str) -> Result<String> {
        let request = ImageGenerationRequest {
            model: MODEL.to_string(),
            prompt: prompt.to_string(),
            size: IMAGE_SIZE.to_string(),
            quality: QUALITY.to_string(),
            n: 1,
        };

        tracing::debug!("Sending image generation request to OpenAI");
        let response: ImageGenerationResponse =
            self.http.image_generation(api_key, &request).await?;

        response.first_b64().map(str::to_string).ok_or_else(|| {
            tracing::warn!("OpenAI response contained no base64 image");
            Error::MissingImage
        })
    }
}
