//! The generation proxy: default the prompt, check the credential, make one
//! upstream call and wrap the payload as a data URI.

use crate::ai::ImageGenerationService;
use crate::models::{Config, GenerationRequest, GenerationResult};
use crate::{prompts, Error, Result};
use tracing::{info, warn};

pub async fn generate(
    config: &Config,
    image_gen: &dyn ImageGenerationService,
    request: &GenerationRequest,
) -> Result<GenerationResult> {
    let prompt = prompts::upstream_prompt(request.prompt.as_deref());

    let Some(api_key) = config.openai_api_key.as_deref() else {
        warn!("Rejecting generation request: OPENAI_API_KEY is not configured");
        return Err(Error::MissingApiKey);
    };

    info!(prompt_len = prompt.len(), "Requesting image generation");
    let b64 = image_gen.generate_image(api_key, &prompt).await?;
    info!(payload_len = b64.len(), "Image generation succeeded");

    Ok(GenerationResult::from_base64(&b64))
}
