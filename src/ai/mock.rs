use super::ImageGenerationService;
use crate::{Error, Result};
use async_trait::async_trait;
use base64::Engine as _;
use std::sync::{Arc, Mutex};

/// Scripted outcome for one mock call.
#[derive(Debug, Clone)]
pub enum MockOutcome {
    Image(String),
    Upstream { status: u16, body: String },
    MissingImage,
}

/// In-memory [`ImageGenerationService`] that records every prompt it receives.
pub struct MockImageGenerationClient {
    outcomes: Arc<Mutex<Vec<MockOutcome>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockImageGenerationClient {
    pub fn new() -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(Vec::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_image_response(self, b64: String) -> Self {
        self.with_outcome(MockOutcome::Image(b64))
    }

    pub fn with_outcome(self, outcome: MockOutcome) -> Self {
        self.outcomes.lock().unwrap().push(outcome);
        self
    }

    pub fn get_call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    /// Shares call history with `self`, so a clone handed to the server can
    /// still be inspected by the test.
    pub fn handle(&self) -> Self {
        Self {
            outcomes: Arc::clone(&self.outcomes),
            prompts: Arc::clone(&self.prompts),
        }
    }
}

impl Default for MockImageGenerationClient {
    fn default() -> Self {
        Self::new()
    }
}

// 1x1 PNG
const TINY_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52,
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x02, 0x00, 0x00, 0x00, 0x90, 0x77, 0x53,
    0xDE, 0x00, 0x00, 0x00, 0x0C, 0x49, 0x44, 0x41, 0x54, 0x08, 0x99, 0x63, 0xF8, 0xCF, 0xC0, 0x00,
    0x00, 0x00, 0x01, 0x00, 0x01, 0xE2, 0x25, 0x00, 0xBC, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E,
    0x44, 0xAE, 0x42, 0x60, 0x82,
];

#[async_trait]
impl ImageGenerationService for MockImageGenerationClient {
    async fn generate_image(&self, _api_key: &str, prompt: &str) -> Result<String> {
        let count = {
            let mut prompts = self.prompts.lock().unwrap();
            prompts.push(prompt.to_string());
            prompts.len()
        };

        let outcomes = self.outcomes.lock().unwrap();
        if outcomes.is_empty() {
            return Ok(base64::engine::general_purpose::STANDARD.encode(TINY_PNG));
        }

        match outcomes[(count - 1) % outcomes.len()].clone() {
            MockOutcome::Image(b64) => Ok(b64),
            MockOutcome::Upstream { status, body } => Err(Error::Upstream { status, body }),
            MockOutcome::MissingImage => Err(Error::MissingImage),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_default_is_png() {
        let client = MockImageGenerationClient::new();

        let b64 = client.generate_image("key", "test").await.unwrap();
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(b64)
            .unwrap();
        assert_eq!(&bytes[..4], &[0x89, 0x50, 0x4E, 0x47]);
    }

    #[tokio::test]
    async fn test_mock_cycles_outcomes() {
        let client = MockImageGenerationClient::new()
            .with_image_response("AAAA".to_string())
            .with_outcome(MockOutcome::MissingImage);

        assert_eq!(client.generate_image("k", "one").await.unwrap(), "AAAA");
        assert!(matches!(
            client.generate_image("k", "two").await,
            Err(Error::MissingImage)
        ));
        assert_eq!(client.generate_image("k", "three").await.unwrap(), "AAAA");
    }

    #[tokio::test]
    async fn test_mock_handle_shares_history() {
        let client = MockImageGenerationClient::new();
        let handle = client.handle();

        assert_eq!(handle.get_call_count(), 0);
        client.generate_image("k", "a prompt").await.unwrap();

        assert_eq!(handle.get_call_count(), 1);
        assert_eq!(handle.prompts(), vec!["a prompt".to_string()]);
    }
}
