use super::{ViewState, FALLBACK_ERROR};
use crate::models::{GenerationRequest, GenerationResult};
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ErrorField {
    error: Option<String>,
}

/// Browser-equivalent caller of `POST /api/generate`.
pub struct GenerateClient {
    client: Client,
    endpoint: String,
}

impl GenerateClient {
    /// `base_url` is the server root, e.g. `http://127.0.0.1:3000`.
    pub fn new(base_url: &str) -> Self {
        Self::new_with_client(base_url, Client::new())
    }

    pub fn new_with_client(base_url: &str, client: Client) -> Self {
        Self {
            client,
            endpoint: format!("{}/api/generate", base_url.trim_end_matches('/')),
        }
    }

    /// Returns the data URL, or the message the page would display.
    pub async fn send_prompt(&self, prompt: &str) -> std::result::Result<String, String> {
        let request = GenerationRequest {
            prompt: Some(prompt.to_string()),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !response.status().is_success() {
            let message = response
                .json::<ErrorField>()
                .await
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| FALLBACK_ERROR.to_string());
            tracing::debug!("Generation request failed: {}", message);
            return Err(message);
        }

        response
            .json::<GenerationResult>()
            .await
            .map(|result| result.data_url)
            .map_err(|e| e.to_string())
    }
}

/// Run one submit cycle against the server, updating `state` the way the page
/// does. The caller is responsible for not submitting while loading.
pub async fn submit(state: &mut ViewState, client: &GenerateClient) {
    let prompt = state.begin_submit();
    let outcome = client.send_prompt(&prompt).await;
    state.finish(outcome);
}
