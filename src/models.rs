//! Data models and structures
//!
//! Defines the request/response payloads of the generation endpoint and the
//! environment-driven server configuration.

use crate::ai::openai::client::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Portrait 9:16 size requested upstream and echoed back to the client.
pub const IMAGE_SIZE: &str = "1024x1792";

const DATA_URL_PREFIX: &str = "data:image/png;base64,";
const DEFAULT_SERVER_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

impl GenerationRequest {
    /// Lenient body parsing: anything that is not a valid request counts as
    /// an empty one, so the default prompt applies.
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_else(|e| {
            tracing::debug!("Ignoring unparseable request body: {}", e);
            Self::default()
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub data_url: String,
    pub size: String,
}

impl GenerationResult {
    pub fn from_base64(b64: &str) -> Self {
        Self {
            data_url: format!("{}{}", DATA_URL_PREFIX, b64),
            size: IMAGE_SIZE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Absent when `OPENAI_API_KEY` is unset or empty; checked per request.
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub listen_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        let listen_addr = std::env::var("SERVER_ADDR")
            .unwrap_or_else(|_| DEFAULT_SERVER_ADDR.to_string());

        Ok(Self {
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            openai_base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            listen_addr: parse_listen_addr(&listen_addr)?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_base_url: DEFAULT_BASE_URL.to_string(),
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}

pub fn parse_listen_addr(input: &str) -> crate::Result<SocketAddr> {
    input.parse().map_err(|_| {
        crate::Error::Config(format!(
            "Invalid listen address '{}'. Expected HOST:PORT",
            input
        ))
    })
}
