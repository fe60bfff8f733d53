//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror.
//! Every variant renders as a JSON `{ "error", "details"? }` body so that no
//! failure escapes the HTTP boundary unstructured.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::models::ErrorBody;

#[derive(Error, Debug)]
pub enum Error {
    #[error("OPENAI_API_KEY is not set on the server.")]
    MissingApiKey,

    #[error("Image generation failed (status {status}): {body}")]
    Upstream { status: u16, body: String },

    #[error("No image returned from API")]
    MissingImage,

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            Error::MissingApiKey => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Error::MissingImage => StatusCode::BAD_GATEWAY,
            Error::Http(_) | Error::Serialization(_) | Error::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// JSON body returned to the caller.
    pub fn body(&self) -> ErrorBody {
        match self {
            Error::MissingApiKey | Error::MissingImage => ErrorBody {
                error: self.to_string(),
                details: None,
            },
            Error::Upstream { body, .. } => ErrorBody {
                error: "Image generation failed".to_string(),
                details: Some(body.clone()),
            },
            other => ErrorBody {
                error: "Unexpected error".to_string(),
                details: Some(other.to_string()),
            },
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}
