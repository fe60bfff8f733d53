//! OpenAI image payloads.

use serde::{Deserialize, Serialize};

/// Request body for image generation.
#[derive(Debug, Serialize)]
pub struct ImageGenerationRequest {
    pub model: String,
    pub prompt: String,
    pub size: String,
    pub quality: String,
    pub n: u32,
}

/// Top-level image generation response.
///
/// Kept as raw JSON: any body where `data[0].b64_json` cannot be reached is a
/// missing-image error, not a parse failure.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct ImageGenerationResponse {
    body: serde_json::Value,
}

impl ImageGenerationResponse {
    /// Base64 payload of the first image, if present and a non-empty string.
    pub fn first_b64(&self) -> Option<&str> {
        self.body
            .pointer("/data/0/b64_json")
            .and_then(serde_json::Value::as_str)
            .filter(|b64| !b64.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: serde_json::Value) -> ImageGenerationResponse {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_first_b64_present() {
        let response = parse(serde_json::json!({
            "created": 1,
            "data": [{ "b64_json": "AAAA" }, { "b64_json": "BBBB" }]
        }));
        assert_eq!(response.first_b64(), Some("AAAA"));
    }

    #[test]
    fn test_first_b64_absent_cases() {
        assert_eq!(parse(serde_json::json!({})).first_b64(), None);
        assert_eq!(parse(serde_json::json!({ "data": null })).first_b64(), None);
        assert_eq!(parse(serde_json::json!({ "data": [] })).first_b64(), None);
        assert_eq!(
            parse(serde_json::json!({ "data": [{ "url": "https://x/y.png" }] })).first_b64(),
            None
        );
        assert_eq!(
            parse(serde_json::json!({ "data": [{ "b64_json": "" }] })).first_b64(),
            None
        );
        assert_eq!(parse(serde_json::json!(null)).first_b64(), None);
        assert_eq!(parse(serde_json::json!({ "data": {} })).first_b64(), None);
        assert_eq!(parse(serde_json::json!({ "data": [null] })).first_b64(), None);
        assert_eq!(
            parse(serde_json::json!({ "data": [{ "url": 5 }] })).first_b64(),
            None
        );
        assert_eq!(
            parse(serde_json::json!({ "data": [{ "b64_json": 5 }] })).first_b64(),
            None
        );
    }

    #[test]
    fn test_request_serializes_fixed_fields() {
        let request = ImageGenerationRequest {
            model: "gpt-image-1".to_string(),
            prompt: "p".to_string(),
            size: "1024x1792".to_string(),
            quality: "high".to_string(),
            n: 1,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["size"], "1024x1792");
        assert_eq!(json["quality"], "high");
        assert_eq!(json["n"], 1);
    }
}
