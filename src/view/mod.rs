//! Client view: the prompt form and 9:16 preview.
//!
//! [`ViewState`] is the single source of truth for what the page shows. The
//! server renders the initial state into HTML and the inline script in the
//! page applies the same transitions in the browser; [`submit`] applies them
//! from Rust against a running server.

pub mod client;
pub mod page;

pub use client::{submit, GenerateClient};
pub use page::render_page;

use crate::prompts::DEFAULT_PROMPT;

pub const IDLE_LABEL: &str = "Generate";
pub const LOADING_LABEL: &str = "Generating…";
pub const IDLE_TEXT: &str = "Your image will appear here";
pub const LOADING_TEXT: &str = "Rendering…";
pub const FALLBACK_ERROR: &str = "Request failed";

/// What the preview area currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preview<'a> {
    Image(&'a str),
    Loading,
    Idle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub prompt: String,
    pub image_url: Option<String>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            image_url: None,
            is_loading: false,
            error: None,
        }
    }

    /// Clears the previous outcome and marks a request in flight. Returns the
    /// prompt to send.
    pub fn begin_submit(&mut self) -> String {
        self.image_url = None;
        self.error = None;
        self.is_loading = true;
        self.prompt.clone()
    }

    pub fn finish_success(&mut self, data_url: String) {
        self.image_url = Some(data_url);
        self.is_loading = false;
    }

    pub fn finish_failure(&mut self, message: String) {
        self.error = Some(message);
        self.is_loading = false;
    }

    pub fn finish(&mut self, outcome: std::result::Result<String, String>) {
        match outcome {
            Ok(data_url) => self.finish_success(data_url),
            Err(message) => self.finish_failure(message),
        }
    }

    pub fn submit_enabled(&self) -> bool {
        !self.is_loading
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_loading {
            LOADING_LABEL
        } else {
            IDLE_LABEL
        }
    }

    pub fn preview(&self) -> Preview<'_> {
        if let Some(url) = self.image_url.as_deref() {
            Preview::Image(url)
        } else if self.is_loading {
            Preview::Loading
        } else {
            Preview::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = ViewState::new();
        assert_eq!(state.prompt, DEFAULT_PROMPT);
        assert_eq!(state.preview(), Preview::Idle);
        assert!(state.submit_enabled());
        assert!(state.error.is_none());
        assert_eq!(state.button_label(), "Generate");
    }

    #[test]
    fn test_begin_submit_clears_previous_outcome() {
        let mut state = ViewState::new();
        state.finish_success("data:image/png;base64,AAAA".to_string());
        state.error = Some("old".to_string());
        state.prompt = "a canyon".to_string();

        let sent = state.begin_submit();

        assert_eq!(sent, "a canyon");
        assert_eq!(state.preview(), Preview::Loading);
        assert!(state.error.is_none());
        assert!(!state.submit_enabled());
        assert_eq!(state.button_label(), LOADING_LABEL);
    }

    #[test]
    fn test_success_shows_image() {
        let mut state = ViewState::new();
        state.begin_submit();
        state.finish(Ok("data:image/png;base64,AAAA".to_string()));

        assert_eq!(state.preview(), Preview::Image("data:image/png;base64,AAAA"));
        assert!(state.submit_enabled());
    }

    #[test]
    fn test_failure_is_recoverable_and_keeps_image_cleared() {
        let mut state = ViewState::new();
        state.finish_success("data:image/png;base64,OLD".to_string());

        state.begin_submit();
        state.finish(Err("Image generation failed".to_string()));

        assert_eq!(state.preview(), Preview::Idle);
        assert_eq!(state.error.as_deref(), Some("Image generation failed"));
        assert!(state.submit_enabled());
    }

    #[test]
    fn test_image_takes_precedence_over_loading() {
        let state = ViewState {
            image_url: Some("data:x".to_string()),
            is_loading: true,
            ..ViewState::new()
        };
        assert_eq!(state.preview(), Preview::Image("data:x"));
    }
}
