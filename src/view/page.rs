use super::{Preview, ViewState};
use super::{FALLBACK_ERROR, IDLE_LABEL, IDLE_TEXT, LOADING_LABEL, LOADING_TEXT};
use crate::prompts;

const PAGE_TEMPLATE: &str = include_str!("../../data/templates/index.html");

/// Render the full HTML page for `state`.
pub fn render_page(state: &ViewState) -> String {
    let preview = match state.preview() {
        Preview::Image(url) => format!(
            r#"<img src="{}" alt="Generated">"#,
            escape_html(url)
        ),
        Preview::Loading => LOADING_TEXT.to_string(),
        Preview::Idle => IDLE_TEXT.to_string(),
    };
    let error = state.error.as_deref().map(escape_html).unwrap_or_default();
    let prompt = escape_html(&state.prompt);

    prompts::render(
        PAGE_TEMPLATE,
        &[
            ("prompt", &prompt),
            ("disabled", if state.submit_enabled() { "" } else { " disabled" }),
            ("button_label", state.button_label()),
            ("error_hidden", if state.error.is_some() { "" } else { " hidden" }),
            ("error", &error),
            ("preview", &preview),
            ("idle_label", IDLE_LABEL),
            ("loading_label", LOADING_LABEL),
            ("idle_text", IDLE_TEXT),
            ("loading_text", LOADING_TEXT),
            ("fallback_error", FALLBACK_ERROR),
        ],
    )
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            // keep user text from forming template placeholders
            '{' => out.push_str("&#123;"),
            '}' => out.push_str("&#125;"),
            _ => out.push(c),
        }
    }
    out
}
