//! Prompt text sent upstream and the `{{key}}` template helper.

pub const DEFAULT_PROMPT: &str = "found footage style, \
explorers in green hazmat suits, \
lit by flashlights and headlamps, \
dark moody cinematic atmosphere, \
ancient Egyptian underground catacombs, \
high detail, filmic grain, dramatic lighting";

/// Appended to every prompt sent upstream.
pub const COMPOSITION_SUFFIX: &str = ". Vertical 9:16 composition.";

/// Trimmed user prompt, or [`DEFAULT_PROMPT`] when missing or blank.
pub fn resolve_prompt(prompt: Option<&str>) -> &str {
    match prompt.map(str::trim) {
        Some(p) if !p.is_empty() => p,
        _ => DEFAULT_PROMPT,
    }
}

pub fn upstream_prompt(prompt: Option<&str>) -> String {
    format!("{}{}", resolve_prompt(prompt), COMPOSITION_SUFFIX)
}

/// Replace `{{key}}` placeholders in a template string.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        result = result.replace(&format!("{{{{{}}}}}", key), value);
    }
    result
}
