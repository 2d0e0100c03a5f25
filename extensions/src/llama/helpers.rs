use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::config::GenerationParams;

// --- Request Structures ---

/// Body of `POST api/v1/generate`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationRequest<'a> {
    /// System prompt immediately followed by the user's query.
    pub prompt: String,
    #[serde(flatten)]
    pub params: &'a GenerationParams,
}

impl<'a> GenerationRequest<'a> {
    pub fn new(system_prompt: &str, query: &str, params: &'a GenerationParams) -> Self {
        Self {
            prompt: format!("{}{}", system_prompt, query),
            params,
        }
    }
}

// --- Response Structures ---

/// Body of `GET api/v1/model`. The server reports a single loaded model.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelResponse {
    pub result: String,
}

/// Outcome of a generate call.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationResult {
    /// The body held `results` with exactly one entry; this is its `text`.
    Text(String),
    /// Any other body, returned as decoded.
    ///
    /// Kept as its own variant because it is unclear whether surfacing the raw
    /// body to the user is intended behavior or a missing error path.
    Raw(serde_json::Value),
}

impl GenerationResult {
    pub fn from_body(body: serde_json::Value) -> Self {
        let text = match body.get("results").and_then(|r| r.as_array()) {
            Some(results) if results.len() == 1 => results[0]
                .get("text")
                .and_then(|t| t.as_str())
                .map(str::to_string),
            _ => None,
        };
        match text {
            Some(text) => GenerationResult::Text(text),
            None => GenerationResult::Raw(body),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            GenerationResult::Text(text) => Some(text),
            GenerationResult::Raw(_) => None,
        }
    }

    /// Text to show the user: the generated text, or the raw body as compact JSON.
    pub fn display_text(&self) -> Cow<'_, str> {
        match self {
            GenerationResult::Text(text) => Cow::Borrowed(text),
            GenerationResult::Raw(serde_json::Value::String(s)) => Cow::Borrowed(s),
            GenerationResult::Raw(value) => Cow::Owned(value.to_string()),
        }
    }
}
