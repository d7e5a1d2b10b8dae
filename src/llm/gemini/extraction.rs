// src/llm/gemini/extraction.rs
// Response extraction helpers for Gemini API responses

use crate::error::Result;
use crate::llm::gemini::types::GeminiResponse;
use crate::llm::provider::NO_CONTENT;

/// Text of the first part of the first candidate, if any
fn first_text(response: &GeminiResponse) -> Option<&str> {
    response
        .candidates
        .as_ref()?
        .first()?
        .content
        .as_ref()?
        .parts
        .as_ref()?
        .first()?
        .text
        .as_deref()
}

/// Parse a raw response body and pull out the generated text.
///
/// Missing candidates or parts yield [`NO_CONTENT`]; a body that is not a
/// valid response is a parse error.
pub fn extract_text(body: &str) -> Result<String> {
    let response: GeminiResponse = serde_json::from_str(body)?;
    Ok(first_text(&response).unwrap_or(NO_CONTENT).to_string())
}
