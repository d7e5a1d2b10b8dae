// src/web/request.rs
// Inbound request body with aliased field names

use serde_json::Value;

use crate::service::ResearchRequest;

/// Accepted keys for the operation, in lookup order
pub const OPERATION_KEYS: &[&str] = &["operation", "action", "mode", "type"];

/// Accepted keys for the content, in lookup order
pub const CONTENT_KEYS: &[&str] = &["content", "text", "prompt"];

/// Body of `POST /api/research/process` before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessRequest {
    pub operation: Option<String>,
    pub content: Option<String>,
}

impl ProcessRequest {
    /// Resolve both fields from a JSON body. Anything but an object yields
    /// an empty request.
    pub fn from_json(body: &Value) -> Self {
        Self {
            operation: resolve_alias(body, OPERATION_KEYS),
            content: resolve_alias(body, CONTENT_KEYS),
        }
    }

    /// Missing fields become empty strings, which validation rejects
    pub fn into_research_request(self) -> ResearchRequest {
        ResearchRequest::new(
            self.operation.unwrap_or_default(),
            self.content.unwrap_or_default(),
        )
    }
}

/// First key in `keys` holding a usable value.
///
/// Strings are taken as-is; numbers and booleans are taken as their JSON
/// text. Null, arrays and objects count as absent.
pub fn resolve_alias(body: &Value, keys: &[&str]) -> Option<String> {
    let object = body.as_object()?;
    keys.iter()
        .filter_map(|key| object.get(*key))
        .find_map(scalar_text)
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_canonical_names() {
        let req = ProcessRequest::from_json(&json!({
            "operation": "summarize",
            "content": "The sky is blue."
        }));
        assert_eq!(req.operation.as_deref(), Some("summarize"));
        assert_eq!(req.content.as_deref(), Some("The sky is blue."));
    }

    #[test]
    fn test_every_alias_accepted() {
        for op_key in OPERATION_KEYS {
            for content_key in CONTENT_KEYS {
                let mut body = serde_json::Map::new();
                body.insert(op_key.to_string(), json!("paraphrase"));
                body.insert(content_key.to_string(), json!("Hello world"));
                let req = ProcessRequest::from_json(&Value::Object(body));
                assert_eq!(req.operation.as_deref(), Some("paraphrase"), "key {}", op_key);
                assert_eq!(req.content.as_deref(), Some("Hello world"), "key {}", content_key);
            }
        }
    }

    #[test]
    fn test_first_alias_wins() {
        let req = ProcessRequest::from_json(&json!({
            "type": "suggest",
            "action": "summarize",
            "prompt": "later",
            "text": "earlier"
        }));
        assert_eq!(req.operation.as_deref(), Some("summarize"));
        assert_eq!(req.content.as_deref(), Some("earlier"));
    }

    #[test]
    fn test_null_falls_through_to_next_alias() {
        let req = ProcessRequest::from_json(&json!({
            "operation": null,
            "mode": "suggest",
            "content": ["not", "text"],
            "prompt": "fallback"
        }));
        assert_eq!(req.operation.as_deref(), Some("suggest"));
        assert_eq!(req.content.as_deref(), Some("fallback"));
    }

    #[test]
    fn test_scalars_coerced_to_text() {
        let req = ProcessRequest::from_json(&json!({ "operation": true, "content": 42 }));
        assert_eq!(req.operation.as_deref(), Some("true"));
        assert_eq!(req.content.as_deref(), Some("42"));
    }

    #[test]
    fn test_non_object_body_is_empty() {
        assert_eq!(ProcessRequest::from_json(&json!("summarize")), ProcessRequest::default());
        assert_eq!(ProcessRequest::from_json(&json!([1, 2])), ProcessRequest::default());
    }

    #[test]
    fn test_into_research_request_defaults_missing_fields() {
        let req = ProcessRequest::from_json(&json!({ "text": "only content" }))
            .into_research_request();
        assert_eq!(req, ResearchRequest::new("", "only content"));
    }
}
