//! Error body returned by the API.

use serde::Deserialize;
use serde_json::Value;

/// `{"detail": ...}` error envelope.
///
/// `detail` is usually a string, but request-validation failures carry an
/// array of objects instead; those are not matched against known messages.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorBody {
    /// Parses an error body, tolerating empty or non-JSON payloads.
    pub fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    /// The `detail` field when it is a non-empty string.
    pub fn detail_text(&self) -> Option<String> {
        match &self.detail {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_detail() {
        let body = ErrorBody::parse(r#"{"detail": "Short URL already exists"}"#);
        assert_eq!(body.detail_text().as_deref(), Some("Short URL already exists"));
    }

    #[test]
    fn test_array_detail_is_ignored() {
        let body = ErrorBody::parse(r#"{"detail": [{"loc": ["body", "original_url"], "msg": "invalid"}]}"#);
        assert!(body.detail.is_some());
        assert_eq!(body.detail_text(), None);
    }

    #[test]
    fn test_non_json_body() {
        assert_eq!(ErrorBody::parse("<html>502 Bad Gateway</html>").detail_text(), None);
        assert_eq!(ErrorBody::parse("").detail_text(), None);
    }
}
