use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error body returned by the companies backend.
///
/// Application errors carry a plain string (`{"detail": "Company not found"}`);
/// request validation failures carry a list of field problems instead, so the
/// detail is kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub detail: Value,
}

impl ApiError {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: Value::String(detail.into()),
        }
    }

    pub fn from_body(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }

    pub fn message(&self) -> String {
        match &self.detail {
            Value::String(message) => message.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;

    #[test]
    fn reads_string_detail() {
        let err = ApiError::from_body(r#"{"detail":"Company not found"}"#).expect("parse");
        assert_eq!(err.message(), "Company not found");
    }

    #[test]
    fn keeps_structured_detail_as_json_text() {
        let err = ApiError::from_body(r#"{"detail":[{"loc":["body","name"]}]}"#).expect("parse");
        assert_eq!(err.message(), r#"[{"loc":["body","name"]}]"#);
    }

    #[test]
    fn non_json_body_is_not_an_api_error() {
        assert!(ApiError::from_body("Internal Server Error").is_none());
    }
}
