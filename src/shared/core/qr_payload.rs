// The content of a student's QR code.
//
// The payload is a JSON object carrying the student identifier plus the
// name and email for display on the scanner. Only `id` is required when
// decoding; the display fields are informational.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid QR payload: {0}")]
    InvalidPayload(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrPayload {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl QrPayload {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn encode(&self) -> String {
        serde_json::json!({
            "id": self.id,
            "name": self.name,
            "email": self.email,
        })
        .to_string()
    }

    pub fn decode(raw: &str) -> Result<Self, DecodeError> {
        // Only an object is accepted; serde would fill a struct from an array by position.
        let fields: Map<String, Value> = serde_json::from_str(raw.trim())
            .map_err(|e| DecodeError::InvalidPayload(e.to_string()))?;
        let id = fields
            .get("id")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| DecodeError::InvalidPayload("missing student id".into()))?;
        Ok(Self {
            id: id.to_string(),
            name: display_field(&fields, "name"),
            email: display_field(&fields, "email"),
        })
    }
}

fn display_field(fields: &Map<String, Value>, key: &str) -> String {
    fields
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod qr_payload_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_decode_what_it_encodes() {
        let payload = QrPayload::new(
            "0190f3a2-0000-7000-8000-000000000001",
            "Ada Lovelace",
            "ada@example.com",
        );
        let decoded = QrPayload::decode(&payload.encode()).expect("decode failed");
        assert_eq!(decoded, payload);
    }

    #[rstest]
    fn it_should_only_require_the_id() {
        let decoded = QrPayload::decode(r#"  {"id":"s-1"}  "#).expect("decode failed");
        assert_eq!(decoded.id, "s-1");
        assert_eq!(decoded.name, "");
        assert_eq!(decoded.email, "");
    }

    #[rstest]
    fn it_should_ignore_display_fields_of_the_wrong_type() {
        let decoded =
            QrPayload::decode(r#"{"id":"s-1","name":7,"email":null}"#).expect("decode failed");
        assert_eq!(decoded, QrPayload::new("s-1", "", ""));
    }

    #[rstest]
    #[case::not_json("not-json")]
    #[case::not_an_object(r#"["s-1"]"#)]
    #[case::positional_array(r#"["s-1","Ada Lovelace","ada@example.com"]"#)]
    #[case::bare_string(r#""s-1""#)]
    #[case::missing_id(r#"{"name":"Ada"}"#)]
    #[case::null_id(r#"{"id":null}"#)]
    #[case::blank_id(r#"{"id":"   "}"#)]
    #[case::numeric_id(r#"{"id":42}"#)]
    #[case::empty("")]
    fn it_should_reject_malformed_payloads(#[case] raw: &str) {
        let result = QrPayload::decode(raw);
        assert!(matches!(result, Err(DecodeError::InvalidPayload(_))));
    }
}
