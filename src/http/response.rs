//! Response-side types: status codes, raw responses and resolved payloads.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCode(pub u16);

impl StatusCode {
    pub const OK: StatusCode = StatusCode(200);
    pub const CREATED: StatusCode = StatusCode(201);
    pub const NO_CONTENT: StatusCode = StatusCode(204);
    pub const BAD_REQUEST: StatusCode = StatusCode(400);
    pub const NOT_FOUND: StatusCode = StatusCode(404);
    pub const INTERNAL_SERVER_ERROR: StatusCode = StatusCode(500);

    /// Check if the status code indicates success (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.0)
    }

    /// Canonical reason phrase, or an empty string for unknown codes.
    pub fn canonical_reason(&self) -> &'static str {
        hyper::StatusCode::from_u16(self.0)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("")
    }
}

impl Default for StatusCode {
    fn default() -> Self {
        StatusCode::OK
    }
}

impl From<u16> for StatusCode {
    fn from(code: u16) -> Self {
        StatusCode(code)
    }
}

impl From<StatusCode> for u16 {
    fn from(code: StatusCode) -> Self {
        code.0
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A completed response exactly as the transport received it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawResponse {
    pub status: StatusCode,
    pub status_text: String,
    pub headers: HashMap<String, String>,
    pub body: Bytes,
}

impl RawResponse {
    /// Create a response with the canonical status text and no body.
    pub fn new(status: impl Into<StatusCode>) -> Self {
        let status = status.into();
        Self {
            status,
            status_text: status.canonical_reason().to_string(),
            headers: HashMap::new(),
            body: Bytes::new(),
        }
    }

    /// Add a header.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set the body.
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Override the status text.
    pub fn status_text(mut self, text: impl Into<String>) -> Self {
        self.status_text = text.into();
        self
    }

    /// The body decoded as (lossy) UTF-8 text.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }
}

/// The resolved result of a successful call.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// The body parsed as JSON.
    Json(serde_json::Value),
    /// The body was empty or not JSON; the raw response is returned instead.
    Raw(RawResponse),
}

impl Payload {
    /// Parse a 2xx response, falling back to the raw response when the body
    /// is empty or not valid JSON.
    pub fn from_response(response: RawResponse) -> Self {
        if response.body.is_empty() {
            return Payload::Raw(response);
        }
        match serde_json::from_slice(&response.body) {
            Ok(value) => Payload::Json(value),
            Err(_) => Payload::Raw(response),
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Payload::Json(_))
    }

    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Payload::Json(value) => Some(value),
            Payload::Raw(_) => None,
        }
    }

    pub fn into_json(self) -> Option<serde_json::Value> {
        match self {
            Payload::Json(value) => Some(value),
            Payload::Raw(_) => None,
        }
    }

    pub fn raw(&self) -> Option<&RawResponse> {
        match self {
            Payload::Json(_) => None,
            Payload::Raw(response) => Some(response),
        }
    }

    /// Deserialize a JSON payload into a typed value.
    /// Returns `None` for raw payloads.
    pub fn parse<T: serde::de::DeserializeOwned>(&self) -> Option<Result<T, serde_json::Error>> {
        self.as_json().map(|value| T::deserialize(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_ranges() {
        assert!(StatusCode(200).is_success());
        assert!(StatusCode(299).is_success());
        assert!(!StatusCode(199).is_success());
        assert!(!StatusCode(300).is_success());
        assert!(!StatusCode::NOT_FOUND.is_success());
        assert!(StatusCode::CREATED.is_success());
        assert!(!StatusCode::BAD_REQUEST.is_success());
        assert!(!StatusCode::INTERNAL_SERVER_ERROR.is_success());
    }

    #[test]
    fn test_canonical_reason() {
        assert_eq!(StatusCode::NOT_FOUND.canonical_reason(), "Not Found");
        assert_eq!(StatusCode(599).canonical_reason(), "");
    }

    #[test]
    fn test_payload_parses_json() {
        let response = RawResponse::new(200).body(r#"{"id": 7}"#);
        let payload = Payload::from_response(response);
        assert_eq!(payload.as_json(), Some(&serde_json::json!({ "id": 7 })));
    }

    #[test]
    fn test_payload_empty_body_falls_back() {
        let payload = Payload::from_response(RawResponse::new(204));
        let raw = payload.raw().unwrap();
        assert_eq!(raw.status, StatusCode::NO_CONTENT);
        assert!(raw.body.is_empty());
    }

    #[test]
    fn test_payload_non_json_falls_back() {
        let payload = Payload::from_response(RawResponse::new(200).body("OK"));
        assert!(!payload.is_json());
        assert_eq!(payload.raw().map(|r| r.text()), Some("OK".to_string()));
    }

    #[test]
    fn test_payload_typed_parse() {
        #[derive(Deserialize, Debug, PartialEq)]
        struct Chat {
            id: u32,
            title: String,
        }

        let payload = Payload::Json(serde_json::json!({ "id": 1, "title": "general" }));
        let chat: Chat = payload.parse().unwrap().unwrap();
        assert_eq!(
            chat,
            Chat {
                id: 1,
                title: "general".to_string()
            }
        );

        let raw = Payload::Raw(RawResponse::new(200));
        assert!(raw.parse::<Chat>().is_none());
    }
}
