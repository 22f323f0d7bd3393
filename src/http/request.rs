//! Request-side types: verbs, bodies and the resolved request description.

use bytes::{Bytes, BytesMut};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Timeout applied when neither the call nor the client configures one.
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Request verb. Each verb maps to one HTTP method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verb {
    /// GET
    #[default]
    Fetch,
    /// POST
    Create,
    /// PUT
    Replace,
    /// DELETE
    Remove,
}

impl Verb {
    /// The HTTP method token for this verb.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Fetch => "GET",
            Verb::Create => "POST",
            Verb::Replace => "PUT",
            Verb::Remove => "DELETE",
        }
    }
}

impl std::fmt::Display for Verb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Verb> for hyper::Method {
    fn from(verb: Verb) -> Self {
        match verb {
            Verb::Fetch => hyper::Method::GET,
            Verb::Create => hyper::Method::POST,
            Verb::Replace => hyper::Method::PUT,
            Verb::Remove => hyper::Method::DELETE,
        }
    }
}

impl std::str::FromStr for Verb {
    type Err = String;

    /// Accepts verb names (`fetch`) as well as method tokens (`GET`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "FETCH" | "GET" => Ok(Verb::Fetch),
            "CREATE" | "POST" => Ok(Verb::Create),
            "REPLACE" | "PUT" => Ok(Verb::Replace),
            "REMOVE" | "DELETE" => Ok(Verb::Remove),
            other => Err(format!("unknown verb '{}'", other)),
        }
    }
}

/// One part of a multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
    /// Plain text field.
    Text(String),
    /// File upload with its own content type.
    File {
        filename: String,
        content_type: String,
        data: Bytes,
    },
}

static BOUNDARY_SEQ: AtomicU64 = AtomicU64::new(0);

fn generate_boundary() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    let seq = BOUNDARY_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("----courier{:x}{:04x}", nanos, seq)
}

/// Multipart form payload. Sent as-is, never JSON-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormData {
    boundary: String,
    fields: Vec<(String, FormValue)>,
}

impl FormData {
    /// Create an empty form with a fresh boundary.
    pub fn new() -> Self {
        Self {
            boundary: generate_boundary(),
            fields: Vec::new(),
        }
    }

    /// Append a text field.
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), FormValue::Text(value.into())));
        self
    }

    /// Append a file part.
    pub fn file(
        mut self,
        name: impl Into<String>,
        filename: impl Into<String>,
        content_type: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        self.fields.push((
            name.into(),
            FormValue::File {
                filename: filename.into(),
                content_type: content_type.into(),
                data: data.into(),
            },
        ));
        self
    }

    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    pub fn fields(&self) -> &[(String, FormValue)] {
        &self.fields
    }

    /// The `Content-Type` header value for this form.
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// Encode the form as a `multipart/form-data` body.
    pub fn encode(&self) -> Bytes {
        let mut buf = BytesMut::new();
        for (name, value) in &self.fields {
            buf.extend_from_slice(format!("--{}\r\n", self.boundary).as_bytes());
            match value {
                FormValue::Text(text) => {
                    buf.extend_from_slice(
                        format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name)
                            .as_bytes(),
                    );
                    buf.extend_from_slice(text.as_bytes());
                }
                FormValue::File {
                    filename,
                    content_type,
                    data,
                } => {
                    buf.extend_from_slice(
                        format!(
                            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                            name, filename, content_type
                        )
                        .as_bytes(),
                    );
                    buf.extend_from_slice(data);
                }
            }
            buf.extend_from_slice(b"\r\n");
        }
        buf.extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        buf.freeze()
    }
}

impl Default for FormData {
    fn default() -> Self {
        Self::new()
    }
}

/// Caller-supplied request body.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// Serialized as JSON and sent with `Content-Type: application/json`.
    Json(serde_json::Value),
    /// Forwarded unchanged.
    Form(FormData),
}

impl Body {
    /// Build a JSON body from any serializable value.
    pub fn json<T: Serialize>(data: &T) -> Result<Self, serde_json::Error> {
        Ok(Body::Json(serde_json::to_value(data)?))
    }

    /// A `null` JSON body is treated as no body at all.
    pub fn is_empty(&self) -> bool {
        matches!(self, Body::Json(serde_json::Value::Null))
    }
}

impl From<serde_json::Value> for Body {
    fn from(value: serde_json::Value) -> Self {
        Body::Json(value)
    }
}

impl From<FormData> for Body {
    fn from(form: FormData) -> Self {
        Body::Form(form)
    }
}

/// Body as handed to the transport.
#[derive(Debug, Clone, PartialEq)]
pub enum WireBody {
    /// Already-serialized JSON.
    Json(Bytes),
    /// Multipart form, still unencoded.
    Form(FormData),
}

/// Resolved description of a single outbound request.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    pub verb: Verb,
    /// Path relative to the base address, including any query string.
    pub path: String,
    pub body: Option<Body>,
    pub headers: HashMap<String, String>,
    pub timeout_ms: Option<u64>,
}

impl RequestSpec {
    /// Create a request with no body, headers or timeout override.
    pub fn new(verb: Verb, path: impl Into<String>) -> Self {
        Self {
            verb,
            path: path.into(),
            body: None,
            headers: HashMap::new(),
            timeout_ms: None,
        }
    }

    /// Add a header.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set the body.
    pub fn body(mut self, body: impl Into<Body>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Override the timeout.
    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// Effective timeout in milliseconds.
    pub fn effective_timeout_ms(&self) -> u64 {
        self.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS)
    }

    /// Effective deadline; `None` when a zero timeout disables it.
    pub fn deadline(&self) -> Option<Duration> {
        match self.effective_timeout_ms() {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verb_methods() {
        assert_eq!(Verb::Fetch.to_string(), "GET");
        assert_eq!(Verb::Create.to_string(), "POST");
        assert_eq!(Verb::Replace.to_string(), "PUT");
        assert_eq!(Verb::Remove.to_string(), "DELETE");
        assert_eq!(hyper::Method::from(Verb::Remove), hyper::Method::DELETE);
    }

    #[test]
    fn test_verb_parse() {
        assert_eq!("fetch".parse::<Verb>(), Ok(Verb::Fetch));
        assert_eq!("POST".parse::<Verb>(), Ok(Verb::Create));
        assert_eq!("put".parse::<Verb>(), Ok(Verb::Replace));
        assert_eq!("Remove".parse::<Verb>(), Ok(Verb::Remove));
        assert!("PATCH".parse::<Verb>().is_err());
    }

    #[test]
    fn test_default_timeout() {
        let spec = RequestSpec::new(Verb::Fetch, "/");
        assert_eq!(spec.effective_timeout_ms(), DEFAULT_TIMEOUT_MS);
        assert_eq!(spec.deadline(), Some(Duration::from_millis(5000)));
    }

    #[test]
    fn test_zero_timeout_disables_deadline() {
        let spec = RequestSpec::new(Verb::Fetch, "/").timeout_ms(0);
        assert_eq!(spec.deadline(), None);
    }

    #[test]
    fn test_json_body() {
        #[derive(Serialize)]
        struct Message {
            text: String,
        }

        let body = Body::json(&Message {
            text: "hi".to_string(),
        })
        .unwrap();
        assert_eq!(body, Body::Json(serde_json::json!({ "text": "hi" })));
        assert!(!body.is_empty());
        assert!(Body::Json(serde_json::Value::Null).is_empty());
    }

    #[test]
    fn test_form_encoding() {
        let form = FormData::new()
            .text("title", "avatar")
            .file("image", "a.png", "image/png", &b"PNG"[..]);
        let boundary = form.boundary().to_string();
        assert_eq!(form.fields().len(), 2);
        assert_eq!(form.fields()[0], ("title".to_string(), FormValue::Text("avatar".to_string())));
        let encoded = String::from_utf8(form.encode().to_vec()).unwrap();

        let expected = format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"title\"\r\n\r\navatar\r\n\
             --{b}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"a.png\"\r\nContent-Type: image/png\r\n\r\nPNG\r\n\
             --{b}--\r\n",
            b = boundary
        );
        assert_eq!(encoded, expected);
        assert_eq!(
            form.content_type(),
            format!("multipart/form-data; boundary={}", boundary)
        );
    }

    #[test]
    fn test_form_boundaries_differ() {
        assert_ne!(FormData::new().boundary(), FormData::new().boundary());
    }
}
