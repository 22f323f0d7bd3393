//! # Courier - a small async HTTP request client
//!
//! Courier wraps a single request/response exchange behind four verb
//! helpers. Each call builds one request against a base address, sends it
//! through a pluggable [`Transport`](transport::Transport) and settles
//! exactly one outcome: a parsed JSON payload, the raw response when the body
//! is not JSON, or one of three errors.
//!
//! ## Verbs
//!
//! | Method    | HTTP     | Query parameters |
//! |-----------|----------|------------------|
//! | `fetch`   | `GET`    | honored          |
//! | `create`  | `POST`   | ignored          |
//! | `replace` | `PUT`    | ignored          |
//! | `remove`  | `DELETE` | ignored          |
//!
//! ## Usage
//!
//! ```rust,no_run
//! use courier::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     let client = RequestClient::with_base("http://localhost:3000/api/v2");
//!
//!     let chats = client
//!         .fetch("/chats", Options::new().query_param("offset", 0).query_param("limit", 20))
//!         .await?;
//!
//!     let created = client
//!         .create("/chats", Options::new().body(serde_json::json!({ "title": "general" })))
//!         .await?;
//!
//!     println!("{:?} {:?}", chats.as_json(), created.as_json());
//!     Ok(())
//! }
//! ```
//!
//! ## Outcomes
//!
//! - `2xx` with a JSON body resolves to [`Payload::Json`](http::Payload::Json).
//! - `2xx` with an empty or non-JSON body resolves to
//!   [`Payload::Raw`](http::Payload::Raw). A malformed JSON body lands here
//!   too and cannot be told apart from a deliberate plain-text body.
//! - Any other status rejects with [`TransportError::Status`].
//! - Connection-level failures reject with [`TransportError::Network`].
//! - An elapsed timeout (5000 ms unless configured) rejects with
//!   [`TransportError::Timeout`].

pub mod client;
pub mod http;
pub mod transport;

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::client::{ClientConfig, Options, RequestClient, TransportError};
    pub use crate::http::{
        Body, FormData, Payload, QueryParams, QueryValue, RawResponse, RequestSpec, StatusCode,
        Verb, DEFAULT_TIMEOUT_MS,
    };
    pub use crate::transport::{Completion, HyperTransport, OutboundRequest, Transport};
    pub use async_trait::async_trait;
}

// Re-export for convenience
pub use client::{ClientConfig, Options, RequestClient, TransportError};
pub use http::{Body, Payload, RequestSpec, Verb};
pub use transport::{HyperTransport, Transport};
