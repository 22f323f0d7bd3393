//! Pluggable request transports.
//!
//! A [`Transport`] sends one request and reports exactly one [`Completion`]:
//! the response loaded, the request failed at the network level, or the
//! transport's own deadline elapsed. The client never talks to the network
//! directly, so tests can swap in a fake that triggers each path on demand.

mod hyper_transport;

pub use hyper_transport::HyperTransport;

use crate::http::{RawResponse, Verb, WireBody};
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

/// A fully resolved request, ready to be put on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundRequest {
    pub verb: Verb,
    /// Absolute address: base address, path and query string.
    pub url: String,
    pub headers: HashMap<String, String>,
    pub body: Option<WireBody>,
    /// `None` means no deadline.
    pub timeout: Option<Duration>,
}

impl OutboundRequest {
    /// Case-insensitive header lookup.
    pub fn get_header(&self, key: &str) -> Option<&String> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    }
}

/// How a single send settled.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// A response arrived, whatever its status.
    Loaded(RawResponse),
    /// The request could not complete. Carries a description for logging.
    Failed(String),
    /// The transport gave up waiting.
    TimedOut,
}

/// Capability to send a request and report how it completed.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send the request. Must settle exactly once.
    async fn send(&self, request: OutboundRequest) -> Completion;
}
