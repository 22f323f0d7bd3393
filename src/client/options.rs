//! Per-call options for the verb methods.

use crate::http::{Body, QueryParams, QueryValue};
use std::collections::HashMap;

/// Options accepted by every verb method.
///
/// `query_params` is only honored by `fetch`; the other verbs ignore it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    pub body: Option<Body>,
    pub headers: HashMap<String, String>,
    pub timeout_ms: Option<u64>,
    pub query_params: Option<QueryParams>,
}

impl Options {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request body.
    pub fn body(mut self, body: impl Into<Body>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set a JSON body from any serializable value.
    pub fn json<T: serde::Serialize>(self, data: &T) -> Result<Self, serde_json::Error> {
        Ok(self.body(Body::json(data)?))
    }

    /// Add a header.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Override the timeout for this call. `0` disables it.
    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// Replace the query parameters.
    pub fn query(mut self, params: QueryParams) -> Self {
        self.query_params = Some(params);
        self
    }

    /// Add a single query parameter.
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.query_params
            .get_or_insert_with(QueryParams::new)
            .insert(key, value);
        self
    }
}
