//! Transport backed by hyper's HTTP/1 client.

use super::{Completion, OutboundRequest, Transport};
use crate::http::{RawResponse, StatusCode, WireBody};
use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::header::CONTENT_TYPE;
use hyper::Request;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use std::collections::HashMap;
use tracing::{debug, trace};

/// Sends requests over plain HTTP using a pooled hyper client.
#[derive(Clone)]
pub struct HyperTransport {
    client: Client<HttpConnector, Full<Bytes>>,
}

impl HyperTransport {
    /// Create a new transport.
    pub fn new() -> Self {
        let client = Client::builder(TokioExecutor::new()).build_http();
        Self { client }
    }

    async fn dispatch(&self, request: OutboundRequest) -> Result<RawResponse, String> {
        let mut builder = Request::builder()
            .method(hyper::Method::from(request.verb))
            .uri(request.url.as_str());

        // A form carries its own boundary, so it owns the content type.
        let is_form = matches!(request.body, Some(WireBody::Form(_)));
        for (name, value) in &request.headers {
            if is_form && name.eq_ignore_ascii_case(CONTENT_TYPE.as_str()) {
                continue;
            }
            builder = builder.header(name.as_str(), value.as_str());
        }

        let body = match request.body {
            Some(WireBody::Json(bytes)) => bytes,
            Some(WireBody::Form(form)) => {
                builder = builder.header(CONTENT_TYPE, form.content_type());
                form.encode()
            }
            None => Bytes::new(),
        };

        let req = builder
            .body(Full::new(body))
            .map_err(|e| format!("invalid request: {}", e))?;

        let response = self
            .client
            .request(req)
            .await
            .map_err(|e| format!("request failed: {:?}", e))?;

        let status = response.status();
        let mut headers = HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(v) = value.to_str() {
                headers.insert(name.as_str().to_string(), v.to_string());
            }
        }

        let body = response
            .into_body()
            .collect()
            .await
            .map_err(|e| format!("failed to read response body: {}", e))?
            .to_bytes();

        Ok(RawResponse {
            status: StatusCode(status.as_u16()),
            status_text: status.canonical_reason().unwrap_or("").to_string(),
            headers,
            body,
        })
    }
}

impl Default for HyperTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HyperTransport {
    async fn send(&self, request: OutboundRequest) -> Completion {
        trace!("hyper transport sending {} {}", request.verb, request.url);

        let timeout = request.timeout;
        let exchange = self.dispatch(request);

        let result = match timeout {
            Some(limit) => match tokio::time::timeout(limit, exchange).await {
                Ok(result) => result,
                Err(_) => return Completion::TimedOut,
            },
            None => exchange.await,
        };

        match result {
            Ok(response) => Completion::Loaded(response),
            Err(cause) => {
                debug!("hyper transport failure: {}", cause);
                Completion::Failed(cause)
            }
        }
    }
}
