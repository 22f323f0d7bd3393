//! The request client: verb helpers over a single execution routine.

use crate::client::{ClientConfig, Options, TransportError};
use crate::http::{Body, Payload, RequestSpec, Verb, WireBody};
use crate::transport::{Completion, HyperTransport, OutboundRequest, Transport};
use bytes::Bytes;
use std::sync::Arc;
use tracing::debug;

/// Issues one request per call against a base address.
///
/// Every verb method builds a [`RequestSpec`] and hands it to
/// [`execute`](RequestClient::execute), which sends it through the configured
/// [`Transport`] and settles exactly one outcome.
#[derive(Clone)]
pub struct RequestClient {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
}

impl RequestClient {
    /// Create a client that talks to the network through hyper.
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, Arc::new(HyperTransport::new()))
    }

    /// Create a client for a base address with otherwise default settings.
    pub fn with_base(base_address: impl Into<String>) -> Self {
        Self::new(ClientConfig::new().base_address(base_address))
    }

    /// Create a client over a custom transport.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// GET `path`, appending `options.query_params` when present.
    pub async fn fetch(&self, path: &str, options: Options) -> Result<Payload, TransportError> {
        self.execute(self.build(Verb::Fetch, path, options)).await
    }

    /// POST `path`.
    pub async fn create(&self, path: &str, options: Options) -> Result<Payload, TransportError> {
        self.execute(self.build(Verb::Create, path, options)).await
    }

    /// PUT `path`.
    pub async fn replace(&self, path: &str, options: Options) -> Result<Payload, TransportError> {
        self.execute(self.build(Verb::Replace, path, options)).await
    }

    /// DELETE `path`.
    pub async fn remove(&self, path: &str, options: Options) -> Result<Payload, TransportError> {
        self.execute(self.build(Verb::Remove, path, options)).await
    }

    /// Resolve a verb, path and options into a request description.
    ///
    /// Query parameters are encoded into the path for `Fetch` only. The
    /// timeout falls back to the client-wide setting when the call sets none.
    pub fn build(&self, verb: Verb, path: &str, options: Options) -> RequestSpec {
        let path = match (verb, &options.query_params) {
            (Verb::Fetch, Some(params)) => format!("{}?{}", path, params.to_query_string()),
            _ => path.to_string(),
        };

        RequestSpec {
            verb,
            path,
            body: options.body,
            headers: options.headers,
            timeout_ms: options.timeout_ms.or(self.config.timeout_ms),
        }
    }

    /// Send a request and settle its outcome.
    pub async fn execute(&self, spec: RequestSpec) -> Result<Payload, TransportError> {
        let request = self.outbound(spec);
        let timeout = request.timeout;

        debug!(
            "Dispatching {} {} (timeout: {:?})",
            request.verb, request.url, timeout
        );

        let send = self.transport.send(request);
        let completion = match timeout {
            Some(limit) => tokio::time::timeout(limit, send)
                .await
                .unwrap_or(Completion::TimedOut),
            None => send.await,
        };

        settle(completion)
    }

    fn outbound(&self, mut spec: RequestSpec) -> OutboundRequest {
        spec.timeout_ms = spec.timeout_ms.or(self.config.timeout_ms);
        let timeout = spec.deadline();
        let url = self.config.address_for(&spec.path);
        let mut headers = spec.headers;

        let body = match spec.body {
            Some(body) if body.is_empty() => None,
            Some(Body::Form(form)) => Some(WireBody::Form(form)),
            Some(Body::Json(value)) => {
                headers.retain(|key, _| !key.eq_ignore_ascii_case("content-type"));
                headers.insert("Content-Type".to_string(), "application/json".to_string());
                Some(WireBody::Json(Bytes::from(value.to_string())))
            }
            None => None,
        };

        OutboundRequest {
            verb: spec.verb,
            url,
            headers,
            body,
            timeout,
        }
    }
}

/// Map a transport completion to the call's outcome.
fn settle(completion: Completion) -> Result<Payload, TransportError> {
    match completion {
        Completion::Loaded(response) if response.status.is_success() => {
            debug!("Request settled with status {}", response.status);
            Ok(Payload::from_response(response))
        }
        Completion::Loaded(response) => {
            debug!("Request rejected with status {}", response.status);
            Err(TransportError::Status {
                status: response.status.0,
                status_text: response.status_text,
            })
        }
        Completion::Failed(cause) => {
            debug!("Request failed: {}", cause);
            Err(TransportError::Network)
        }
        Completion::TimedOut => {
            debug!("Request timed out");
            Err(TransportError::Timeout)
        }
    }
}
