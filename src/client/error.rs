//! Errors a request can settle with.

/// The three ways a call can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// A response arrived with a status outside `200..300`.
    #[error("HTTP Error: {status} {status_text}")]
    Status { status: u16, status_text: String },

    /// The request could not complete (connectivity, DNS, invalid address).
    #[error("Network Error")]
    Network,

    /// The timeout elapsed before the request completed.
    #[error("Request Timeout")]
    Timeout,
}

impl TransportError {
    /// Create a status error.
    pub fn status_error(status: u16, status_text: impl Into<String>) -> Self {
        TransportError::Status {
            status,
            status_text: status_text.into(),
        }
    }

    /// The HTTP status, if the failure carried one.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, TransportError::Timeout)
    }

    pub fn is_network(&self) -> bool {
        matches!(self, TransportError::Network)
    }
}
