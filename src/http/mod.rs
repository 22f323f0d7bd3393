//! HTTP types shared by the client and its transports.

mod query;
mod request;
mod response;

pub use query::{QueryParams, QueryValue};
pub use request::{Body, FormData, FormValue, RequestSpec, Verb, WireBody, DEFAULT_TIMEOUT_MS};
pub use response::{Payload, RawResponse, StatusCode};
