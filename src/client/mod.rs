//! The request client and its configuration, options and errors.

mod config;
mod error;
mod options;
mod request_client;

pub use config::ClientConfig;
pub use error::TransportError;
pub use options::Options;
pub use request_client::RequestClient;
