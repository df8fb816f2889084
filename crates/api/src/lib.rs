//! Falcon API dispatch layer.
//!
//! This crate turns catalog descriptors plus caller arguments into exactly
//! one HTTP attempt and one uniform outcome. It provides:
//!
//! - Request construction from [`falcon_types::EndpointDescriptor`] entries
//! - A single-attempt HTTP transport with an injectable test seam
//! - Normalization of every outcome into [`falcon_types::ResultEnvelope`]
//!
//! The primary entry point is [`FalconClient`]. Create an instance via
//! [`FalconClient::new`], then dispatch operations with
//! [`FalconClient::execute`].

pub mod client;
pub mod config;
pub mod normalize;
pub mod request;
pub mod transport;

pub use client::{ClientError, FalconClient};
pub use config::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_REQUEST_TIMEOUT, TransportConfig};
pub use normalize::{failure_envelope, normalize};
pub use request::build_request;
pub use transport::{HttpTransport, RawResponse, Transport, TransportError};
