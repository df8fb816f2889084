//! Falcon API client.
//!
//! [`FalconClient`] binds credentials to a transport and dispatches catalog
//! operations: build the request, send it exactly once, normalize whatever
//! comes back. Argument problems surface as [`DispatchError`] before any
//! network use; transport and HTTP outcomes always arrive inside the result
//! envelope.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use falcon_types::{CallArgs, Credentials, DispatchError, EndpointDescriptor, ResultEnvelope};
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use crate::config::TransportConfig;
use crate::normalize::{failure_envelope, normalize};
use crate::request::build_request;
use crate::transport::{HttpTransport, Transport};

/// Hosts allowed to use plain http without a warning.
const LOOPBACK_HOSTS: &[&str] = &["localhost", "127.0.0.1"];

/// Failure to construct a client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The base URL could not be parsed.
    #[error("invalid base URL '{base_url}': {source}")]
    InvalidBaseUrl {
        /// Offending URL text.
        base_url: String,
        #[source]
        source: url::ParseError,
    },

    /// The base URL parses but names no host.
    #[error("base URL '{base_url}' must include a host")]
    MissingHost {
        /// Offending URL text.
        base_url: String,
    },

    /// The base URL uses a scheme other than http or https.
    #[error("unsupported base URL scheme: {scheme}")]
    UnsupportedScheme {
        /// Scheme the URL carried.
        scheme: String,
    },

    /// The HTTP stack could not be initialized.
    #[error("failed to build HTTP transport")]
    Http(#[from] reqwest::Error),
}

/// Dispatches catalog operations against one API gateway.
///
/// Cloning is cheap; clones share the underlying transport and its
/// connection pool.
#[derive(Clone)]
pub struct FalconClient {
    credentials: Credentials,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for FalconClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FalconClient")
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}

impl FalconClient {
    /// Creates a client over the production HTTP transport.
    ///
    /// The base URL must parse and carry a host; plain http is tolerated for
    /// loopback hosts only and logged loudly otherwise. Disabled certificate
    /// verification is logged at construction so it never goes unnoticed.
    ///
    /// # Errors
    /// Returns [`ClientError`] when the base URL is unusable or the HTTP
    /// stack cannot be initialized.
    pub fn new(credentials: Credentials, config: TransportConfig) -> Result<Self, ClientError> {
        validate_base_url(&credentials.base_url)?;
        if config.accept_invalid_certs {
            warn!("TLS certificate verification is disabled for this client");
        }
        let transport = HttpTransport::new(&config)?;
        Ok(Self {
            credentials,
            transport: Arc::new(transport),
        })
    }

    /// Creates a client over a caller-supplied transport.
    ///
    /// This is the seam test doubles come in through; no base URL validation
    /// is applied.
    pub fn with_transport(credentials: Credentials, transport: Arc<dyn Transport>) -> Self {
        Self {
            credentials,
            transport,
        }
    }

    /// The base URL requests are resolved against.
    pub fn base_url(&self) -> &str {
        &self.credentials.base_url
    }

    /// Executes one catalog operation.
    ///
    /// # Errors
    /// Returns [`DispatchError`] only for failures detectable from the
    /// arguments alone; once the request leaves the builder, every outcome
    /// is an `Ok` envelope.
    pub async fn execute(
        &self,
        descriptor: &EndpointDescriptor,
        args: &CallArgs,
    ) -> Result<ResultEnvelope, DispatchError> {
        let envelope = build_request(descriptor, args, &self.credentials)?;
        debug!(
            operation = %descriptor.operation_id,
            method = %envelope.method,
            url = %envelope.url,
            query_pairs = envelope.query.len(),
            has_body = envelope.body.is_some(),
            "dispatching request"
        );

        let start = Instant::now();
        match self.transport.send(&envelope).await {
            Ok(raw) => {
                debug!(
                    operation = %descriptor.operation_id,
                    status = raw.status,
                    duration_ms = start.elapsed().as_millis(),
                    "request completed"
                );
                Ok(normalize(raw))
            }
            Err(error) => {
                warn!(
                    operation = %descriptor.operation_id,
                    error = %error,
                    duration_ms = start.elapsed().as_millis(),
                    "request failed in transport"
                );
                Ok(failure_envelope(&error))
            }
        }
    }
}

/// Validates that a base URL is usable by the client.
///
/// Rules: the URL must parse and name a host; https always passes; http
/// passes silently for loopback hosts and with a warning elsewhere; any
/// other scheme is rejected.
fn validate_base_url(base_url: &str) -> Result<(), ClientError> {
    let parsed = Url::parse(base_url).map_err(|source| ClientError::InvalidBaseUrl {
        base_url: base_url.to_string(),
        source,
    })?;

    let host = parsed
        .host_str()
        .ok_or_else(|| ClientError::MissingHost {
            base_url: base_url.to_string(),
        })?;

    match parsed.scheme() {
        "https" => Ok(()),
        "http" => {
            if !LOOPBACK_HOSTS
                .iter()
                .any(|&allowed| host.eq_ignore_ascii_case(allowed))
            {
                warn!(%host, "plain http base URL outside loopback");
            }
            Ok(())
        }
        other => Err(ClientError::UnsupportedScheme {
            scheme: other.to_string(),
        }),
    }
}
