//! Transport configuration.

use std::time::Duration;

/// Connect timeout applied when no explicit value is configured.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Total per-request timeout applied when no explicit value is configured.
/// Generous enough for slow batch operations without hanging callers forever.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Settings for the HTTP transport backing a client.
///
/// Timeouts are always explicit here rather than inherited from library
/// defaults, so operational behavior is visible at the construction site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    /// Maximum time to establish a connection.
    pub connect_timeout: Duration,
    /// Maximum time for a whole request, connection included.
    pub request_timeout: Duration,
    /// Skip TLS certificate verification.
    ///
    /// Intended for gateways with self-managed certificate chains. Off by
    /// default; enabling it is logged loudly at client construction and
    /// never happens implicitly.
    pub accept_invalid_certs: bool,
    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            accept_invalid_certs: false,
            user_agent: format!(
                "falcon-sdk/{}; {}",
                env!("CARGO_PKG_VERSION"),
                std::env::consts::OS
            ),
        }
    }
}

impl TransportConfig {
    /// Returns the default configuration with certificate verification
    /// disabled. The name is deliberately unpleasant; prefer the default.
    pub fn danger_accept_invalid_certs() -> Self {
        Self {
            accept_invalid_certs: true,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_verifies_certificates() {
        let config = TransportConfig::default();
        assert!(!config.accept_invalid_certs);
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.request_timeout, Duration::from_secs(60));
        assert!(config.user_agent.starts_with("falcon-sdk/"));
    }

    #[test]
    fn danger_constructor_only_relaxes_verification() {
        let config = TransportConfig::danger_accept_invalid_certs();
        assert!(config.accept_invalid_certs);
        assert_eq!(config.request_timeout, TransportConfig::default().request_timeout);
    }
}
