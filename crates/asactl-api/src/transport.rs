// Transport configuration for building the reqwest::Client.
//
// The ASA REST agent only answers requests that identify themselves with
// the `REST API Agent` user agent, so every client built here carries it.

use std::time::Duration;

/// User agent the ASA REST agent requires on every request.
pub const USER_AGENT: &str = "REST API Agent";

/// TLS verification mode (api-level mirror of core's TlsVerification).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlsMode {
    /// Use the system certificate store.
    System,
    /// Accept any certificate (for self-signed management certificates).
    DangerAcceptInvalid,
}

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub tls: TlsMode,
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            tls: TlsMode::System,
            timeout: Duration::from_secs(30),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, crate::error::Error> {
        let mut builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT);

        if self.tls == TlsMode::DangerAcceptInvalid {
            builder = builder.danger_accept_invalid_certs(true);
        }

        builder
            .build()
            .map_err(|e| crate::error::Error::Tls(format!("failed to build HTTP client: {e}")))
    }

    /// Map the `validate_certs` switch onto a TLS mode.
    pub fn with_validate_certs(mut self, validate: bool) -> Self {
        self.tls = if validate {
            TlsMode::System
        } else {
            TlsMode::DangerAcceptInvalid
        };
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
