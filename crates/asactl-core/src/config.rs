// ── Runtime connection configuration ──
//
// These types describe *how* to reach one ASA. They carry credential data
// and connection tuning, but never touch disk. The CLI constructs a
// `DeviceConfig` and hands it in.

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use crate::error::CoreError;

/// TLS verification strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict). Default, matching `validate_certs=yes`.
    #[default]
    SystemDefaults,
    /// Skip verification (self-signed management certificates).
    DangerAcceptInvalid,
}

impl TlsVerification {
    pub fn from_validate_certs(validate: bool) -> Self {
        if validate {
            Self::SystemDefaults
        } else {
            Self::DangerAcceptInvalid
        }
    }

    pub fn validates(self) -> bool {
        self == Self::SystemDefaults
    }
}

/// Configuration for connecting to a single device.
#[derive(Debug, Clone)]
pub struct DeviceConfig {
    /// Device management URL (e.g., `https://10.0.0.1`).
    pub url: Url,
    pub username: String,
    pub password: SecretString,
    pub tls: TlsVerification,
    /// Request timeout.
    pub timeout: Duration,
}

impl DeviceConfig {
    /// Build a config from a bare host (`10.0.0.1`, `asa1:8443`) or a full
    /// URL. Bare hosts are reached over HTTPS.
    pub fn new(
        host: &str,
        username: impl Into<String>,
        password: SecretString,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            url: parse_host(host)?,
            username: username.into(),
            password,
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(30),
        })
    }

    pub fn with_tls(mut self, tls: TlsVerification) -> Self {
        self.tls = tls;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Turn a declared `host` into the device base URL.
pub fn parse_host(host: &str) -> Result<Url, CoreError> {
    let host = host.trim();
    if host.is_empty() {
        return Err(CoreError::Config {
            message: "host must not be empty".into(),
        });
    }

    let candidate = if host.contains("://") {
        host.to_owned()
    } else {
        format!("https://{host}")
    };

    Url::parse(&candidate).map_err(|e| CoreError::Config {
        message: format!("invalid host '{host}': {e}"),
    })
}
