//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text and a process exit code.

use miette::Diagnostic;
use thiserror::Error;

use asactl_config::ConfigError;
use asactl_core::CoreError;

pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Unable to connect to device: {message}")]
    #[diagnostic(
        code(asactl::connection_failed),
        help(
            "Check that the ASA REST API agent is enabled and reachable.\n\
             Self-signed certificate? Try: --validate-certs no"
        )
    )]
    ConnectionFailed { message: String },

    #[error("Request timed out")]
    #[diagnostic(
        code(asactl::timeout),
        help("Increase the timeout with --timeout or check device responsiveness.")
    )]
    Timeout,

    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication error")]
    #[diagnostic(
        code(asactl::auth_failed),
        help(
            "Verify the username and password for this device.\n\
             Run: asactl config set-password --profile {profile}"
        )
    )]
    AuthFailed { profile: String },

    #[error("No credentials configured for profile '{profile}'")]
    #[diagnostic(
        code(asactl::no_credentials),
        help(
            "Configure credentials with: asactl config init\n\
             Or pass --username / --password (ASA_USERNAME / ASA_PASSWORD)."
        )
    )]
    NoCredentials { profile: String },

    // ── Device responses ─────────────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(code(asactl::unsupported_response))]
    UnsupportedResponse { message: String },

    #[error("{message}")]
    #[diagnostic(code(asactl::operation_failed))]
    OperationFailed { message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Validation failed: {reason}")]
    #[diagnostic(code(asactl::validation))]
    Validation { reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(asactl::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: asactl config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("No device configured")]
    #[diagnostic(
        code(asactl::no_config),
        help(
            "Pass --host (ASA_HOST) or create a profile with: asactl config init\n\
             Expected at: {path}"
        )
    )]
    NoConfig { path: String },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(asactl::config))]
    Config { message: String },

    // ── Internal ─────────────────────────────────────────────────────
    #[error("Internal error: {message}")]
    #[diagnostic(code(asactl::internal))]
    Internal { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout => exit_code::TIMEOUT,
            Self::AuthFailed { .. } | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::ProfileNotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } | Self::NoConfig { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }

    /// Attach the active profile to an authentication failure.
    pub fn for_profile(self, profile: &str) -> Self {
        match self {
            Self::AuthFailed { .. } => Self::AuthFailed {
                profile: profile.into(),
            },
            other => other,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(e) => Self::Validation {
                reason: e.to_string(),
            },

            CoreError::Transport(e) if e.is_timeout() => Self::Timeout,
            CoreError::Transport(e) => Self::ConnectionFailed {
                message: e.to_string(),
            },

            CoreError::Unauthorized => Self::AuthFailed {
                profile: "default".into(),
            },

            err @ (CoreError::UnsupportedResponse { .. } | CoreError::MalformedResponse { .. }) => {
                Self::UnsupportedResponse {
                    message: err.to_string(),
                }
            }

            err @ CoreError::OperationFailed { .. } => Self::OperationFailed {
                message: err.to_string(),
            },

            CoreError::Config { message } => Self::Config { message },

            CoreError::Internal(message) => Self::Internal { message },
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::ProfileNotFound { name, available } => Self::ProfileNotFound {
                name,
                available: crate::config::join_profiles(&available),
            },
            ConfigError::NoCredentials { profile } => Self::NoCredentials { profile },
            ConfigError::Validation { field, reason } => Self::Validation {
                reason: format!("{field}: {reason}"),
            },
            ConfigError::Io(e) => Self::Io(e),
            other => Self::Config {
                message: other.to_string(),
            },
        }
    }
}
