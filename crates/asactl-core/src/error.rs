// ── Core error types ──
//
// `ValidationError` covers declared input that can be rejected before any
// remote call. `CoreError` is the terminal failure of one reconciliation;
// every variant ends the invocation, nothing is retried.

use thiserror::Error;

/// Declared configuration that cannot be translated into a desired state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required: {reason}")]
    MissingRequiredField { field: String, reason: String },

    #[error("invalid field combination: {message}")]
    InvalidFieldCombination { message: String },

    #[error("'{port}' is not a valid {protocol} port")]
    InvalidPort { port: String, protocol: String },

    #[error("{field} must be {expected}, got '{value}'")]
    InvalidRange {
        field: String,
        value: String,
        expected: String,
    },

    #[error("'{value}' is not a valid {field} (expected {expected})")]
    InvalidChoice {
        field: String,
        value: String,
        expected: String,
    },

    #[error("{field} is not supported: {reason}")]
    Unsupported { field: String, reason: String },
}

impl ValidationError {
    pub(crate) fn missing(field: &str, reason: impl Into<String>) -> Self {
        Self::MissingRequiredField {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn combination(message: impl Into<String>) -> Self {
        Self::InvalidFieldCombination {
            message: message.into(),
        }
    }
}

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Input ────────────────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    // ── Device exchange ──────────────────────────────────────────────
    #[error("Unable to connect to device: {0}")]
    Transport(#[from] asactl_api::Error),

    #[error("Authentication error")]
    Unauthorized,

    #[error("Unsupported return code {status} while reading {object}")]
    UnsupportedResponse { object: String, status: u16 },

    #[error("Malformed response while reading {object}: {reason}")]
    MalformedResponse { object: String, reason: String },

    // ── Mutation ─────────────────────────────────────────────────────
    #[error("Unable to {operation} {object} (HTTP {status})")]
    OperationFailed {
        operation: String,
        object: String,
        status: u16,
    },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal ─────────────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("failed to encode object body: {err}"))
    }
}
