//! API error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, timeouts, non-2xx statuses, and undecodable bodies
//! are distinct variants so callers can react differently (the session
//! store only ever needs the login message; pages mostly display the
//! error). `Status` keeps the raw body: the backend puts human-readable
//! messages in a `detail` (FastAPI) or `message` JSON field.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Fallback message when the error payload carries nothing usable.
pub const GENERIC_LOGIN_ERROR: &str = "Error al iniciar sesión";

/// Error surfaced by every resource-client call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No response received (network/transport failure).
    #[error("network error: {0}")]
    Network(String),

    /// No response within the fixed request timeout.
    #[error("request timed out")]
    Timeout,

    /// The server answered with a non-success status.
    #[error("HTTP {status}")]
    Status { status: u16, body: String },

    /// The response body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Whether this error is the global authentication-failure signal.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }
}

/// Extract a human-readable login failure message.
///
/// Prefers the error payload's structured `detail` field, then `message`,
/// and falls back to a generic label for transport-level failures or
/// unstructured bodies.
#[must_use]
pub fn login_error_message(err: &ApiError) -> String {
    if let ApiError::Status { body, .. } = err {
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
            for field in ["detail", "message"] {
                if let Some(message) = value.get(field).and_then(|v| v.as_str()) {
                    return message.to_owned();
                }
            }
        }
    }
    GENERIC_LOGIN_ERROR.to_owned()
}
