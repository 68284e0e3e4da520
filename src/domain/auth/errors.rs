//! Authentication errors.

use thiserror::Error;

/// Errors returned by credential verification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Username unknown or password mismatch. The two are not distinguished.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The credential source could not be read.
    #[error("Credential store unavailable: {0}")]
    Unavailable(String),
}

impl AuthError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        AuthError::Unavailable(message.into())
    }
}
