//! Credential store port.
//!
//! A flat username/password lookup. Successful verification yields the
//! account and its role; there is no token issuance behind it.

use async_trait::async_trait;

use crate::domain::auth::{AuthError, UserAccount};

/// Verifies login credentials.
///
/// # Contract
///
/// Implementations must:
/// - Return the account when username and password both match
/// - Return `AuthError::InvalidCredentials` for an unknown user or a wrong
///   password, without revealing which
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn verify(&self, username: &str, password: &str) -> Result<UserAccount, AuthError>;
}
