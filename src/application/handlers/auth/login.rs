//! LoginHandler - Flat credential check returning the account's role.
//!
//! No token or session is issued; the caller routes to a dashboard based
//! on the returned role.

use std::sync::Arc;

use crate::domain::auth::{AuthError, Role};
use crate::domain::foundation::{ProfessorId, UserId};
use crate::ports::{AttendanceStore, CredentialStore};

#[derive(Clone)]
pub struct LoginCommand {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for LoginCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginCommand")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginResult {
    pub user_id: UserId,
    pub username: String,
    pub role: Role,
    /// Set when the account belongs to a professor.
    pub professor_id: Option<ProfessorId>,
}

pub struct LoginHandler {
    credentials: Arc<dyn CredentialStore>,
    store: Arc<dyn AttendanceStore>,
}

impl LoginHandler {
    pub fn new(credentials: Arc<dyn CredentialStore>, store: Arc<dyn AttendanceStore>) -> Self {
        Self { credentials, store }
    }

    pub async fn handle(&self, cmd: LoginCommand) -> Result<LoginResult, AuthError> {
        let account = match self.credentials.verify(&cmd.username, &cmd.password).await {
            Ok(account) => account,
            Err(err) => {
                tracing::warn!(username = %cmd.username, "login rejected");
                return Err(err);
            }
        };

        let professor_id = self
            .store
            .find_professor_by_user(account.id)
            .await
            .map_err(|e| AuthError::unavailable(e.to_string()))?
            .map(|p| p.id());

        tracing::info!(user_id = %account.id, role = %account.role, "user logged in");

        Ok(LoginResult {
            user_id: account.id,
            username: account.username,
            role: account.role,
            professor_id,
        })
    }
}
