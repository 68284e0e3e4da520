//! User accounts and roles.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use subtle::ConstantTimeEq;

use crate::domain::foundation::UserId;

/// Dashboard a user is routed to after login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Professor,
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Student => "student",
            Role::Professor => "professor",
            Role::Admin => "admin",
        };
        f.write_str(s)
    }
}

/// A stored account, as it appears in the `users` collection.
#[derive(Deserialize, Serialize)]
pub struct UserRecord {
    pub id: UserId,
    pub username: String,
    #[serde(serialize_with = "serialize_password")]
    password: SecretString,
    pub role: Role,
}

impl UserRecord {
    pub fn new(
        id: UserId,
        username: impl Into<String>,
        password: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id,
            username: username.into(),
            password: SecretString::new(password.into()),
            role,
        }
    }

    /// Compares the supplied password in constant time.
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password
            .expose_secret()
            .as_bytes()
            .ct_eq(candidate.as_bytes())
            .into()
    }

    /// Returns the public view of the account.
    pub fn account(&self) -> UserAccount {
        UserAccount {
            id: self.id,
            username: self.username.clone(),
            role: self.role,
        }
    }
}

impl fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRecord")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("role", &self.role)
            .finish()
    }
}

// The document store writes the whole document back, users included.
fn serialize_password<S>(password: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(password.expose_secret())
}

/// An authenticated account without its password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserAccount {
    pub id: UserId,
    pub username: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> UserRecord {
        UserRecord::new(UserId::new(3), "prof", "secret", Role::Professor)
    }

    #[test]
    fn password_matches_exact_value_only() {
        let r = record();
        assert!(r.password_matches("secret"));
        assert!(!r.password_matches("Secret"));
        assert!(!r.password_matches("secret "));
        assert!(!r.password_matches(""));
    }

    #[test]
    fn debug_output_redacts_password() {
        let out = format!("{:?}", record());
        assert!(out.contains("prof"));
        assert!(!out.contains("secret"));
    }

    #[test]
    fn round_trips_through_document_json() {
        let json = r#"{"id": 1, "username": "admin", "password": "pw", "role": "admin"}"#;
        let r: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.role, Role::Admin);
        assert!(r.password_matches("pw"));

        let value = serde_json::to_value(&r).unwrap();
        assert_eq!(value["password"], "pw");
        assert_eq!(value["role"], "admin");
    }

    #[test]
    fn account_view_omits_password() {
        let account = record().account();
        let value = serde_json::to_value(&account).unwrap();
        assert!(value.get("password").is_none());
        assert_eq!(account.role, Role::Professor);
    }
}
