//! The persisted attendance document.
//!
//! One JSON document holds every account and the whole professor tree:
//!
//! ```text
//! { "users": [...], "professors": [ { "classes": [ { "sessions": [ { "attendees": [...] } ] } ] } ] }
//! ```

use serde::{Deserialize, Serialize};

use super::Professor;
use crate::domain::auth::UserRecord;
use crate::domain::foundation::ValidationError;

/// Root of the persisted state.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AttendanceDocument {
    #[serde(default)]
    pub users: Vec<UserRecord>,

    #[serde(default)]
    pub professors: Vec<Professor>,
}

impl AttendanceDocument {
    /// Checks id uniqueness across the whole tree.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (i, professor) in self.professors.iter().enumerate() {
            if self.professors[..i].iter().any(|p| p.id() == professor.id()) {
                return Err(ValidationError::invalid_format(
                    "professors",
                    format!("duplicate professor id {}", professor.id()),
                ));
            }
            professor.validate()?;
        }
        for (i, user) in self.users.iter().enumerate() {
            if self.users[..i].iter().any(|u| u.username == user.username) {
                return Err(ValidationError::invalid_format(
                    "users",
                    format!("duplicate username '{}'", user.username),
                ));
            }
        }
        Ok(())
    }
}
