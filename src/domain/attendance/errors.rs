//! Attendance error taxonomy.
//!
//! Failures fall into three groups callers must tell apart:
//! the card could not be read (swipe again), the selected
//! professor/class/session does not exist (fix the selection), and
//! storage failed (infrastructure).

use std::fmt;
use thiserror::Error;

use crate::domain::foundation::{ClassId, ErrorCode, ProfessorId, SessionNumber, ValidationError};

/// The most specific resource that failed to resolve in a
/// professor → class → session chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingResource {
    Professor(ProfessorId),
    Class {
        professor_id: ProfessorId,
        class_id: ClassId,
    },
    Session {
        professor_id: ProfessorId,
        class_id: ClassId,
        session_number: SessionNumber,
    },
}

impl fmt::Display for MissingResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingResource::Professor(id) => write!(f, "Professor {}", id),
            MissingResource::Class {
                professor_id,
                class_id,
            } => write!(f, "Class {} of professor {}", class_id, professor_id),
            MissingResource::Session {
                professor_id,
                class_id,
                session_number,
            } => write!(
                f,
                "Session {} of class {} (professor {})",
                session_number, class_id, professor_id
            ),
        }
    }
}

/// Errors returned by the attendance store and service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttendanceError {
    /// A professor, class or session id did not resolve.
    #[error("{0} not found")]
    NotFound(MissingResource),

    /// Input was empty or malformed.
    #[error("Invalid {field}: {message}")]
    InvalidArgument { field: String, message: String },

    /// The swipe held no parseable Track 1 name.
    #[error("Card data did not contain a readable name")]
    InvalidCardData,

    /// The document could not be persisted or loaded.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl AttendanceError {
    pub fn professor_not_found(professor_id: ProfessorId) -> Self {
        AttendanceError::NotFound(MissingResource::Professor(professor_id))
    }

    pub fn class_not_found(professor_id: ProfessorId, class_id: ClassId) -> Self {
        AttendanceError::NotFound(MissingResource::Class {
            professor_id,
            class_id,
        })
    }

    pub fn session_not_found(
        professor_id: ProfessorId,
        class_id: ClassId,
        session_number: SessionNumber,
    ) -> Self {
        AttendanceError::NotFound(MissingResource::Session {
            professor_id,
            class_id,
            session_number,
        })
    }

    pub fn invalid_argument(field: impl Into<String>, message: impl Into<String>) -> Self {
        AttendanceError::InvalidArgument {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        AttendanceError::Storage(message.into())
    }

    /// Returns true for any NotFound variant.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AttendanceError::NotFound(_))
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AttendanceError::NotFound(MissingResource::Professor(_)) => ErrorCode::ProfessorNotFound,
            AttendanceError::NotFound(MissingResource::Class { .. }) => ErrorCode::ClassNotFound,
            AttendanceError::NotFound(MissingResource::Session { .. }) => ErrorCode::SessionNotFound,
            AttendanceError::InvalidArgument { .. } => ErrorCode::ValidationFailed,
            AttendanceError::InvalidCardData => ErrorCode::InvalidCardData,
            AttendanceError::Storage(_) => ErrorCode::StorageError,
        }
    }
}

impl From<ValidationError> for AttendanceError {
    fn from(err: ValidationError) -> Self {
        AttendanceError::InvalidArgument {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}
