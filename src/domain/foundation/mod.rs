//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers and error types that form the vocabulary
//! of the attendance domain.

mod errors;
mod ids;

pub use errors::{ErrorCode, ValidationError};
pub use ids::{ClassId, ProfessorId, SessionNumber, UserId};
