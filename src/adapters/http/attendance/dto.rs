//! Data Transfer Objects for attendance endpoints.
//!
//! Request and response shapes use camelCase field names so the persisted
//! document and the API speak the same vocabulary.

use serde::{Deserialize, Serialize};

use crate::application::handlers::{ClassListing, LoginResult, ProfessorClasses};
use crate::domain::attendance::{Class, Professor, Session};
use crate::domain::auth::Role;
use crate::domain::foundation::{ClassId, ProfessorId, SessionNumber, UserId};

// ════════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body of `POST /professors/:pid/classes`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddClassRequest {
    pub title: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub section: Option<u32>,
    #[serde(default)]
    pub semester: Option<String>,
}

/// Body of the manual attend endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendeeRequest {
    pub student_name: String,
}

/// Body of the card check-in endpoint: the raw stripe text.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckInRequest {
    pub payload: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassSearchParams {
    pub search: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub user_id: UserId,
    pub username: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub professor_id: Option<ProfessorId>,
}

impl From<LoginResult> for LoginResponse {
    fn from(result: LoginResult) -> Self {
        Self {
            success: true,
            user_id: result.user_id,
            username: result.username,
            role: result.role,
            professor_id: result.professor_id,
        }
    }
}

/// A class as returned by the API, sessions included.
pub type ClassResponse = Class;

/// A professor as returned by the API, classes included.
pub type ProfessorResponse = Professor;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessorClassesResponse {
    pub professor_id: ProfessorId,
    pub professor_name: String,
    pub classes: Vec<ClassResponse>,
}

impl From<ProfessorClasses> for ProfessorClassesResponse {
    fn from(result: ProfessorClasses) -> Self {
        Self {
            professor_id: result.professor_id,
            professor_name: result.professor_name,
            classes: result.classes,
        }
    }
}

/// One row of the cross-professor class list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassListingResponse {
    pub professor_id: ProfessorId,
    pub professor_name: String,
    #[serde(flatten)]
    pub class: ClassResponse,
}

impl From<ClassListing> for ClassListingResponse {
    fn from(listing: ClassListing) -> Self {
        Self {
            professor_id: listing.professor_id,
            professor_name: listing.professor_name,
            class: listing.class,
        }
    }
}

/// A session roster with its location in the tree.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterResponse {
    pub professor_id: ProfessorId,
    pub class_id: ClassId,
    pub session_number: SessionNumber,
    pub date: String,
    pub attendees: Vec<String>,
}

impl RosterResponse {
    pub fn new(professor_id: ProfessorId, class_id: ClassId, session: &Session) -> Self {
        Self {
            professor_id,
            class_id,
            session_number: session.session_number(),
            date: session.date().to_string(),
            attendees: session.attendees().to_vec(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInResponse {
    pub student_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Standard error response for API errors.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}
