//! Attendance store port.
//!
//! Defines the contract for reading and mutating the professor → class →
//! session → attendee tree. Every operation is keyed by explicit ids; the
//! store has no notion of a current user.
//!
//! # Design
//!
//! - **Atomic per operation**: each call is one read-modify-write that
//!   either fully applies (and is persisted) or leaves state unchanged
//! - **Idempotent attendee writes**: adding a present name or removing an
//!   absent one succeeds without change
//! - **Most specific NotFound**: a missing session under an existing class
//!   reports the session, not the class

use async_trait::async_trait;

use crate::domain::attendance::{AttendanceError, Class, NewClass, Professor, Session};
use crate::domain::foundation::{ClassId, ProfessorId, SessionNumber, UserId};

/// Repository port for the attendance tree.
#[async_trait]
pub trait AttendanceStore: Send + Sync {
    /// List every professor with their classes, ordered by id.
    async fn list_professors(&self) -> Result<Vec<Professor>, AttendanceError>;

    /// Get one professor with their classes.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the professor does not exist
    async fn get_professor(&self, professor_id: ProfessorId) -> Result<Professor, AttendanceError>;

    /// Find the professor linked to a login account, if any.
    async fn find_professor_by_user(
        &self,
        user_id: UserId,
    ) -> Result<Option<Professor>, AttendanceError>;

    /// Get a professor's classes in stored order.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the professor does not exist
    async fn get_classes_for_professor(
        &self,
        professor_id: ProfessorId,
    ) -> Result<Vec<Class>, AttendanceError>;

    /// Append a class with id `max(existing) + 1` and persist.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the professor does not exist
    /// - `Storage` if persisting fails (nothing is changed)
    async fn add_class(
        &self,
        professor_id: ProfessorId,
        data: NewClass,
    ) -> Result<Class, AttendanceError>;

    /// Hard-delete a class and persist.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the professor or class does not exist
    /// - `Storage` if persisting fails (nothing is changed)
    async fn remove_class(
        &self,
        professor_id: ProfessorId,
        class_id: ClassId,
    ) -> Result<(), AttendanceError>;

    /// Get a session and its roster.
    ///
    /// # Errors
    ///
    /// - `NotFound` for the most specific missing level
    async fn get_session(
        &self,
        professor_id: ProfessorId,
        class_id: ClassId,
        session_number: SessionNumber,
    ) -> Result<Session, AttendanceError>;

    /// Record an attendee. Already-present names are a successful no-op.
    ///
    /// # Errors
    ///
    /// - `NotFound` for the most specific missing level
    /// - `InvalidArgument` if `name` is blank
    /// - `Storage` if persisting fails (nothing is changed)
    async fn add_attendee(
        &self,
        professor_id: ProfessorId,
        class_id: ClassId,
        session_number: SessionNumber,
        name: &str,
    ) -> Result<(), AttendanceError>;

    /// Remove an attendee. Absent names are a successful no-op.
    ///
    /// # Errors
    ///
    /// - `NotFound` for the most specific missing level
    /// - `Storage` if persisting fails (nothing is changed)
    async fn remove_attendee(
        &self,
        professor_id: ProfessorId,
        class_id: ClassId,
        session_number: SessionNumber,
        name: &str,
    ) -> Result<(), AttendanceError>;
}
