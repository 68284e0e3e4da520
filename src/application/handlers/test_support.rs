//! Shared fixtures for handler tests.

use std::sync::Arc;

use crate::adapters::attendance::DocumentAttendanceStore;
use crate::adapters::storage::InMemoryDocumentStorage;
use crate::domain::attendance::{AttendanceDocument, Class, NewClass, Professor, Session};
use crate::domain::auth::{Role, UserRecord};
use crate::domain::foundation::{ClassId, ProfessorId, SessionNumber, UserId};

pub const PROFESSOR: ProfessorId = ProfessorId::new(3);
pub const CLASS: ClassId = ClassId::new(1);
pub const SESSION: SessionNumber = SessionNumber::new(1);

/// Professor 3 teaches class 1 with an empty session 1; professor 4 teaches
/// one class without sessions.
pub fn seed_document() -> AttendanceDocument {
    let algorithms = Class::new(
        CLASS,
        NewClass::new("Algorithms", Some("CS 3310"), Some(1), Some("Fall 2025")).unwrap(),
    )
    .with_session(Session::new(SESSION, "2025-11-20"))
    .with_session(Session::new(SessionNumber::new(2), "2025-11-27"));
    let databases = Class::new(
        ClassId::new(1),
        NewClass::new("Databases", Some("CS 4350"), Some(2), Some("Fall 2025")).unwrap(),
    );

    AttendanceDocument {
        users: vec![
            UserRecord::new(UserId::new(1), "student", "student123", Role::Student),
            UserRecord::new(UserId::new(2), "admin", "admin123", Role::Admin),
            UserRecord::new(UserId::new(3), "harsch", "prof123", Role::Professor),
        ],
        professors: vec![
            Professor::new(PROFESSOR, "Dr. Harsch", UserId::new(3)).with_class(algorithms),
            Professor::new(ProfessorId::new(4), "Dr. Lopez", UserId::new(4)).with_class(databases),
        ],
    }
}

pub async fn seeded_store() -> (Arc<DocumentAttendanceStore>, InMemoryDocumentStorage) {
    let storage = InMemoryDocumentStorage::with_document(&seed_document()).unwrap();
    let store = DocumentAttendanceStore::load(Arc::new(storage.clone()))
        .await
        .unwrap();
    (Arc::new(store), storage)
}
