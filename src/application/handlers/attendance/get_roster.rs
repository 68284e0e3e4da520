//! GetRosterHandler - Query handler for a session's attendees.

use std::sync::Arc;

use crate::domain::attendance::{AttendanceError, Session};
use crate::domain::foundation::{ClassId, ProfessorId, SessionNumber};
use crate::ports::AttendanceStore;

/// Query for one session roster.
#[derive(Debug, Clone, Copy)]
pub struct GetRosterQuery {
    pub professor_id: ProfessorId,
    pub class_id: ClassId,
    pub session_number: SessionNumber,
}

pub struct GetRosterHandler {
    store: Arc<dyn AttendanceStore>,
}

impl GetRosterHandler {
    pub fn new(store: Arc<dyn AttendanceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetRosterQuery) -> Result<Session, AttendanceError> {
        self.store
            .get_session(query.professor_id, query.class_id, query.session_number)
            .await
    }
}
