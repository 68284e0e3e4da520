//! RecordAttendanceHandler - Manual attendee entry by a professor.

use std::sync::Arc;

use crate::domain::attendance::{AttendanceError, Session};
use crate::domain::foundation::{ClassId, ProfessorId, SessionNumber};
use crate::ports::AttendanceStore;

/// Command to add a typed-in student name to a session.
#[derive(Debug, Clone)]
pub struct RecordAttendanceCommand {
    pub professor_id: ProfessorId,
    pub class_id: ClassId,
    pub session_number: SessionNumber,
    pub student_name: String,
}

/// Handler for manual attendee entry.
pub struct RecordAttendanceHandler {
    store: Arc<dyn AttendanceStore>,
}

impl RecordAttendanceHandler {
    pub fn new(store: Arc<dyn AttendanceStore>) -> Self {
        Self { store }
    }

    /// Trims the name, records it and returns the updated roster.
    pub async fn handle(&self, cmd: RecordAttendanceCommand) -> Result<Session, AttendanceError> {
        let name = cmd.student_name.trim();
        self.store
            .add_attendee(cmd.professor_id, cmd.class_id, cmd.session_number, name)
            .await?;
        self.store
            .get_session(cmd.professor_id, cmd.class_id, cmd.session_number)
            .await
    }
}
