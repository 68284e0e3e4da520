//! RemoveAttendanceHandler - Takes a student off a session roster.

use std::sync::Arc;

use crate::domain::attendance::{AttendanceError, Session};
use crate::domain::foundation::{ClassId, ProfessorId, SessionNumber};
use crate::ports::AttendanceStore;

/// Command to remove a student name from a session.
#[derive(Debug, Clone)]
pub struct RemoveAttendanceCommand {
    pub professor_id: ProfessorId,
    pub class_id: ClassId,
    pub session_number: SessionNumber,
    pub student_name: String,
}

/// Handler for attendee removal.
pub struct RemoveAttendanceHandler {
    store: Arc<dyn AttendanceStore>,
}

impl RemoveAttendanceHandler {
    pub fn new(store: Arc<dyn AttendanceStore>) -> Self {
        Self { store }
    }

    /// Removes the trimmed name and returns the updated roster. Absent
    /// names succeed without change.
    pub async fn handle(&self, cmd: RemoveAttendanceCommand) -> Result<Session, AttendanceError> {
        self.store
            .remove_attendee(
                cmd.professor_id,
                cmd.class_id,
                cmd.session_number,
                cmd.student_name.trim(),
            )
            .await?;
        self.store
            .get_session(cmd.professor_id, cmd.class_id, cmd.session_number)
            .await
    }
}
