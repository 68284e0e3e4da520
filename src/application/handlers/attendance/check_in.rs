//! CheckInHandler - Records a card swipe against a session.

use std::sync::Arc;

use crate::domain::attendance::AttendanceError;
use crate::domain::card::{self, CanonicalName};
use crate::domain::foundation::{ClassId, ProfessorId, SessionNumber};
use crate::ports::AttendanceStore;

/// Command to check a student in from raw stripe data.
#[derive(Debug, Clone)]
pub struct CheckInCommand {
    pub payload: String,
    pub professor_id: ProfessorId,
    pub class_id: ClassId,
    pub session_number: SessionNumber,
}

/// Handler for card check-ins.
#[derive(Clone)]
pub struct CheckInHandler {
    store: Arc<dyn AttendanceStore>,
}

impl CheckInHandler {
    pub fn new(store: Arc<dyn AttendanceStore>) -> Self {
        Self { store }
    }

    /// Decodes the payload and records the name.
    ///
    /// # Errors
    ///
    /// - `InvalidCardData` if no Track 1 name could be read; nothing is written
    /// - `NotFound` from the store, unchanged
    pub async fn handle(&self, cmd: CheckInCommand) -> Result<CanonicalName, AttendanceError> {
        let name = card::decode(&cmd.payload).ok_or(AttendanceError::InvalidCardData)?;
        self.record(name, cmd.professor_id, cmd.class_id, cmd.session_number)
            .await
    }

    /// Same as [`handle`](Self::handle) for a raw reader chunk.
    pub async fn handle_bytes(
        &self,
        chunk: &[u8],
        professor_id: ProfessorId,
        class_id: ClassId,
        session_number: SessionNumber,
    ) -> Result<CanonicalName, AttendanceError> {
        let name = card::decode_bytes(chunk).ok_or(AttendanceError::InvalidCardData)?;
        self.record(name, professor_id, class_id, session_number).await
    }

    async fn record(
        &self,
        name: CanonicalName,
        professor_id: ProfessorId,
        class_id: ClassId,
        session_number: SessionNumber,
    ) -> Result<CanonicalName, AttendanceError> {
        self.store
            .add_attendee(professor_id, class_id, session_number, name.as_str())
            .await?;
        tracing::info!(
            professor_id = %professor_id,
            class_id = %class_id,
            session_number = %session_number,
            student = %name,
            "student checked in"
        );
        Ok(name)
    }
}
