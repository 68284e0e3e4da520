//! RemoveClassHandler - Hard-deletes a class and its sessions.

use std::sync::Arc;

use crate::domain::attendance::AttendanceError;
use crate::domain::foundation::{ClassId, ProfessorId};
use crate::ports::AttendanceStore;

#[derive(Debug, Clone, Copy)]
pub struct RemoveClassCommand {
    pub professor_id: ProfessorId,
    pub class_id: ClassId,
}

pub struct RemoveClassHandler {
    store: Arc<dyn AttendanceStore>,
}

impl RemoveClassHandler {
    pub fn new(store: Arc<dyn AttendanceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: RemoveClassCommand) -> Result<(), AttendanceError> {
        self.store.remove_class(cmd.professor_id, cmd.class_id).await
    }
}
