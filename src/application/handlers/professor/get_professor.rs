//! GetProfessorHandler - One professor with their classes.

use std::sync::Arc;

use crate::domain::attendance::{AttendanceError, Professor};
use crate::domain::foundation::ProfessorId;
use crate::ports::AttendanceStore;

#[derive(Debug, Clone, Copy)]
pub struct GetProfessorQuery {
    pub professor_id: ProfessorId,
}

pub struct GetProfessorHandler {
    store: Arc<dyn AttendanceStore>,
}

impl GetProfessorHandler {
    pub fn new(store: Arc<dyn AttendanceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetProfessorQuery) -> Result<Professor, AttendanceError> {
        self.store.get_professor(query.professor_id).await
    }
}
