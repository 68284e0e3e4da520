//! ListProfessorsHandler - All professors with their classes.

use std::sync::Arc;

use crate::domain::attendance::{AttendanceError, Professor};
use crate::ports::AttendanceStore;

pub struct ListProfessorsHandler {
    store: Arc<dyn AttendanceStore>,
}

impl ListProfessorsHandler {
    pub fn new(store: Arc<dyn AttendanceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<Vec<Professor>, AttendanceError> {
        self.store.list_professors().await
    }
}
