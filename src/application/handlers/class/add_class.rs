//! AddClassHandler - Command handler for creating a class.

use std::sync::Arc;

use crate::domain::attendance::{AttendanceError, Class, NewClass};
use crate::domain::foundation::ProfessorId;
use crate::ports::AttendanceStore;

/// Command to create a class under a professor.
///
/// Fields arrive as entered; validation happens in the handler.
#[derive(Debug, Clone)]
pub struct AddClassCommand {
    pub professor_id: ProfessorId,
    pub title: String,
    pub code: Option<String>,
    pub section: Option<u32>,
    pub semester: Option<String>,
}

pub struct AddClassHandler {
    store: Arc<dyn AttendanceStore>,
}

impl AddClassHandler {
    pub fn new(store: Arc<dyn AttendanceStore>) -> Self {
        Self { store }
    }

    /// Validates the input and appends the class.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` for a blank title or an out-of-range section
    /// - `NotFound` if the professor does not exist
    pub async fn handle(&self, cmd: AddClassCommand) -> Result<Class, AttendanceError> {
        let data = NewClass::new(
            &cmd.title,
            cmd.code.as_deref(),
            cmd.section,
            cmd.semester.as_deref(),
        )?;
        self.store.add_class(cmd.professor_id, data).await
    }
}
