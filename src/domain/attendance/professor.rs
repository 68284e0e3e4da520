//! Professor aggregate - root of the professor → class → session tree.
//!
//! Every lookup in the attendance model is an id chain rooted here, so the
//! professor is the unit of locking and of mutation.

use serde::{Deserialize, Serialize};

use super::{AttendanceError, Class, NewClass, Session};
use crate::domain::foundation::{ClassId, ProfessorId, SessionNumber, UserId, ValidationError};

/// A professor and the classes they own.
///
/// # Invariants
///
/// - class ids are unique within the professor
/// - a new class gets `max(existing ids) + 1`, or 1 when there are none
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Professor {
    id: ProfessorId,

    name: String,

    user_id: UserId,

    #[serde(default)]
    classes: Vec<Class>,
}

impl Professor {
    /// Creates a professor with no classes.
    pub fn new(id: ProfessorId, name: impl Into<String>, user_id: UserId) -> Self {
        Self {
            id,
            name: name.into(),
            user_id,
            classes: Vec::new(),
        }
    }

    /// Adds an existing class while building seed data.
    pub fn with_class(mut self, class: Class) -> Self {
        self.classes.retain(|c| c.id() != class.id());
        self.classes.push(class);
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> ProfessorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn classes(&self) -> &[Class] {
        &self.classes
    }

    pub fn class(&self, class_id: ClassId) -> Option<&Class> {
        self.classes.iter().find(|c| c.id() == class_id)
    }

    /// Resolves a session, reporting the most specific missing level.
    pub fn session(
        &self,
        class_id: ClassId,
        session_number: SessionNumber,
    ) -> Result<&Session, AttendanceError> {
        self.class(class_id)
            .ok_or_else(|| AttendanceError::class_not_found(self.id, class_id))?
            .session(session_number)
            .ok_or_else(|| AttendanceError::session_not_found(self.id, class_id, session_number))
    }

    /// Id the next created class will receive.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if the highest existing id is `u32::MAX`
    pub fn next_class_id(&self) -> Result<ClassId, AttendanceError> {
        self.classes
            .iter()
            .map(Class::id)
            .max()
            .unwrap_or(ClassId::new(0))
            .next()
            .ok_or_else(|| {
                AttendanceError::invalid_argument("class_id", "no class ids left for this professor")
            })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Appends a new class and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if no further class id can be assigned
    pub fn add_class(&mut self, data: NewClass) -> Result<&Class, AttendanceError> {
        let class = Class::new(self.next_class_id()?, data);
        self.classes.push(class);
        Ok(&self.classes[self.classes.len() - 1])
    }

    /// Removes a class by id and returns it.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no class has this id
    pub fn remove_class(&mut self, class_id: ClassId) -> Result<Class, AttendanceError> {
        let index = self
            .classes
            .iter()
            .position(|c| c.id() == class_id)
            .ok_or_else(|| AttendanceError::class_not_found(self.id, class_id))?;
        Ok(self.classes.remove(index))
    }

    /// Records an attendee. Returns `false` if they were already present.
    ///
    /// # Errors
    ///
    /// - `NotFound` for a missing class or session
    /// - `InvalidArgument` for a blank name
    pub fn add_attendee(
        &mut self,
        class_id: ClassId,
        session_number: SessionNumber,
        name: &str,
    ) -> Result<bool, AttendanceError> {
        Ok(self.session_mut(class_id, session_number)?.add_attendee(name)?)
    }

    /// Removes an attendee. Returns `false` if they were not present.
    ///
    /// # Errors
    ///
    /// - `NotFound` for a missing class or session
    pub fn remove_attendee(
        &mut self,
        class_id: ClassId,
        session_number: SessionNumber,
        name: &str,
    ) -> Result<bool, AttendanceError> {
        Ok(self.session_mut(class_id, session_number)?.remove_attendee(name))
    }

    fn session_mut(
        &mut self,
        class_id: ClassId,
        session_number: SessionNumber,
    ) -> Result<&mut Session, AttendanceError> {
        let professor_id = self.id;
        self.classes
            .iter_mut()
            .find(|c| c.id() == class_id)
            .ok_or_else(|| AttendanceError::class_not_found(professor_id, class_id))?
            .session_mut(session_number)
            .ok_or_else(|| AttendanceError::session_not_found(professor_id, class_id, session_number))
    }

    /// Checks uniqueness of class ids and session numbers in loaded data.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (i, class) in self.classes.iter().enumerate() {
            if self.classes[..i].iter().any(|c| c.id() == class.id()) {
                return Err(ValidationError::invalid_format(
                    "classes",
                    format!("professor {} has duplicate class id {}", self.id, class.id()),
                ));
            }
            if let Some(number) = class.duplicate_session_number() {
                return Err(ValidationError::invalid_format(
                    "sessions",
                    format!(
                        "class {} of professor {} has duplicate session number {}",
                        class.id(),
                        self.id,
                        number
                    ),
                ));
            }
        }
        Ok(())
    }
}
