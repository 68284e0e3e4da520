//! Class entity - a course section owned by one professor.

use serde::{Deserialize, Serialize};

use super::new_class::DEFAULT_SECTION;
use super::{NewClass, Session};
use crate::domain::foundation::{ClassId, SessionNumber};

/// A course section with its ordered sessions.
///
/// # Invariants
///
/// - `id` is unique within the owning professor
/// - session numbers are unique within the class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    id: ClassId,

    title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    code: Option<String>,

    #[serde(default = "default_section")]
    section: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    semester: Option<String>,

    #[serde(default)]
    sessions: Vec<Session>,
}

fn default_section() -> u32 {
    DEFAULT_SECTION
}

impl Class {
    /// Creates a class with no sessions from validated input.
    pub fn new(id: ClassId, data: NewClass) -> Self {
        let (title, code, section, semester) = data.into_parts();
        Self {
            id,
            title,
            code,
            section,
            semester,
            sessions: Vec::new(),
        }
    }

    /// Adds a session while building seed data.
    ///
    /// A session with the same number replaces the existing one.
    pub fn with_session(mut self, session: Session) -> Self {
        self.sessions
            .retain(|s| s.session_number() != session.session_number());
        self.sessions.push(session);
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> ClassId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn section(&self) -> u32 {
        self.section
    }

    pub fn semester(&self) -> Option<&str> {
        self.semester.as_deref()
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    /// Finds a session by number.
    pub fn session(&self, number: SessionNumber) -> Option<&Session> {
        self.sessions.iter().find(|s| s.session_number() == number)
    }

    pub(super) fn session_mut(&mut self, number: SessionNumber) -> Option<&mut Session> {
        self.sessions
            .iter_mut()
            .find(|s| s.session_number() == number)
    }

    /// Returns the first session number that appears more than once.
    pub(super) fn duplicate_session_number(&self) -> Option<SessionNumber> {
        self.sessions.iter().enumerate().find_map(|(i, s)| {
            self.sessions[..i]
                .iter()
                .any(|earlier| earlier.session_number() == s.session_number())
                .then(|| s.session_number())
        })
    }

    /// Case-insensitive match against professor name, code, title and
    /// `section N`, as used by the class picker.
    pub fn matches_search(&self, professor_name: &str, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        let section_label = format!("section {}", self.section);
        [
            professor_name,
            self.code.as_deref().unwrap_or_default(),
            self.title.as_str(),
            section_label.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}
