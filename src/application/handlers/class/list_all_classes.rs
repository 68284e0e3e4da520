//! ListAllClassesHandler - Every class across professors, optionally filtered.
//!
//! Backs the student class picker: the search matches professor name,
//! course code, title or `section N`, case-insensitively.

use std::sync::Arc;

use crate::domain::attendance::{AttendanceError, Class};
use crate::domain::foundation::ProfessorId;
use crate::ports::AttendanceStore;

#[derive(Debug, Clone, Default)]
pub struct ListAllClassesQuery {
    pub search: Option<String>,
}

/// One class with its owning professor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassListing {
    pub professor_id: ProfessorId,
    pub professor_name: String,
    pub class: Class,
}

pub struct ListAllClassesHandler {
    store: Arc<dyn AttendanceStore>,
}

impl ListAllClassesHandler {
    pub fn new(store: Arc<dyn AttendanceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: ListAllClassesQuery) -> Result<Vec<ClassListing>, AttendanceError> {
        let needle = query.search.unwrap_or_default();
        let professors = self.store.list_professors().await?;

        Ok(professors
            .iter()
            .flat_map(|professor| {
                professor
                    .classes()
                    .iter()
                    .filter(|class| class.matches_search(professor.name(), &needle))
                    .map(|class| ClassListing {
                        professor_id: professor.id(),
                        professor_name: professor.name().to_string(),
                        class: class.clone(),
                    })
            })
            .collect())
    }
}
