//! ListProfessorClassesHandler - A professor's classes with their name joined in.

use std::sync::Arc;

use crate::domain::attendance::{AttendanceError, Class};
use crate::domain::foundation::ProfessorId;
use crate::ports::AttendanceStore;

#[derive(Debug, Clone, Copy)]
pub struct ListProfessorClassesQuery {
    pub professor_id: ProfessorId,
}

/// Classes of one professor, ready for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfessorClasses {
    pub professor_id: ProfessorId,
    pub professor_name: String,
    pub classes: Vec<Class>,
}

pub struct ListProfessorClassesHandler {
    store: Arc<dyn AttendanceStore>,
}

impl ListProfessorClassesHandler {
    pub fn new(store: Arc<dyn AttendanceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: ListProfessorClassesQuery,
    ) -> Result<ProfessorClasses, AttendanceError> {
        let classes = self
            .store
            .get_classes_for_professor(query.professor_id)
            .await?;
        let professor_name = self
            .store
            .get_professor(query.professor_id)
            .await?
            .name()
            .to_string();

        Ok(ProfessorClasses {
            professor_id: query.professor_id,
            professor_name,
            classes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{seeded_store, PROFESSOR};
    use crate::domain::attendance::NewClass;

    #[tokio::test]
    async fn joins_professor_name() {
        let (store, _) = seeded_store().await;
        let handler = ListProfessorClassesHandler::new(store);

        let result = handler
            .handle(ListProfessorClassesQuery {
                professor_id: PROFESSOR,
            })
            .await
            .unwrap();
        assert_eq!(result.professor_name, "Dr. Harsch");
        assert_eq!(result.classes.len(), 1);
        assert_eq!(result.classes[0].title(), "Algorithms");
    }

    #[tokio::test]
    async fn unknown_professor_is_not_found() {
        let (store, _) = seeded_store().await;
        let handler = ListProfessorClassesHandler::new(store);

        let err = handler
            .handle(ListProfessorClassesQuery {
                professor_id: ProfessorId::new(12),
            })
            .await
            .unwrap_err();
        assert_eq!(err, AttendanceError::professor_not_found(ProfessorId::new(12)));
    }

    #[tokio::test]
    async fn reflects_classes_added_through_the_store() {
        let (store, _) = seeded_store().await;
        store
            .add_class(PROFESSOR, NewClass::new("Compilers", None, None, None).unwrap())
            .await
            .unwrap();
        let handler = ListProfessorClassesHandler::new(store);

        let result = handler
            .handle(ListProfessorClassesQuery {
                professor_id: PROFESSOR,
            })
            .await
            .unwrap();
        let titles = result.classes.iter().map(Class::title).collect::<Vec<_>>();
        assert_eq!(titles, vec!["Algorithms", "Compilers"]);
    }
}
