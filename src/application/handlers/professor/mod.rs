//! Professor query handlers.

mod get_professor;
mod list_professors;

pub use get_professor::{GetProfessorHandler, GetProfessorQuery};
pub use list_professors::ListProfessorsHandler;
