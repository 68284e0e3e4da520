//! Class command and query handlers.

mod add_class;
mod list_all_classes;
mod list_professor_classes;
mod remove_class;

pub use add_class::{AddClassCommand, AddClassHandler};
pub use list_all_classes::{ClassListing, ListAllClassesHandler, ListAllClassesQuery};
pub use list_professor_classes::{
    ListProfessorClassesHandler, ListProfessorClassesQuery, ProfessorClasses,
};
pub use remove_class::{RemoveClassCommand, RemoveClassHandler};
