//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod attendance;
pub mod auth;
pub mod class;
pub mod professor;

#[cfg(test)]
pub(crate) mod test_support;

pub use attendance::{
    CheckInCommand, CheckInHandler, GetRosterHandler, GetRosterQuery, RecordAttendanceCommand,
    RecordAttendanceHandler, RemoveAttendanceCommand, RemoveAttendanceHandler, ScanCardsCommand,
    ScanCardsHandler, ScanReport, ScanTermination,
};
pub use auth::{LoginCommand, LoginHandler, LoginResult};
pub use class::{
    AddClassCommand, AddClassHandler, ClassListing, ListAllClassesHandler, ListAllClassesQuery,
    ListProfessorClassesHandler, ListProfessorClassesQuery, ProfessorClasses, RemoveClassCommand,
    RemoveClassHandler,
};
pub use professor::{GetProfessorHandler, GetProfessorQuery, ListProfessorsHandler};
