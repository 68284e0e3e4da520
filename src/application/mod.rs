//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::{
    // Attendance handlers
    CheckInCommand, CheckInHandler, GetRosterHandler, GetRosterQuery,
    RecordAttendanceCommand, RecordAttendanceHandler,
    RemoveAttendanceCommand, RemoveAttendanceHandler,
    ScanCardsCommand, ScanCardsHandler, ScanReport, ScanTermination,
    // Class handlers
    AddClassCommand, AddClassHandler, ClassListing, ListAllClassesHandler, ListAllClassesQuery,
    ListProfessorClassesHandler, ListProfessorClassesQuery, ProfessorClasses,
    RemoveClassCommand, RemoveClassHandler,
    // Professor handlers
    GetProfessorHandler, GetProfessorQuery, ListProfessorsHandler,
    // Auth handlers
    LoginCommand, LoginHandler, LoginResult,
};
