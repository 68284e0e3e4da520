//! Attendance domain module.
//!
//! Professors own classes, classes own sessions, sessions own a set of
//! attendee names. Everything is containment; all lookups are id chains
//! rooted at the professor.

mod class;
mod document;
mod errors;
mod new_class;
mod professor;
mod session;

pub use class::Class;
pub use document::AttendanceDocument;
pub use errors::{AttendanceError, MissingResource};
pub use new_class::{NewClass, DEFAULT_SECTION, MAX_SECTION};
pub use professor::Professor;
pub use session::Session;
