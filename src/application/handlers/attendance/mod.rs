//! Attendance command and query handlers.

mod check_in;
mod get_roster;
mod record_attendance;
mod remove_attendance;
mod scan_cards;

pub use check_in::{CheckInCommand, CheckInHandler};
pub use get_roster::{GetRosterHandler, GetRosterQuery};
pub use record_attendance::{RecordAttendanceCommand, RecordAttendanceHandler};
pub use remove_attendance::{RemoveAttendanceCommand, RemoveAttendanceHandler};
pub use scan_cards::{ScanCardsCommand, ScanCardsHandler, ScanReport, ScanTermination};
