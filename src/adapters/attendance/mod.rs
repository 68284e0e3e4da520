//! Attendance store adapters.

mod document_store;

pub use document_store::DocumentAttendanceStore;
