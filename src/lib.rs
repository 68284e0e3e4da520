//! CLP Attendance - Classroom attendance tracking
//!
//! Professors own classes, classes own dated sessions, and sessions collect
//! attendee names entered by hand or read from magnetic-stripe ID cards.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
