//! HTTP adapter for the attendance API.
//!
//! Exposes login, class management, rosters and card check-in as JSON
//! endpoints under `/api`.

pub mod dto;
mod extract;
pub mod handlers;
pub mod routes;

pub use handlers::{ApiError, AttendanceAppState};
pub use routes::{attendance_router, attendance_routes};
