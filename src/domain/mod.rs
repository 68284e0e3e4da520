//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared identifiers and error codes
//! - `attendance` - Professor → class → session → attendee model
//! - `card` - Magnetic-stripe Track 1 decoding
//! - `auth` - Accounts, roles and credential errors

pub mod attendance;
pub mod auth;
pub mod card;
pub mod foundation;
