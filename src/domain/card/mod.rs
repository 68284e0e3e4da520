//! Card domain module.
//!
//! Turns raw magnetic-stripe data into the canonical student name that is
//! recorded as an attendee. Only Track 1 (`%`-prefixed, `LAST/FIRST` name
//! field) is understood.

mod canonical_name;
mod decoder;

pub use canonical_name::CanonicalName;
pub use decoder::{decode, decode_bytes, TRACK_1_SENTINEL, TRACK_TERMINATOR};
