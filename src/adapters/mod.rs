//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `attendance` - Attendance store over a persisted document
//! - `storage` - Document storage (JSON file, in-memory)
//! - `card_reader` - Stripe reader byte streams
//! - `http` - REST API

pub mod attendance;
pub mod card_reader;
pub mod http;
pub mod storage;

pub use attendance::DocumentAttendanceStore;
pub use card_reader::{DeviceCardReader, ScriptedCardReader};
pub use storage::{FileDocumentStorage, InMemoryDocumentStorage};
