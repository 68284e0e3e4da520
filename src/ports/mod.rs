//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Attendance Ports
//!
//! - `AttendanceStore` - Read/modify access to the professor → class → session tree
//! - `DocumentStorage` - Load/save of the single persisted document
//!
//! ## Input Ports
//!
//! - `CardReader` - Streaming byte source for magnetic-stripe swipes
//! - `CredentialStore` - Username/password lookup

mod attendance_store;
mod card_reader;
mod credential_store;
mod document_storage;

pub use attendance_store::AttendanceStore;
pub use card_reader::{CardChunkStream, CardReadError, CardReader};
pub use credential_store::CredentialStore;
pub use document_storage::{DocumentStorage, StorageError};
