//! Storage Adapters
//!
//! Implementations of the DocumentStorage port for persisting attendance data.
//!
//! ## Available Adapters
//!
//! - **FileDocumentStorage** - Stores the document as a JSON file on disk
//! - **InMemoryDocumentStorage** - Stores the document in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileDocumentStorage, InMemoryDocumentStorage};
//!
//! // Production: file-based storage
//! let storage = FileDocumentStorage::new("./data/db.json");
//!
//! // Testing: in-memory storage
//! let storage = InMemoryDocumentStorage::new();
//! ```

mod file_document_storage;
mod in_memory_document_storage;

pub use file_document_storage::FileDocumentStorage;
pub use in_memory_document_storage::InMemoryDocumentStorage;
