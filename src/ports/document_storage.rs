//! Document Storage Port - Interface for persisting the attendance document.
//!
//! The core treats storage as a single key-addressable document. Adapters
//! decide where it lives (a JSON file, memory).

use async_trait::async_trait;

use crate::domain::attendance::{AttendanceDocument, AttendanceError};

/// Errors that can occur during document storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to serialize document: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize document: {0}")]
    DeserializationFailed(String),

    #[error("Document is inconsistent: {0}")]
    InvalidDocument(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<StorageError> for AttendanceError {
    fn from(err: StorageError) -> Self {
        AttendanceError::storage(err.to_string())
    }
}

/// Port for loading and saving the attendance document
#[async_trait]
pub trait DocumentStorage: Send + Sync {
    /// Load the document
    ///
    /// # Returns
    /// The stored document, or an empty one if nothing has been saved yet
    ///
    /// # Errors
    /// Returns `StorageError` if the stored data cannot be read or parsed
    async fn load(&self) -> Result<AttendanceDocument, StorageError>;

    /// Replace the stored document
    ///
    /// # Errors
    /// Returns `StorageError` if the write fails; the previous document
    /// must remain intact in that case
    async fn save(&self, document: &AttendanceDocument) -> Result<(), StorageError>;
}
