//! In-Memory Document Storage Adapter
//!
//! Keeps the serialized document in memory. Useful for testing and
//! development; `fail_saves` lets tests exercise the rollback path.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::attendance::AttendanceDocument;
use crate::ports::{DocumentStorage, StorageError};

/// In-memory storage for the attendance document
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentStorage {
    json: Arc<RwLock<Option<String>>>,
    fail_saves: Arc<AtomicBool>,
    save_count: Arc<AtomicUsize>,
}

impl InMemoryDocumentStorage {
    /// Create an empty storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage pre-seeded with a document
    pub fn with_document(document: &AttendanceDocument) -> Result<Self, StorageError> {
        let json = serde_json::to_string(document)
            .map_err(|e| StorageError::SerializationFailed(e.to_string()))?;
        Ok(Self {
            json: Arc::new(RwLock::new(Some(json))),
            ..Self::default()
        })
    }

    /// Make subsequent saves fail (or succeed again)
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.save_count.load(Ordering::SeqCst)
    }

    /// The last saved JSON, if any
    pub async fn snapshot(&self) -> Option<String> {
        self.json.read().await.clone()
    }
}

#[async_trait]
impl DocumentStorage for InMemoryDocumentStorage {
    async fn load(&self) -> Result<AttendanceDocument, StorageError> {
        let json = self.json.read().await;
        match json.as_deref() {
            None => Ok(AttendanceDocument::default()),
            Some(json) => {
                let document: AttendanceDocument = serde_json::from_str(json)
                    .map_err(|e| StorageError::DeserializationFailed(e.to_string()))?;
                document
                    .validate()
                    .map_err(|e| StorageError::InvalidDocument(e.to_string()))?;
                Ok(document)
            }
        }
    }

    async fn save(&self, document: &AttendanceDocument) -> Result<(), StorageError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StorageError::IoError("simulated write failure".to_string()));
        }
        let json = serde_json::to_string(document)
            .map_err(|e| StorageError::SerializationFailed(e.to_string()))?;
        *self.json.write().await = Some(json);
        self.save_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
