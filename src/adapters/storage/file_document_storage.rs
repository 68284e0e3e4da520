//! File-based Document Storage Adapter
//!
//! Stores the attendance document as a single pretty-printed JSON file.
//! Writes go to a sibling temp file which is then renamed over the target,
//! so a failed write never leaves a truncated document behind.

use async_trait::async_trait;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::attendance::AttendanceDocument;
use crate::ports::{DocumentStorage, StorageError};

/// File-based storage for the attendance document
#[derive(Debug, Clone)]
pub struct FileDocumentStorage {
    path: PathBuf,
}

impl FileDocumentStorage {
    /// Create a storage backed by the given JSON file
    ///
    /// The file does not need to exist yet.
    ///
    /// # Example
    /// ```ignore
    /// let storage = FileDocumentStorage::new("./data/db.json");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("db.json"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn ensure_parent_dir(&self) -> Result<(), StorageError> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::IoError(e.to_string())),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl DocumentStorage for FileDocumentStorage {
    async fn load(&self) -> Result<AttendanceDocument, StorageError> {
        let json = match fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "no attendance document yet, starting empty");
                return Ok(AttendanceDocument::default());
            }
            Err(e) => return Err(StorageError::IoError(e.to_string())),
        };

        let document: AttendanceDocument = serde_json::from_str(&json)
            .map_err(|e| StorageError::DeserializationFailed(e.to_string()))?;

        document
            .validate()
            .map_err(|e| StorageError::InvalidDocument(e.to_string()))?;

        Ok(document)
    }

    async fn save(&self, document: &AttendanceDocument) -> Result<(), StorageError> {
        self.ensure_parent_dir().await?;

        let json = serde_json::to_string_pretty(document)
            .map_err(|e| StorageError::SerializationFailed(e.to_string()))?;

        let temp = self.temp_path();
        fs::write(&temp, json)
            .await
            .map_err(|e| StorageError::IoError(e.to_string()))?;

        if let Err(e) = fs::rename(&temp, &self.path).await {
            let _ = fs::remove_file(&temp).await;
            return Err(StorageError::IoError(e.to_string()));
        }

        Ok(())
    }
}
