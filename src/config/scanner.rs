//! Card scanner configuration
//!
//! When present, the binary reads swipes from a stripe reader and checks
//! each one into a fixed session.

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::adapters::card_reader::DEFAULT_CHUNK_SIZE;
use crate::application::handlers::ScanCardsCommand;
use crate::domain::foundation::{ClassId, ProfessorId, SessionNumber};

/// Card scanner configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScannerConfig {
    /// Device to read from, e.g. `/dev/ttyUSB0`
    pub device: PathBuf,

    /// Bytes requested per read
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Target session for every swipe
    pub professor_id: u32,
    pub class_id: u32,
    pub session_number: u32,
}

impl ScannerConfig {
    /// The scan target as a command.
    pub fn command(&self) -> ScanCardsCommand {
        ScanCardsCommand {
            professor_id: ProfessorId::new(self.professor_id),
            class_id: ClassId::new(self.class_id),
            session_number: SessionNumber::new(self.session_number),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.device.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("scanner.device"));
        }
        if self.chunk_size == 0 || self.chunk_size > 64 * 1024 {
            return Err(ValidationError::InvalidChunkSize);
        }
        Ok(())
    }
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}
