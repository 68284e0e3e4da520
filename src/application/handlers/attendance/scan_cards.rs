//! ScanCardsHandler - Runs check-in for every swipe from a card reader.
//!
//! The target session is fixed for the whole scan. Each chunk is decoded
//! on its own; a bad swipe or a missing target is logged and counted, and
//! the scan carries on with the next chunk.

use futures::StreamExt;
use std::sync::Arc;

use super::CheckInHandler;
use crate::domain::attendance::AttendanceError;
use crate::domain::foundation::{ClassId, ProfessorId, SessionNumber};
use crate::ports::{CardReadError, CardReader};

/// Command to scan cards into one session until the reader closes.
#[derive(Debug, Clone, Copy)]
pub struct ScanCardsCommand {
    pub professor_id: ProfessorId,
    pub class_id: ClassId,
    pub session_number: SessionNumber,
}

/// How a scan ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanTermination {
    /// The reader reached end of stream.
    Closed,
    /// The reader failed mid-scan.
    ReadError(CardReadError),
}

/// Counters for a finished scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    pub chunks: usize,
    pub checked_in: usize,
    pub unreadable: usize,
    pub failed: usize,
    pub termination: ScanTermination,
}

pub struct ScanCardsHandler {
    reader: Arc<dyn CardReader>,
    check_in: CheckInHandler,
}

impl ScanCardsHandler {
    pub fn new(reader: Arc<dyn CardReader>, check_in: CheckInHandler) -> Self {
        Self { reader, check_in }
    }

    /// Opens the reader and consumes it to the end.
    ///
    /// # Errors
    ///
    /// Returns `CardReadError` only if the reader cannot be opened. Errors
    /// after that are reported in the [`ScanReport`].
    pub async fn handle(&self, cmd: ScanCardsCommand) -> Result<ScanReport, CardReadError> {
        let mut chunks = self.reader.open().await?;
        let mut report = ScanReport {
            chunks: 0,
            checked_in: 0,
            unreadable: 0,
            failed: 0,
            termination: ScanTermination::Closed,
        };

        tracing::info!(
            professor_id = %cmd.professor_id,
            class_id = %cmd.class_id,
            session_number = %cmd.session_number,
            "card scan started"
        );

        while let Some(item) = chunks.next().await {
            let chunk = match item {
                Ok(chunk) => chunk,
                Err(err) => {
                    tracing::error!(error = %err, "card reader failed, stopping scan");
                    report.termination = ScanTermination::ReadError(err);
                    break;
                }
            };
            report.chunks += 1;

            match self
                .check_in
                .handle_bytes(&chunk, cmd.professor_id, cmd.class_id, cmd.session_number)
                .await
            {
                Ok(_) => report.checked_in += 1,
                Err(AttendanceError::InvalidCardData) => {
                    tracing::warn!(bytes = chunk.len(), "unreadable swipe, please swipe again");
                    report.unreadable += 1;
                }
                Err(err) => {
                    tracing::warn!(error = %err, "check-in failed");
                    report.failed += 1;
                }
            }
        }

        tracing::info!(
            chunks = report.chunks,
            checked_in = report.checked_in,
            unreadable = report.unreadable,
            failed = report.failed,
            "card scan finished"
        );
        Ok(report)
    }
}
