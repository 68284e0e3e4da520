//! Card reader port.
//!
//! A card reader delivers a lazy, unbounded stream of raw byte chunks.
//! Chunk boundaries follow the device's reads and need not line up with
//! track boundaries. End of stream is a normal close; dropping the
//! stream cancels the read.

use async_trait::async_trait;
use futures::stream::BoxStream;

/// Errors raised by the card-reading transport.
///
/// These are distinct from undecodable card data, which is reported per
/// swipe by the check-in path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CardReadError {
    #[error("Failed to open card reader: {0}")]
    OpenFailed(String),

    #[error("Card reader read failed: {0}")]
    ReadFailed(String),
}

/// Stream of raw chunks read from the device.
pub type CardChunkStream = BoxStream<'static, Result<Vec<u8>, CardReadError>>;

/// Port for opening a card reader.
#[async_trait]
pub trait CardReader: Send + Sync {
    /// Open the device and start streaming chunks.
    async fn open(&self) -> Result<CardChunkStream, CardReadError>;
}
