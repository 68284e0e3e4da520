//! Scripted card reader for tests and demos.
//!
//! Replays a fixed list of chunks, optionally ending with a read error.

use async_trait::async_trait;
use futures::stream::{self, StreamExt};

use crate::ports::{CardChunkStream, CardReadError, CardReader};

/// Card reader that yields a predefined sequence of chunks.
#[derive(Debug, Clone, Default)]
pub struct ScriptedCardReader {
    chunks: Vec<Result<Vec<u8>, CardReadError>>,
}

impl ScriptedCardReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one chunk, as if one device read returned it.
    pub fn with_chunk(mut self, chunk: impl Into<Vec<u8>>) -> Self {
        self.chunks.push(Ok(chunk.into()));
        self
    }

    /// Adds a read failure at this point in the sequence.
    pub fn with_read_error(mut self, message: impl Into<String>) -> Self {
        self.chunks
            .push(Err(CardReadError::ReadFailed(message.into())));
        self
    }
}

#[async_trait]
impl CardReader for ScriptedCardReader {
    async fn open(&self) -> Result<CardChunkStream, CardReadError> {
        Ok(stream::iter(self.chunks.clone()).boxed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replays_chunks_in_order() {
        let reader = ScriptedCardReader::new()
            .with_chunk("a")
            .with_read_error("gone");
        let items = reader.open().await.unwrap().collect::<Vec<_>>().await;
        assert_eq!(items[0], Ok(b"a".to_vec()));
        assert!(items[1].is_err());
    }
}
