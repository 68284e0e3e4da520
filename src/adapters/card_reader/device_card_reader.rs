//! Device-file card reader.
//!
//! USB and serial stripe readers show up as character devices (for example
//! `/dev/ttyUSB0`). The device is opened read-only and read in fixed-size
//! chunks; whatever each read returns is emitted as one chunk.

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use std::path::{Path, PathBuf};
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::ports::{CardChunkStream, CardReadError, CardReader};

/// Default read size; one Track 1 swipe fits comfortably.
pub const DEFAULT_CHUNK_SIZE: usize = 256;

/// Card reader backed by a device path.
#[derive(Debug, Clone)]
pub struct DeviceCardReader {
    path: PathBuf,
    chunk_size: usize,
}

impl DeviceCardReader {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CardReader for DeviceCardReader {
    async fn open(&self) -> Result<CardChunkStream, CardReadError> {
        let file = tokio::fs::File::open(&self.path)
            .await
            .map_err(|e| CardReadError::OpenFailed(format!("{}: {}", self.path.display(), e)))?;
        tracing::info!(device = %self.path.display(), "card reader opened");
        Ok(chunk_stream(file, self.chunk_size))
    }
}

/// Turns any async byte source into a stream of read-sized chunks.
///
/// The stream ends at EOF. A read error is yielded once, then the stream
/// ends.
pub fn chunk_stream<R>(reader: R, chunk_size: usize) -> CardChunkStream
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let chunk_size = chunk_size.max(1);
    stream::unfold(Some(reader), move |state| async move {
        let mut reader = state?;
        let mut buf = vec![0u8; chunk_size];
        match reader.read(&mut buf).await {
            Ok(0) => None,
            Ok(n) => {
                buf.truncate(n);
                Some((Ok(buf), Some(reader)))
            }
            Err(e) => Some((Err(CardReadError::ReadFailed(e.to_string())), None)),
        }
    })
    .boxed()
}
