//! Advisory transport port
//!
//! Defines how the application layer opens the advisory stream. The adapter
//! owns the network connection; the application only sees raw byte chunks.

use advisor_domain::AdvisoryRequest;
use async_trait::async_trait;
use futures::stream::BoxStream;
use thiserror::Error;

/// Raw body chunks in arrival order. No alignment with lines or characters.
pub type ChunkStream = BoxStream<'static, Result<Vec<u8>, TransportError>>;

/// Errors that end an advisory session
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Advisory endpoint returned HTTP {status}")]
    Status { status: u16 },

    #[error("Advisory endpoint returned no response body")]
    MissingBody,

    #[error("Failed to read response body: {0}")]
    Read(String),

    #[error("Failed to encode request: {0}")]
    Encode(String),
}

/// Opens the advisory stream for a request.
///
/// Dropping the returned stream must release the underlying connection;
/// the session controller relies on that for cancellation.
#[async_trait]
pub trait AdvisoryTransport: Send + Sync {
    /// Send `request` and return the response body once headers arrived.
    ///
    /// Non-success statuses and absent bodies are reported here, before any
    /// chunk is produced.
    async fn open(&self, request: &AdvisoryRequest) -> Result<ChunkStream, TransportError>;
}
