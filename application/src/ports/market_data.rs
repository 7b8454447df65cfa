//! Market data port
//!
//! Source of the instrument snapshot embedded in advisory requests.

use advisor_domain::MarketSnapshot;
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while fetching a market snapshot
#[derive(Error, Debug)]
pub enum MarketDataError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Market data endpoint returned HTTP {status}")]
    Status { status: u16 },

    #[error("Failed to decode market data: {0}")]
    Decode(String),

    #[error("Failed to read market data: {0}")]
    Io(#[from] std::io::Error),
}

/// Provides the current market snapshot
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    async fn snapshot(&self) -> Result<MarketSnapshot, MarketDataError>;
}
