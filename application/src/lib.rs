//! Application layer for stock-advisor
//!
//! This crate contains the advisory session use case and the port
//! definitions it drives. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{AdvisoryParams, DEFAULT_FAILURE_MESSAGE};
pub use ports::{
    advisory_transport::{AdvisoryTransport, ChunkStream, TransportError},
    market_data::{MarketDataError, MarketDataProvider},
};
pub use use_cases::advisory_session::AdvisorySessionController;
