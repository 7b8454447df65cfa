//! Market data domain.
//!
//! The advisory core treats market data as opaque input: a snapshot of
//! instrument records that is embedded verbatim into the advisory request.
//!
//! - [`entities::StockQuote`]: one instrument record
//! - [`entities::MarketSnapshot`]: ordered quotes plus where they came from

pub mod entities;
