//! Market data adapters
//!
//! Implementations of [`MarketDataProvider`](advisor_application::MarketDataProvider):
//!
//! - [`http_provider::HttpMarketDataProvider`]: `GET /api/stocks`
//! - [`file_provider::FileMarketDataProvider`]: a JSON file on disk

pub mod file_provider;
pub mod http_provider;
mod wire;
