//! Infrastructure layer for stock-advisor
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod advisor;
pub mod config;
pub mod market;

// Re-export commonly used types
pub use advisor::transport::HttpAdvisoryTransport;
pub use config::{
    ConfigIssue, ConfigLoader, FileAdvisorConfig, FileApiConfig, FileConfig, FileOutputConfig,
    Severity,
};
pub use market::{file_provider::FileMarketDataProvider, http_provider::HttpMarketDataProvider};
