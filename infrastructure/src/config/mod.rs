//! Configuration file loading for stock-advisor
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `STOCK_ADVISOR_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./advisor.toml` or `./.advisor.toml`
//! 4. Global: `$XDG_CONFIG_HOME/stock-advisor/config.toml`
//! 5. Default values

mod file_config;
mod issue;
mod loader;

pub use file_config::{FileAdvisorConfig, FileApiConfig, FileConfig, FileOutputConfig};
pub use issue::{ConfigIssue, Severity};
pub use loader::{ConfigLoader, ENV_PREFIX};
