//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly; conversion into domain and application
//! types happens through the `parse_*` / `to_*` helpers.

mod advisor;
mod api;
mod output;

pub use advisor::FileAdvisorConfig;
pub use api::FileApiConfig;
pub use output::FileOutputConfig;

use super::issue::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Backend endpoints
    pub api: FileApiConfig,
    /// Advisory defaults
    pub advisor: FileAdvisorConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.api.validate();
        issues.extend(self.advisor.validate());
        issues
    }
}
