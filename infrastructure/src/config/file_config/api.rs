//! Endpoint configuration from TOML (`[api]` section)

use super::super::issue::ConfigIssue;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw endpoint configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    /// Base URL of the backend, e.g. `http://localhost:8000`
    pub base_url: String,
    /// Path of the advisory streaming endpoint
    pub advisor_path: String,
    /// Path of the market snapshot endpoint
    pub stocks_path: String,
    /// Timeout for the market snapshot request (the advisory stream has none)
    pub request_timeout_secs: u64,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            advisor_path: "/api/stocks/advisor".to_string(),
            stocks_path: "/api/stocks".to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl FileApiConfig {
    pub fn advisor_url(&self) -> String {
        join_url(&self.base_url, &self.advisor_path)
    }

    pub fn stocks_url(&self) -> String {
        join_url(&self.base_url, &self.stocks_path)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        match reqwest::Url::parse(&self.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => issues.push(ConfigIssue::error(
                "api.base_url",
                format!("unsupported scheme '{}', expected http or https", url.scheme()),
            )),
            Err(e) => issues.push(ConfigIssue::error(
                "api.base_url",
                format!("'{}' is not a valid URL: {}", self.base_url, e),
            )),
        }

        if self.request_timeout_secs == 0 {
            issues.push(ConfigIssue::error(
                "api.request_timeout_secs",
                "timeout cannot be 0",
            ));
        }

        issues
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
