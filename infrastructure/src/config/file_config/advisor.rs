//! Advisory defaults from TOML (`[advisor]` section)

use super::super::issue::ConfigIssue;
use advisor_application::AdvisoryParams;
use advisor_domain::{Budget, DEFAULT_BUDGET, RiskProfile};
use serde::{Deserialize, Serialize};

/// Raw advisory configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAdvisorConfig {
    /// Default budget (decimal text)
    pub budget: String,
    /// Default risk profile: "conservative" | "moderate" | "aggressive"
    pub risk: String,
    /// Message shown when a session fails
    pub failure_message: Option<String>,
}

impl Default for FileAdvisorConfig {
    fn default() -> Self {
        Self {
            budget: DEFAULT_BUDGET.to_string(),
            risk: RiskProfile::default().to_string(),
            failure_message: None,
        }
    }
}

impl FileAdvisorConfig {
    /// Parse the budget, falling back to the built-in default on failure.
    pub fn parse_budget(&self) -> (Budget, Vec<ConfigIssue>) {
        match self.budget.parse::<Budget>() {
            Ok(budget) => (budget, vec![]),
            Err(_) => (
                Budget::default(),
                vec![ConfigIssue::warning(
                    "advisor.budget",
                    format!(
                        "'{}' is not a positive amount, falling back to '{}'",
                        self.budget, DEFAULT_BUDGET
                    ),
                )],
            ),
        }
    }

    /// Parse the risk profile, falling back to `moderate` on failure.
    pub fn parse_risk(&self) -> (RiskProfile, Vec<ConfigIssue>) {
        match self.risk.parse::<RiskProfile>() {
            Ok(risk) => (risk, vec![]),
            Err(_) => (
                RiskProfile::default(),
                vec![ConfigIssue::warning(
                    "advisor.risk",
                    format!(
                        "unknown value '{}', falling back to '{}'",
                        self.risk,
                        RiskProfile::default()
                    ),
                )],
            ),
        }
    }

    /// Build application parameters; parse failures fall back to defaults.
    pub fn to_params(&self) -> AdvisoryParams {
        let mut params = AdvisoryParams::default()
            .with_default_budget(self.parse_budget().0)
            .with_default_risk(self.parse_risk().0);
        if let Some(message) = self
            .failure_message
            .as_deref()
            .filter(|m| !m.trim().is_empty())
        {
            params = params.with_failure_message(message);
        }
        params
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.parse_budget().1;
        issues.extend(self.parse_risk().1);
        issues
    }
}
