//! Advisory parameters: user-facing defaults and messages.

use advisor_domain::{Budget, RiskProfile};

/// Message shown in place of the result when a session fails.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Failed to get advice. Please try again.";

/// Defaults applied when the user leaves an input empty, plus the
/// static fallback message for failed sessions.
#[derive(Debug, Clone, PartialEq)]
pub struct AdvisoryParams {
    pub default_budget: Budget,
    pub default_risk: RiskProfile,
    pub failure_message: String,
}

impl Default for AdvisoryParams {
    fn default() -> Self {
        Self {
            default_budget: Budget::default(),
            default_risk: RiskProfile::default(),
            failure_message: DEFAULT_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl AdvisoryParams {
    pub fn with_default_budget(mut self, budget: Budget) -> Self {
        self.default_budget = budget;
        self
    }

    pub fn with_default_risk(mut self, risk: RiskProfile) -> Self {
        self.default_risk = risk;
        self
    }

    pub fn with_failure_message(mut self, message: impl Into<String>) -> Self {
        self.failure_message = message.into();
        self
    }

    /// Use `budget` if given, the configured default otherwise.
    pub fn budget_or_default(&self, budget: Option<Budget>) -> Budget {
        budget.unwrap_or_else(|| self.default_budget.clone())
    }

    /// Use `risk` if given, the configured default otherwise.
    pub fn risk_or_default(&self, risk: Option<RiskProfile>) -> RiskProfile {
        risk.unwrap_or(self.default_risk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = AdvisoryParams::default();
        assert_eq!(params.default_budget.as_str(), "100000");
        assert_eq!(params.default_risk, RiskProfile::Moderate);
        assert_eq!(params.failure_message, DEFAULT_FAILURE_MESSAGE);
    }

    #[test]
    fn test_explicit_values_win_over_defaults() {
        let params = AdvisoryParams::default()
            .with_default_budget("5000".parse().unwrap())
            .with_default_risk(RiskProfile::Conservative);

        assert_eq!(params.budget_or_default(None).as_str(), "5000");
        assert_eq!(
            params
                .budget_or_default(Some("9000".parse().unwrap()))
                .as_str(),
            "9000"
        );
        assert_eq!(params.risk_or_default(None), RiskProfile::Conservative);
        assert_eq!(
            params.risk_or_default(Some(RiskProfile::Aggressive)),
            RiskProfile::Aggressive
        );
    }
}
