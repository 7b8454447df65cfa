//! Validated user inputs for an advisory request

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Budget used when the user does not provide one.
pub const DEFAULT_BUDGET: &str = "100000";

/// Investment budget, kept as the decimal text the user typed (Value Object)
///
/// The advisory endpoint receives the text verbatim, so no rounding or
/// reformatting happens here; construction only checks that the text
/// denotes a finite, positive amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Budget(String);

impl Budget {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Budget {
    fn default() -> Self {
        Budget(DEFAULT_BUDGET.to_string())
    }
}

impl std::str::FromStr for Budget {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0.0 => Ok(Budget(trimmed.to_string())),
            _ => Err(DomainError::InvalidBudget(s.to_string())),
        }
    }
}

impl TryFrom<String> for Budget {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Budget> for String {
    fn from(budget: Budget) -> Self {
        budget.0
    }
}

impl std::fmt::Display for Budget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Risk tolerance of the investor (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskProfile {
    Conservative,
    #[default]
    Moderate,
    Aggressive,
}

impl RiskProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskProfile::Conservative => "conservative",
            RiskProfile::Moderate => "moderate",
            RiskProfile::Aggressive => "aggressive",
        }
    }

    pub fn all() -> [RiskProfile; 3] {
        [
            RiskProfile::Conservative,
            RiskProfile::Moderate,
            RiskProfile::Aggressive,
        ]
    }
}

impl std::fmt::Display for RiskProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RiskProfile {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "conservative" => Ok(RiskProfile::Conservative),
            "moderate" => Ok(RiskProfile::Moderate),
            "aggressive" => Ok(RiskProfile::Aggressive),
            _ => Err(DomainError::InvalidRiskProfile(s.to_string())),
        }
    }
}
