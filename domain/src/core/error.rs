//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid budget '{0}': expected a positive amount")]
    InvalidBudget(String),

    #[error("Invalid risk profile '{0}': expected conservative, moderate or aggressive")]
    InvalidRiskProfile(String),
}
