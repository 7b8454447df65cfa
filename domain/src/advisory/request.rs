//! Advisory request payload

use super::value_objects::{Budget, RiskProfile};
use crate::market::entities::{MarketSnapshot, StockQuote};
use serde::{Deserialize, Serialize};

/// Role of a message in the advisory conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A message in the advisory conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// The question asked when the user does not type one.
pub fn default_question(budget: &Budget, risk: RiskProfile) -> String {
    format!(
        "Based on the current market data, suggest an investment strategy for a budget of Rs.{} \
         with {} risk tolerance. Recommend specific stocks with allocation percentages.",
        budget, risk
    )
}

/// Request sent to the advisory streaming endpoint.
///
/// Immutable once built; the controller clones nothing out of it and the
/// transport only borrows it for serialisation. On the wire it becomes
/// `{ "stocks": [...], "budget": "...", "riskLevel": "...", "messages": [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvisoryRequest {
    #[serde(rename = "stocks")]
    market_snapshot: Vec<StockQuote>,
    budget: Budget,
    #[serde(rename = "riskLevel")]
    risk_profile: RiskProfile,
    #[serde(rename = "messages")]
    conversation: Vec<ChatMessage>,
}

impl AdvisoryRequest {
    /// Build a request carrying the default question for `budget` and `risk`.
    pub fn new(snapshot: MarketSnapshot, budget: Budget, risk: RiskProfile) -> Self {
        let question = default_question(&budget, risk);
        Self {
            market_snapshot: snapshot.into_quotes(),
            budget,
            risk_profile: risk,
            conversation: vec![ChatMessage::user(question)],
        }
    }

    /// Replace the default question with a custom one.
    ///
    /// Blank questions are ignored so the default prompt stays in place.
    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        let question = question.into();
        if !question.trim().is_empty() {
            self.conversation = vec![ChatMessage::user(question.trim())];
        }
        self
    }

    pub fn market_snapshot(&self) -> &[StockQuote] {
        &self.market_snapshot
    }

    pub fn budget(&self) -> &Budget {
        &self.budget
    }

    pub fn risk_profile(&self) -> RiskProfile {
        self.risk_profile
    }

    pub fn conversation(&self) -> &[ChatMessage] {
        &self.conversation
    }
}
