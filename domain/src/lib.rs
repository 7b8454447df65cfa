//! Domain layer for stock-advisor
//!
//! This crate contains the core types and algorithms of the advisory client.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Advisory request
//!
//! A budget, a risk profile and a [`MarketSnapshot`] are combined into an
//! [`AdvisoryRequest`] that is posted to the advisory endpoint.
//!
//! ## Stream decoding
//!
//! The endpoint streams its answer as `data: ` frames. [`FrameDecoder`] turns
//! arbitrary byte chunks into lines and [`DeltaAssembler`] turns lines into
//! text fragments.
//!
//! ## Session state
//!
//! [`SessionState`] is the single observable result: phase, text so far and
//! the last error.

pub mod advisory;
pub mod core;
pub mod market;
pub mod session;
pub mod stream;

// Re-export commonly used types
pub use advisory::{
    request::{AdvisoryRequest, ChatMessage, Role, default_question},
    value_objects::{Budget, DEFAULT_BUDGET, RiskProfile},
};
pub use core::error::DomainError;
pub use market::entities::{MarketSnapshot, SnapshotSource, StockQuote};
pub use session::state::{SessionId, SessionPhase, SessionState};
pub use stream::{
    decoder::{Frame, FrameDecoder},
    delta::{DATA_PREFIX, DONE_SENTINEL, DeltaAssembler, DeltaEvent, MalformedPayload},
};
