//! Advisory request domain.
//!
//! Everything the advisory endpoint needs to produce a recommendation:
//! the user's budget and risk appetite, the market snapshot, and the
//! conversation so far.
//!
//! - [`value_objects::Budget`] / [`value_objects::RiskProfile`]: validated user inputs
//! - [`request::AdvisoryRequest`]: the immutable request payload

pub mod request;
pub mod value_objects;
