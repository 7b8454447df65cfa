//! Application-level configuration.
//!
//! - [`AdvisoryParams`]: input defaults and the failure message shown to users

pub mod advisory_params;

pub use advisory_params::{AdvisoryParams, DEFAULT_FAILURE_MESSAGE};
