//! Advisory endpoint adapter
//!
//! Implements [`AdvisoryTransport`](advisor_application::AdvisoryTransport)
//! over HTTP with reqwest.

pub mod transport;
