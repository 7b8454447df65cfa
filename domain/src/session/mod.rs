//! Advisory session domain.
//!
//! - [`state::SessionState`]: the observable result of one advisory request
//! - [`state::SessionPhase`]: idle / streaming / settled / failed

pub mod state;
