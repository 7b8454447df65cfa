//! Terminal output: static formatting and live stream printing

pub mod console;
pub mod stream;
