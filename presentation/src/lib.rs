//! Presentation layer for stock-advisor
//!
//! This crate contains CLI definitions, output formatters,
//! the live stream printer and progress indicators.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
pub use output::stream::StreamPrinter;
pub use progress::reporter::WaitingSpinner;
