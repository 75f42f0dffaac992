//! Presentation layer for mcp-conductor
//!
//! This crate contains CLI definitions, the terminal console adapter,
//! transcript formatting and the run progress reporter.

pub mod cli;
pub mod console;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use console::TerminalConsole;
pub use output::RunFormatter;
pub use progress::ConsoleRunReporter;
