//! Console port for the line-oriented human interaction surface.
//!
//! Prompts go to an output stream and single-line answers come back from
//! an input stream. There is no timeout: an absent human stalls the run.
//!
//! # Architecture
//!
//! - **Port**: [`ConsolePort`] - defined here in application layer
//! - **Adapter**: `TerminalConsole` - implemented in presentation layer

use async_trait::async_trait;
use thiserror::Error;

/// Error type for console operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConsoleError {
    /// Input stream reached end of file
    #[error("Input stream closed")]
    Closed,

    /// Terminal read/write failure
    #[error("I/O error: {0}")]
    Io(String),
}

/// Port for prompting a human and reading answers.
#[async_trait]
pub trait ConsolePort: Send + Sync {
    /// Print `prompt` without a newline, then read one line.
    ///
    /// The returned line has its terminator stripped but is otherwise
    /// unmodified (no trimming).
    async fn read_line(&self, prompt: &str) -> Result<String, ConsoleError>;

    /// Print one line of transcript text.
    fn print_line(&self, line: &str);
}
