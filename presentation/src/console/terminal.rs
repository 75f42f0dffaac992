//! Line-oriented terminal console.
//!
//! Implements [`ConsolePort`] over stdin/stdout. Reads block the calling
//! task, which is fine here: nothing else runs while the human is typing.

use async_trait::async_trait;
use conductor_application::{ConsoleError, ConsolePort};
use std::io::{self, BufRead, Write};
use std::sync::{Mutex, MutexGuard};

type Input = Box<dyn BufRead + Send>;
type Output = Box<dyn Write + Send>;

/// Console on a line reader and a writer (stdin/stdout by default).
pub struct TerminalConsole {
    input: Mutex<Input>,
    output: Mutex<Output>,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self::with_streams(
            Box::new(io::BufReader::new(io::stdin())),
            Box::new(io::stdout()),
        )
    }

    pub fn with_streams(input: Input, output: Output) -> Self {
        Self {
            input: Mutex::new(input),
            output: Mutex::new(output),
        }
    }

    fn output(&self) -> MutexGuard<'_, Output> {
        self.output.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

/// Drop the line terminator, keeping any other whitespace.
fn strip_newline(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}

#[async_trait]
impl ConsolePort for TerminalConsole {
    async fn read_line(&self, prompt: &str) -> Result<String, ConsoleError> {
        {
            let mut out = self.output();
            write!(out, "{}", prompt)
                .and_then(|_| out.flush())
                .map_err(|e| ConsoleError::Io(format!("Failed to write prompt: {}", e)))?;
        }

        let mut line = String::new();
        let read = self
            .input
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .read_line(&mut line)
            .map_err(|e| ConsoleError::Io(format!("Failed to read input: {}", e)))?;

        if read == 0 {
            return Err(ConsoleError::Closed);
        }
        strip_newline(&mut line);
        Ok(line)
    }

    fn print_line(&self, line: &str) {
        let mut out = self.output();
        let _ = writeln!(out, "{}", line).and_then(|_| out.flush());
    }
}
