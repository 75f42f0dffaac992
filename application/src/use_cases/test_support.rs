//! In-memory port doubles shared by use case tests.

use crate::ports::console::{ConsoleError, ConsolePort};
use crate::ports::tool_host::{HostError, ToolHostPort};
use async_trait::async_trait;
use conductor_domain::{CallResult, ContentBlock, ToolCall, ToolDescriptor};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

/// Console fed from a fixed queue of input lines.
///
/// Once the queue is drained, `read_line` reports `Closed`.
pub struct ScriptedConsole {
    input: Mutex<VecDeque<String>>,
    output: Mutex<Vec<String>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: Mutex::new(lines.into_iter().map(Into::into).collect()),
            output: Mutex::new(Vec::new()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn output(&self) -> Vec<String> {
        self.output.lock().unwrap().clone()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn contains_line(&self, line: &str) -> bool {
        self.output.lock().unwrap().iter().any(|l| l == line)
    }

    pub fn count_lines(&self, line: &str) -> usize {
        self.output.lock().unwrap().iter().filter(|l| *l == line).count()
    }

    pub fn remaining_input(&self) -> usize {
        self.input.lock().unwrap().len()
    }
}

#[async_trait]
impl ConsolePort for ScriptedConsole {
    async fn read_line(&self, prompt: &str) -> Result<String, ConsoleError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.input
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(ConsoleError::Closed)
    }

    fn print_line(&self, line: &str) {
        self.output.lock().unwrap().push(line.to_string());
    }
}

/// Scripted reply for one `call_tool`.
pub enum Reply {
    Ok(CallResult),
    Err(HostError),
}

impl Reply {
    pub fn text(text: &str) -> Self {
        Reply::Ok(CallResult::success(vec![ContentBlock::text(text)]))
    }

    pub fn soft_failure(text: &str) -> Self {
        Reply::Ok(CallResult::error(vec![ContentBlock::text(text)]))
    }

    pub fn exception(message: &str) -> Self {
        Reply::Err(HostError::ConnectionError(message.to_string()))
    }
}

/// Tool host with a fixed tool list and per-tool scripted replies.
///
/// A tool with no scripted replies left answers with a plain "ok" result.
pub struct FakeToolHost {
    tools: Vec<ToolDescriptor>,
    replies: Mutex<HashMap<String, VecDeque<Reply>>>,
    calls: Mutex<Vec<ToolCall>>,
}

impl FakeToolHost {
    pub fn new(tools: Vec<ToolDescriptor>) -> Self {
        Self {
            tools,
            replies: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Host advertising schema-less tools with the given names.
    pub fn with_names(names: &[&str]) -> Self {
        Self::new(names.iter().map(|n| ToolDescriptor::new(*n)).collect())
    }

    pub fn script(self, tool_name: &str, replies: Vec<Reply>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .insert(tool_name.to_string(), replies.into());
        self
    }

    pub fn calls(&self) -> Vec<ToolCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, tool_name: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.tool_name == tool_name)
            .count()
    }
}

#[async_trait]
impl ToolHostPort for FakeToolHost {
    async fn list_tools(&self) -> Result<Vec<ToolDescriptor>, HostError> {
        Ok(self.tools.clone())
    }

    async fn call_tool(&self, call: &ToolCall) -> Result<CallResult, HostError> {
        self.calls.lock().unwrap().push(call.clone());
        let reply = self
            .replies
            .lock()
            .unwrap()
            .get_mut(&call.tool_name)
            .and_then(|queue| queue.pop_front());
        match reply {
            Some(Reply::Ok(result)) => Ok(result),
            Some(Reply::Err(e)) => Err(e),
            None => Ok(CallResult::success(vec![ContentBlock::text("ok")])),
        }
    }
}
