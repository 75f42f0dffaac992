//! Progress reporting for a pipeline run

use crate::output::formatter::RunFormatter;
use colored::Colorize;
use conductor_application::RunProgressNotifier;
use conductor_domain::{CallResult, RunSummary, ToolCall, ToolDescriptor};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Reports run progress to the terminal, with a spinner while a call is in flight
pub struct ConsoleRunReporter {
    spinner: Mutex<Option<ProgressBar>>,
    show_spinner: bool,
}

impl ConsoleRunReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
            show_spinner: true,
        }
    }

    /// Set whether to animate a spinner during tool calls
    pub fn with_spinner(mut self, show: bool) -> Self {
        self.show_spinner = show;
        self
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn finish_spinner(&self) {
        let spinner = self
            .spinner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take();
        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }
    }
}

impl Default for ConsoleRunReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl RunProgressNotifier for ConsoleRunReporter {
    fn on_tools_discovered(&self, tools: &[ToolDescriptor]) {
        let mut lines = RunFormatter::tool_list(tools).into_iter();
        if let Some(total) = lines.next() {
            println!("{}", total.bold());
        }
        for line in lines {
            println!("{}", line);
        }
    }

    fn on_batch_start(&self, count: usize) {
        println!("{}", RunFormatter::batch_banner(count).cyan().bold());
    }

    fn on_tool_skipped(&self, index: usize, tool_name: &str) {
        println!("{}", RunFormatter::skipped(index, tool_name).yellow());
    }

    fn on_attempt_start(&self, index: usize, call: &ToolCall, attempt: u32, max: u32) {
        println!("{}", RunFormatter::calling(index, call, attempt, max));

        if self.show_spinner {
            let pb = ProgressBar::new_spinner();
            pb.set_style(Self::spinner_style());
            pb.set_message(format!("Waiting for {}...", call.tool_name));
            pb.enable_steady_tick(Duration::from_millis(100));
            *self.spinner.lock().unwrap_or_else(|e| e.into_inner()) = Some(pb);
        }
    }

    fn on_call_complete(&self, _index: usize, _tool_name: &str) {
        self.finish_spinner();
    }

    fn on_attempt_failed(&self, index: usize, tool_name: &str, attempt: u32, max: u32, message: &str) {
        println!(
            "{}",
            RunFormatter::attempt_error(index, tool_name, attempt, max, message).red()
        );
        println!("{}", RunFormatter::retrying(index, tool_name).dimmed());
    }

    fn on_tool_failed(&self, index: usize, tool_name: &str, max: u32, exception: Option<&str>) {
        println!(
            "{}",
            RunFormatter::failed(index, tool_name, max, exception).red().bold()
        );
    }

    fn on_tool_result(&self, index: usize, tool_name: &str, result: &CallResult) {
        let mut lines = RunFormatter::result(index, tool_name, result).into_iter();
        if let Some(header) = lines.next() {
            println!("{}", header.green().bold());
        }
        for line in lines {
            println!("{}", line);
        }
    }

    fn on_run_complete(&self, summary: &RunSummary) {
        if summary.is_empty() {
            return;
        }
        let lines = RunFormatter::summary(summary);
        let last = lines.len() - 1;
        for (i, line) in lines.iter().enumerate() {
            if i == 0 || i == last {
                println!("{}", line.bold());
            } else {
                println!("{}", line);
            }
        }
    }
}
