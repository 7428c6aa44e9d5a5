//! Recording runner for unit testing.

use std::sync::Mutex;

use tracing::trace;

use super::{CommandRunner, CommandSpec};
use crate::error::{Result, ScaffoldError};

/// Records commands instead of running them.
///
/// Optionally fails on the Nth call (0-based) to simulate a non-zero exit.
#[derive(Default)]
pub struct RecordingRunner {
    calls: Mutex<Vec<CommandSpec>>,
    fail_on_call: Option<usize>,
}

impl RecordingRunner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the `index`-th call fail with a non-zero exit.
    #[must_use]
    pub fn failing_on(mut self, index: usize) -> Self {
        self.fail_on_call = Some(index);
        self
    }

    /// All commands received, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<CommandSpec> {
        self.calls.lock().unwrap().clone()
    }

    /// Commands rendered as strings, for terse assertions.
    #[must_use]
    pub fn call_lines(&self) -> Vec<String> {
        self.calls().iter().map(ToString::to_string).collect()
    }

    /// Assert no command was run.
    ///
    /// # Panics
    ///
    /// Panics if any command was recorded.
    pub fn assert_not_called(&self) {
        let calls = self.call_lines();
        assert!(calls.is_empty(), "Expected no commands, but found: {calls:#?}");
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &CommandSpec) -> Result<()> {
        trace!(%command, "Recording command");
        let mut calls = self.calls.lock().unwrap();
        let index = calls.len();
        calls.push(command.clone());

        if self.fail_on_call == Some(index) {
            return Err(ScaffoldError::InstallerFailed {
                command: command.to_string(),
                status: "exit status: 1".to_string(),
            });
        }
        Ok(())
    }
}
