//! Runner that reports commands without spawning them.

use std::sync::Mutex;

use tracing::info;

use super::{CommandRunner, CommandSpec};
use crate::error::Result;

/// Used for `--dry-run`: every command "succeeds" and is remembered.
#[derive(Debug, Default)]
pub struct DryRunRunner {
    planned: Mutex<Vec<CommandSpec>>,
}

impl DryRunRunner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands that would have run, in order.
    pub fn planned(&self) -> Vec<CommandSpec> {
        self.planned.lock().unwrap().clone()
    }
}

impl CommandRunner for DryRunRunner {
    fn run(&self, command: &CommandSpec) -> Result<()> {
        info!(%command, "Dry run: would run command");
        self.planned.lock().unwrap().push(command.clone());
        Ok(())
    }
}
