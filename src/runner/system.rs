//! Runner that spawns real processes.

use std::path::PathBuf;
use std::process::Command;

use tracing::{debug, info, instrument};

use super::{CommandRunner, CommandSpec};
use crate::error::{Result, ScaffoldError};

/// Spawns commands in a working directory with the terminal attached.
#[derive(Debug, Clone)]
pub struct SystemRunner {
    working_dir: PathBuf,
}

impl SystemRunner {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
        }
    }
}

impl CommandRunner for SystemRunner {
    #[instrument(skip(self), fields(command = %command, cwd = %self.working_dir.display()))]
    fn run(&self, command: &CommandSpec) -> Result<()> {
        let program = which::which(&command.program).map_err(|e| {
            debug!(error = %e, "Program lookup failed");
            ScaffoldError::InstallerNotFound {
                program: command.program.clone(),
            }
        })?;
        debug!(program = %program.display(), "Resolved program");

        // stdin/stdout/stderr are inherited by default for status().
        let status = Command::new(&program)
            .args(&command.args)
            .current_dir(&self.working_dir)
            .status()
            .map_err(|e| ScaffoldError::InstallerSpawn {
                command: command.to_string(),
                reason: e.to_string(),
            })?;

        if !status.success() {
            return Err(ScaffoldError::InstallerFailed {
                command: command.to_string(),
                status: status.to_string(),
            });
        }

        info!("Command finished");
        Ok(())
    }
}
