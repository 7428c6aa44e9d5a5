//! External process execution.
//!
//! The installer step only needs "run this command with the terminal
//! attached and fail on a non-zero exit". `CommandRunner` captures that so
//! the workflow can be driven with a recording fake in tests.

mod dry_run;
pub mod mock;
mod system;

pub use dry_run::DryRunRunner;
pub use system::SystemRunner;

use std::fmt;

use serde::Serialize;

use crate::error::Result;

/// A program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Runs a command to completion with inherited standard I/O.
pub trait CommandRunner {
    /// Run `command` and wait for it.
    ///
    /// # Errors
    ///
    /// Returns an error if the program cannot be found or started, or if it
    /// exits with a non-zero status.
    fn run(&self, command: &CommandSpec) -> Result<()>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, command: &CommandSpec) -> Result<()> {
        (**self).run(command)
    }
}
