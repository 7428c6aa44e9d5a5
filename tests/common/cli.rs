//! CLI test runner with fluent assertions.
//!
//! Runs the compiled `nxs` binary with captured output and a closed stdin,
//! so any prompt that is not answered by a flag fails instead of hanging.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use serde_json::Value;

/// Configuration for CLI test runs.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Environment variables to set for the command.
    pub env_vars: HashMap<String, String>,
    /// Working directory for command execution.
    pub working_dir: Option<PathBuf>,
}

/// Test runner for the `nxs` binary.
///
/// # Example
///
/// ```ignore
/// let cli = CliRunner::new().in_dir(project.path());
/// cli.run(&["--no-install", "--no-folders", "--no-theme"])
///    .assert_success()
///    .assert_stdout_contains("Done.");
/// ```
pub struct CliRunner {
    binary_path: PathBuf,
    config: CliConfig,
}

impl Default for CliRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CliRunner {
    /// Runner for the compiled binary with logging off and color disabled.
    #[must_use]
    pub fn new() -> Self {
        let binary = env!("CARGO_BIN_EXE_nxs");
        Self {
            binary_path: PathBuf::from(binary),
            config: CliConfig::default(),
        }
        .with_env("RUST_LOG", "off")
        .with_env("NO_COLOR", "1")
    }

    /// Add an environment variable for command execution.
    #[must_use]
    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.config
            .env_vars
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Run inside `dir`, with the user config directory pointed inside it.
    #[must_use]
    pub fn in_dir(mut self, dir: &Path) -> Self {
        let xdg = dir.join(".xdg-config");
        self.config.working_dir = Some(dir.to_path_buf());
        self.with_env("XDG_CONFIG_HOME", &xdg.display().to_string())
    }

    /// Execute the command with the given arguments.
    ///
    /// # Panics
    ///
    /// Panics if the command fails to execute.
    #[must_use]
    pub fn run(&self, args: &[&str]) -> CliResult {
        let mut cmd = Command::new(&self.binary_path);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .env_remove("NXS_FORMAT")
            .env_remove("NXS_INSTALLER");

        for (key, value) in &self.config.env_vars {
            cmd.env(key, value);
        }

        if let Some(ref dir) = self.config.working_dir {
            cmd.current_dir(dir);
        }

        let output = cmd.output().expect("Failed to execute command");

        CliResult {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code: output.status.code().unwrap_or(-1),
            args: args.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Execute with `--robot` flag for JSON output.
    #[must_use]
    pub fn run_robot(&self, args: &[&str]) -> CliResult {
        let mut full_args = vec!["--robot"];
        full_args.extend(args);
        self.run(&full_args)
    }
}

/// Captured output from CLI execution with fluent assertions.
#[derive(Debug, Clone)]
pub struct CliResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    pub args: Vec<String>,
}

impl CliResult {
    /// Check if the command succeeded (exit code 0).
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Assert the command succeeded.
    ///
    /// # Panics
    ///
    /// Panics if the command did not exit with code 0.
    pub fn assert_success(&self) -> &Self {
        assert!(
            self.success(),
            "Command {:?} failed with exit code {}: {}",
            self.args,
            self.exit_code,
            self.stderr
        );
        self
    }

    /// Assert a specific exit code.
    ///
    /// # Panics
    ///
    /// Panics if the exit code doesn't match.
    pub fn assert_exit_code(&self, expected: i32) -> &Self {
        assert_eq!(
            self.exit_code, expected,
            "Expected exit code {expected}, got {} for {:?}\nstderr:\n{}",
            self.exit_code, self.args, self.stderr
        );
        self
    }

    // === Stdout Assertions ===

    /// Assert stdout contains the given text.
    ///
    /// # Panics
    ///
    /// Panics if stdout doesn't contain the text.
    pub fn assert_stdout_contains(&self, text: &str) -> &Self {
        assert!(
            self.stdout.contains(text),
            "stdout does not contain \"{text}\"\nActual stdout:\n{}",
            self.stdout
        );
        self
    }

    /// Assert stdout does not contain the given text.
    ///
    /// # Panics
    ///
    /// Panics if stdout contains the text.
    pub fn assert_stdout_not_contains(&self, text: &str) -> &Self {
        assert!(
            !self.stdout.contains(text),
            "stdout unexpectedly contains \"{text}\""
        );
        self
    }

    /// Assert stdout matches a regex pattern.
    ///
    /// # Panics
    ///
    /// Panics if stdout doesn't match the pattern.
    pub fn assert_stdout_matches(&self, pattern: &str) -> &Self {
        let re = regex::Regex::new(pattern).expect("Invalid regex pattern");
        assert!(
            re.is_match(&self.stdout),
            "stdout does not match pattern \"{pattern}\"\nActual stdout:\n{}",
            self.stdout
        );
        self
    }

    // === Stderr Assertions ===

    /// Assert stderr contains the given text.
    ///
    /// # Panics
    ///
    /// Panics if stderr doesn't contain the text.
    pub fn assert_stderr_contains(&self, text: &str) -> &Self {
        assert!(
            self.stderr.contains(text),
            "stderr does not contain \"{text}\"\nActual stderr:\n{}",
            self.stderr
        );
        self
    }

    // === JSON Assertions (for robot mode) ===

    /// Parse stdout as JSON.
    ///
    /// # Panics
    ///
    /// Panics if stdout is not valid JSON.
    #[must_use]
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|_| panic!("Failed to parse JSON from stdout:\n{}", self.stdout))
    }

    /// Parse stderr as JSON (robot-mode errors).
    ///
    /// # Panics
    ///
    /// Panics if stderr is not valid JSON.
    #[must_use]
    pub fn stderr_json(&self) -> Value {
        serde_json::from_str(&self.stderr)
            .unwrap_or_else(|_| panic!("Failed to parse JSON from stderr:\n{}", self.stderr))
    }

    /// Assert a JSON field matches an expected value using JSON pointer syntax.
    ///
    /// # Panics
    ///
    /// Panics if the field doesn't exist or doesn't match.
    pub fn assert_json_field(&self, json_pointer: &str, expected: &Value) -> &Self {
        let json = self.json();
        let actual = json.pointer(json_pointer).unwrap_or_else(|| {
            panic!(
                "JSON path {json_pointer} not found in:\n{}",
                serde_json::to_string_pretty(&json).unwrap_or_default()
            )
        });
        assert_eq!(actual, expected, "JSON field {json_pointer} mismatch");
        self
    }

    /// Assert a JSON array has the expected length.
    ///
    /// # Panics
    ///
    /// Panics if the field is not an array or has wrong length.
    pub fn assert_json_array_len(&self, json_pointer: &str, expected_len: usize) -> &Self {
        let json = self.json();
        let arr = json
            .pointer(json_pointer)
            .unwrap_or_else(|| panic!("JSON path {json_pointer} not found"))
            .as_array()
            .unwrap_or_else(|| panic!("JSON path {json_pointer} is not an array"));
        assert_eq!(
            arr.len(),
            expected_len,
            "Array at {json_pointer} has {} elements, expected {expected_len}",
            arr.len()
        );
        self
    }
}
