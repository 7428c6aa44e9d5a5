//! Recording output for unit testing.

use std::sync::Mutex;

use crate::error::ScaffoldError;
use crate::theme::ThemePalette;
use crate::workflow::RunReport;

use super::{Output, Shade, VersionInfo};

/// Keeps everything it is asked to print.
#[derive(Default)]
pub struct RecordingOutput {
    steps: Mutex<Vec<String>>,
    successes: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
    reports: Mutex<Vec<RunReport>>,
}

impl RecordingOutput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn steps(&self) -> Vec<String> {
        self.steps.lock().unwrap().clone()
    }

    #[must_use]
    pub fn successes(&self) -> Vec<String> {
        self.successes.lock().unwrap().clone()
    }

    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    #[must_use]
    pub fn reports(&self) -> Vec<RunReport> {
        self.reports.lock().unwrap().clone()
    }
}

impl Output for RecordingOutput {
    fn step(&self, message: &str) {
        self.steps.lock().unwrap().push(message.to_string());
    }

    fn success(&self, message: &str) {
        self.successes.lock().unwrap().push(message.to_string());
    }

    fn error(&self, error: &ScaffoldError) {
        self.errors.lock().unwrap().push(error.to_string());
    }

    fn report(&self, report: &RunReport) {
        self.reports.lock().unwrap().push(report.clone());
    }

    fn stylesheet(&self, _palette: &ThemePalette, _css: &str) {}

    fn shade(&self, _shade: &Shade) {}

    fn version_info(&self, _info: &VersionInfo) {}
}
