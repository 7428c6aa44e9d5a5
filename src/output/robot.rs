//! Robot mode JSON output implementation.

use serde::Serialize;
use tracing::{debug, error, instrument, trace};

use crate::error::ScaffoldError;
use crate::theme::ThemePalette;
use crate::workflow::RunReport;

use super::{Output, RobotFormat, Shade, VersionInfo};

/// JSON output for scripts and agents.
///
/// Only final results reach stdout, one JSON document per command. Step
/// banners are left to the logs so stdout stays parseable.
pub struct RobotOutput {
    format: RobotFormat,
}

/// Error body written to stderr.
#[derive(Debug, Serialize)]
pub struct RobotError<'a> {
    pub error: bool,
    pub message: String,
    pub suggestion: Option<&'a str>,
    pub recoverable: bool,
}

impl<'a> From<&'a ScaffoldError> for RobotError<'a> {
    fn from(err: &'a ScaffoldError) -> Self {
        Self {
            error: true,
            message: err.to_string(),
            suggestion: err.suggestion(),
            recoverable: err.is_user_recoverable(),
        }
    }
}

#[derive(Serialize)]
struct StylesheetBody<'a> {
    palette: &'a ThemePalette,
    css: &'a str,
}

impl RobotOutput {
    #[instrument]
    pub fn new(format: RobotFormat) -> Self {
        debug!(?format, "Creating RobotOutput");
        Self { format }
    }

    /// Serialize `data` in the configured format.
    pub fn render<T: Serialize + ?Sized>(&self, data: &T) -> serde_json::Result<String> {
        match self.format {
            RobotFormat::Json => serde_json::to_string_pretty(data),
            RobotFormat::JsonCompact => serde_json::to_string(data),
        }
    }

    #[instrument(skip(self, data), fields(format = ?self.format))]
    fn output_json<T: Serialize + ?Sized>(&self, data: &T) {
        match self.render(data) {
            Ok(json) => {
                trace!(json_len = json.len(), "JSON serialized");
                println!("{json}");
            }
            Err(e) => error!(error = %e, "Failed to serialize output"),
        }
    }
}

impl Output for RobotOutput {
    fn step(&self, message: &str) {
        debug!(message, "Robot: step");
    }

    fn success(&self, message: &str) {
        debug!(message, "Robot: success");
    }

    #[instrument(skip(self))]
    fn error(&self, error: &ScaffoldError) {
        debug!(error = %error, "Robot: error");
        match self.render(&RobotError::from(error)) {
            Ok(json) => eprintln!("{json}"),
            Err(e) => eprintln!("{error} ({e})"),
        }
    }

    fn report(&self, report: &RunReport) {
        debug!("Robot: report");
        self.output_json(report);
    }

    fn stylesheet(&self, palette: &ThemePalette, css: &str) {
        debug!("Robot: stylesheet");
        self.output_json(&StylesheetBody { palette, css });
    }

    fn shade(&self, shade: &Shade) {
        self.output_json(shade);
    }

    fn version_info(&self, info: &VersionInfo) {
        self.output_json(info);
    }
}
