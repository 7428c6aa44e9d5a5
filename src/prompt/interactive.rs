//! Terminal prompts rendered with inquire.

use inquire::ui::RenderConfig;
use inquire::validator::Validation;
use inquire::{Confirm, InquireError, Text};
use tracing::{debug, instrument};

use super::{ConfirmQuestion, Prompter, TextQuestion};
use crate::error::{Result, ScaffoldError};

/// Convert inquire errors to ScaffoldError.
fn map_inquire_error(e: InquireError) -> ScaffoldError {
    match e {
        InquireError::OperationCanceled | InquireError::OperationInterrupted => {
            ScaffoldError::PromptCancelled
        }
        other => ScaffoldError::PromptFailed(other.to_string()),
    }
}

/// Interactive prompter on the controlling terminal.
pub struct InquirePrompter {
    render_config: RenderConfig<'static>,
}

impl InquirePrompter {
    pub fn new(color: bool) -> Self {
        let render_config = if color {
            RenderConfig::default_colored()
        } else {
            RenderConfig::empty()
        };
        Self { render_config }
    }
}

impl Prompter for InquirePrompter {
    #[instrument(skip(self), fields(key = question.key))]
    fn confirm(&self, question: &ConfirmQuestion) -> Result<bool> {
        let answer = Confirm::new(question.message)
            .with_default(question.default)
            .with_render_config(self.render_config)
            .prompt()
            .map_err(map_inquire_error)?;
        debug!(answer, "Confirm answered");
        Ok(answer)
    }

    #[instrument(skip(self), fields(key = question.key))]
    fn text(&self, question: &TextQuestion) -> Result<String> {
        let validate = question.validate;
        let hint = question.hint;

        let answer = Text::new(question.message)
            .with_validator(move |input: &str| {
                Ok(if validate(input) {
                    Validation::Valid
                } else {
                    Validation::Invalid(hint.into())
                })
            })
            .with_render_config(self.render_config)
            .prompt()
            .map_err(map_inquire_error)?;
        debug!(answer = %answer, "Text answered");
        Ok(answer)
    }
}
