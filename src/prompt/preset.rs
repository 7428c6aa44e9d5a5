//! Answers supplied up front (command-line flags) with a fallback prompter.

use std::collections::BTreeMap;

use tracing::debug;

use super::{ConfirmQuestion, Prompter, TextQuestion};
use crate::error::{Result, ScaffoldError};

/// Answers known questions from presets and asks `inner` for the rest.
///
/// With `assume_defaults`, unanswered confirm questions take their default
/// instead of prompting. Text questions always fall through to `inner` when
/// no preset exists, since they have no default.
pub struct PresetPrompter<P> {
    inner: P,
    assume_defaults: bool,
    confirms: BTreeMap<&'static str, bool>,
    texts: BTreeMap<&'static str, String>,
}

impl<P: Prompter> PresetPrompter<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            assume_defaults: false,
            confirms: BTreeMap::new(),
            texts: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn assume_defaults(mut self, yes: bool) -> Self {
        self.assume_defaults = yes;
        self
    }

    #[must_use]
    pub fn confirm_answer(mut self, key: &'static str, answer: bool) -> Self {
        self.confirms.insert(key, answer);
        self
    }

    #[must_use]
    pub fn text_answer(mut self, key: &'static str, answer: impl Into<String>) -> Self {
        self.texts.insert(key, answer.into());
        self
    }
}

impl<P: Prompter> Prompter for PresetPrompter<P> {
    fn confirm(&self, question: &ConfirmQuestion) -> Result<bool> {
        if let Some(&answer) = self.confirms.get(question.key) {
            debug!(key = question.key, answer, "Using preset answer");
            return Ok(answer);
        }
        if self.assume_defaults {
            debug!(key = question.key, answer = question.default, "Assuming default");
            return Ok(question.default);
        }
        self.inner.confirm(question)
    }

    fn text(&self, question: &TextQuestion) -> Result<String> {
        match self.texts.get(question.key) {
            // A preset cannot be re-asked, so an invalid one is fatal.
            Some(answer) if !(question.validate)(answer) => Err(ScaffoldError::PromptFailed(
                format!("'{answer}' rejected for {}: {}", question.key, question.hint),
            )),
            Some(answer) => {
                debug!(key = question.key, "Using preset answer");
                Ok(answer.clone())
            }
            None => self.inner.text(question),
        }
    }
}
