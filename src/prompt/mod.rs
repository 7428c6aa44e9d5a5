//! Interactive questions.
//!
//! Rendering is delegated to a `Prompter`; the workflow only sees a
//! question description going in and a typed answer coming out.

mod interactive;
pub mod mock;
mod preset;

pub use interactive::InquirePrompter;
pub use preset::PresetPrompter;

use crate::error::Result;

/// A yes/no question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmQuestion {
    /// Stable identifier used by presets and logs.
    pub key: &'static str,
    pub message: &'static str,
    pub default: bool,
}

/// A free-text question with a validity check.
///
/// Prompters must keep asking until `validate` accepts the input (or the
/// user cancels).
#[derive(Debug, Clone, Copy)]
pub struct TextQuestion {
    pub key: &'static str,
    pub message: &'static str,
    pub validate: fn(&str) -> bool,
    /// Shown when `validate` rejects an answer.
    pub hint: &'static str,
}

/// Asks questions and returns answers.
pub trait Prompter {
    /// Ask a yes/no question.
    ///
    /// # Errors
    ///
    /// Returns `PromptCancelled` if the user aborts, or `PromptFailed` if
    /// the terminal cannot be used.
    fn confirm(&self, question: &ConfirmQuestion) -> Result<bool>;

    /// Ask for text, re-asking until the answer is valid.
    fn text(&self, question: &TextQuestion) -> Result<String>;
}

impl<P: Prompter + ?Sized> Prompter for &P {
    fn confirm(&self, question: &ConfirmQuestion) -> Result<bool> {
        (**self).confirm(question)
    }

    fn text(&self, question: &TextQuestion) -> Result<String> {
        (**self).text(question)
    }
}

impl<P: Prompter + ?Sized> Prompter for Box<P> {
    fn confirm(&self, question: &ConfirmQuestion) -> Result<bool> {
        (**self).confirm(question)
    }

    fn text(&self, question: &TextQuestion) -> Result<String> {
        (**self).text(question)
    }
}
