//! Scripted prompter for unit testing.
//!
//! Answers are consumed in order. A text question skips (and records)
//! scripted answers its validator rejects, the same way an interactive
//! prompt would re-ask.

use std::collections::VecDeque;
use std::sync::Mutex;

use tracing::trace;

use super::{ConfirmQuestion, Prompter, TextQuestion};
use crate::error::{Result, ScaffoldError};

/// One scripted response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
    /// Accept the question's default.
    Default,
    Text(String),
    /// Simulate Esc / Ctrl-C.
    Cancel,
}

/// Prompter that replays a fixed script.
pub struct ScriptedPrompter {
    script: Mutex<VecDeque<Answer>>,
    asked: Mutex<Vec<String>>,
    rejected: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    #[must_use]
    pub fn new(script: Vec<Answer>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            asked: Mutex::new(Vec::new()),
            rejected: Mutex::new(Vec::new()),
        }
    }

    /// Messages of every question asked, in order.
    #[must_use]
    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }

    /// Text answers the validator refused.
    #[must_use]
    pub fn rejected(&self) -> Vec<String> {
        self.rejected.lock().unwrap().clone()
    }

    /// Number of scripted answers not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.lock().unwrap().len()
    }

    fn next(&self, message: &str) -> Result<Answer> {
        self.script.lock().unwrap().pop_front().ok_or_else(|| {
            ScaffoldError::PromptFailed(format!("no scripted answer for '{message}'"))
        })
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, question: &ConfirmQuestion) -> Result<bool> {
        self.asked.lock().unwrap().push(question.message.to_string());
        let answer = self.next(question.message)?;
        trace!(key = question.key, ?answer, "Scripted confirm");
        match answer {
            Answer::Yes => Ok(true),
            Answer::No => Ok(false),
            Answer::Default => Ok(question.default),
            Answer::Cancel => Err(ScaffoldError::PromptCancelled),
            Answer::Text(text) => Err(ScaffoldError::PromptFailed(format!(
                "scripted text '{text}' given to confirm '{}'",
                question.message
            ))),
        }
    }

    fn text(&self, question: &TextQuestion) -> Result<String> {
        self.asked.lock().unwrap().push(question.message.to_string());
        loop {
            let answer = self.next(question.message)?;
            trace!(key = question.key, ?answer, "Scripted text");
            match answer {
                Answer::Text(text) if (question.validate)(&text) => return Ok(text),
                Answer::Text(text) => self.rejected.lock().unwrap().push(text),
                Answer::Cancel => return Err(ScaffoldError::PromptCancelled),
                other => {
                    return Err(ScaffoldError::PromptFailed(format!(
                        "scripted {other:?} given to text '{}'",
                        question.message
                    )));
                }
            }
        }
    }
}
