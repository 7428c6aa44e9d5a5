//! Step descriptors and the questions they ask.

use serde::Serialize;

use crate::color::{is_valid_hex, HEX_HINT};
use crate::prompt::{ConfirmQuestion, TextQuestion};
use crate::theme::ThemeColors;

/// The optional parts of a run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Install,
    Folders,
    Theme,
}

/// One confirm-gated step.
#[derive(Debug, Clone, Copy)]
pub struct Step {
    pub kind: StepKind,
    pub question: ConfirmQuestion,
}

impl Step {
    pub const fn default_answer(&self) -> bool {
        self.question.default
    }
}

/// What the driver does after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Finish,
}

pub const INSTALL: Step = Step {
    kind: StepKind::Install,
    question: ConfirmQuestion {
        key: "install",
        message: "Do you want to install shadcn/ui?",
        default: true,
    },
};

pub const FOLDERS: Step = Step {
    kind: StepKind::Folders,
    question: ConfirmQuestion {
        key: "folders",
        message: "Do you want to generate standard development folders?",
        default: true,
    },
};

pub const THEME: Step = Step {
    kind: StepKind::Theme,
    question: ConfirmQuestion {
        key: "theme",
        message: "Do you want to set color theme?",
        default: true,
    },
};

/// Every step, in the order the driver runs them.
pub const STEPS: [Step; 3] = [INSTALL, FOLDERS, THEME];

pub const PRIMARY_COLOR: TextQuestion = TextQuestion {
    key: "primary",
    message: "Enter primary color (hex without #)",
    validate: is_valid_hex,
    hint: HEX_HINT,
};

pub const SECONDARY_COLOR: TextQuestion = TextQuestion {
    key: "secondary",
    message: "Enter secondary color (hex without #)",
    validate: is_valid_hex,
    hint: HEX_HINT,
};

/// Answers collected so far. `None` means the question was not reached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Answers {
    pub install: Option<bool>,
    pub folders: Option<bool>,
    pub theme: Option<bool>,
    pub colors: Option<ThemeColors>,
}

impl Answers {
    pub fn record(&mut self, kind: StepKind, accepted: bool) {
        let slot = match kind {
            StepKind::Install => &mut self.install,
            StepKind::Folders => &mut self.folders,
            StepKind::Theme => &mut self.theme,
        };
        *slot = Some(accepted);
    }

    pub const fn get(&self, kind: StepKind) -> Option<bool> {
        match kind {
            StepKind::Install => self.install,
            StepKind::Folders => self.folders,
            StepKind::Theme => self.theme,
        }
    }
}
