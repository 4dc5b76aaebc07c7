//! Outcome of a single form submission, ready to be shown to the user.

use crate::calculator::CalculationResult;
use crate::names::NameError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutcomeKind {
    Success,
    Error,
}

/// What the form shows after a submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormOutcome {
    pub kind: OutcomeKind,
    /// The result (or error message) formatted for display.
    pub text: String,
    /// Text to put on the clipboard.
    /// None if the submission failed.
    pub clipboard: Option<String>,
}

impl FormOutcome {
    /// Create an outcome from a calculator result.
    pub fn from_calc_result(result: &CalculationResult) -> Self {
        Self {
            kind: if result.is_success() {
                OutcomeKind::Success
            } else {
                OutcomeKind::Error
            },
            text: result.display().to_string(),
            clipboard: result.clipboard().map(str::to_string),
        }
    }

    /// Create an outcome from a name formatting result.
    pub fn from_name_result(result: Result<String, NameError>) -> Self {
        match result {
            Ok(formatted) => Self {
                kind: OutcomeKind::Success,
                clipboard: Some(formatted.clone()),
                text: formatted,
            },
            Err(err) => Self::error(err.to_string()),
        }
    }

    /// The outcome of submitting a blank expression.
    pub fn empty_submission() -> Self {
        Self::error("please enter an expression".to_string())
    }

    fn error(message: String) -> Self {
        Self {
            kind: OutcomeKind::Error,
            text: message,
            clipboard: None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == OutcomeKind::Error
    }

    /// Get the text to copy to clipboard.
    /// None for failed submissions.
    pub fn text_for_clipboard(&self) -> Option<&str> {
        self.clipboard.as_deref()
    }

    /// Render as a single line, e.g. `Result: 14` or `Error: ...`.
    pub fn render(&self) -> String {
        match self.kind {
            OutcomeKind::Success => format!("Result: {}", self.text),
            OutcomeKind::Error => format!("Error: {}", self.text),
        }
    }
}
