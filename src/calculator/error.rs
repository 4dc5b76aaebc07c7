//! Error taxonomy for the calculator pipeline.
//!
//! The `Display` text of each variant is the message shown to the user,
//! both inside a [`ValidationResult`](super::ValidationResult) and in the
//! error branch of a [`CalculationResult`](super::CalculationResult).

use thiserror::Error;

/// Why an expression could not be evaluated.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("expression cannot be empty.")]
    EmptyExpression,

    #[error("invalid character: '{0}'")]
    InvalidCharacter(char),

    #[error("expression cannot start or end with an operator")]
    LeadingOrTrailingOperator,

    #[error("no two operators in a row")]
    ConsecutiveOperators,

    #[error("empty number between operators")]
    EmptyOperand,

    #[error("malformed number: {number}{reason}")]
    MalformedNumber {
        /// The operand text as written.
        number: String,
        /// Extra detail appended to the message, possibly empty.
        reason: &'static str,
    },

    /// Parser and evaluator disagree about the token counts.
    /// Unreachable for input that passed validation.
    #[error("mismatched number of operands ({operands}) and operators ({operators})")]
    StructuralMismatch { operands: usize, operators: usize },
}

impl CalcError {
    pub(crate) fn too_many_dots(number: &str) -> Self {
        Self::MalformedNumber {
            number: number.to_string(),
            reason: " (too many decimal points)",
        }
    }

    pub(crate) fn unparsable(number: &str) -> Self {
        Self::MalformedNumber {
            number: number.to_string(),
            reason: "",
        }
    }
}
