//! Syntactic validation of calculator expressions.
//!
//! Validation is independent of sanitization: it re-checks the character
//! set itself so it can name the offending character.

use serde::Serialize;
use tracing::trace;

use super::error::CalcError;
use super::sanitize::is_allowed_char;

const VALID_MESSAGE: &str = "expression is valid.";

/// Outcome of validating an expression.
///
/// `message` always holds a human-readable explanation, for valid input as
/// well as for the first rule that failed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub message: String,
}

impl From<Result<(), CalcError>> for ValidationResult {
    fn from(result: Result<(), CalcError>) -> Self {
        match result {
            Ok(()) => Self {
                is_valid: true,
                message: VALID_MESSAGE.to_string(),
            },
            Err(err) => Self {
                is_valid: false,
                message: err.to_string(),
            },
        }
    }
}

/// Validate an expression, reporting the result as a value.
pub fn validate(expression: &str) -> ValidationResult {
    check(expression).into()
}

fn is_operator(c: char) -> bool {
    c == '+' || c == '*'
}

/// Validate an expression, returning the first rule violation as an error.
///
/// Rules are checked in a fixed order and the first failure wins:
/// emptiness, character set, leading/trailing operators, adjacent
/// operators, then each operand between operators.
pub fn check(expression: &str) -> Result<(), CalcError> {
    if expression.trim_matches(' ').is_empty() {
        return Err(CalcError::EmptyExpression);
    }

    if let Some(c) = expression.chars().find(|&c| !is_allowed_char(c)) {
        return Err(CalcError::InvalidCharacter(c));
    }

    let trimmed = expression.trim();
    if trimmed.starts_with(is_operator) || trimmed.ends_with(is_operator) {
        return Err(CalcError::LeadingOrTrailingOperator);
    }

    let mut prev = None;
    for c in expression.chars() {
        if is_operator(c) && prev.is_some_and(is_operator) {
            return Err(CalcError::ConsecutiveOperators);
        }
        prev = Some(c);
    }

    for operand in expression.split(is_operator) {
        check_operand(operand.trim())?;
    }

    trace!(expression, "expression passed validation");
    Ok(())
}

fn check_operand(operand: &str) -> Result<(), CalcError> {
    if operand.is_empty() {
        return Err(CalcError::EmptyOperand);
    }

    if operand.matches('.').count() > 1 {
        return Err(CalcError::too_many_dots(operand));
    }

    operand
        .parse::<f64>()
        .map(|_| ())
        .map_err(|_| CalcError::unparsable(operand))
}
