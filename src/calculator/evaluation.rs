//! Expression evaluation.
//!
//! Runs the sanitize → validate → parse pipeline and reduces the parsed
//! tokens left to right: multiplication is applied eagerly to the current
//! term, addition starts a new term, and the terms are summed at the end.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use tracing::{debug, trace};

use super::error::CalcError;
use super::format::{format_clipboard, format_display};
use super::parser::{Operator, ParsedExpression, parse};
use super::sanitize::{clean, is_allowed_char};
use super::validation::check;
use crate::config::DisplayConfig;

/// Result of evaluating a calculator expression.
///
/// Serializes as `{"success": true, "result": <number>}` or
/// `{"success": false, "error": <message>}`.
#[derive(Clone, Debug, PartialEq)]
pub enum CalculationResult {
    /// Successful calculation.
    Success {
        /// The expression as submitted.
        expression: String,
        /// The numeric value.
        value: f64,
        /// Formatted for display (with thousand separators).
        display_result: String,
        /// Formatted for clipboard (raw number).
        clipboard_result: String,
    },
    /// The expression was rejected.
    Error {
        /// The expression as submitted.
        expression: String,
        /// Error message to display.
        message: String,
    },
}

impl CalculationResult {
    /// The submitted expression, trimmed.
    pub fn expression(&self) -> &str {
        match self {
            Self::Success { expression, .. } => expression,
            Self::Error { expression, .. } => expression,
        }
    }

    /// Whether the expression evaluated.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The numeric value, for successful results.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Success { value, .. } => Some(*value),
            Self::Error { .. } => None,
        }
    }

    /// The error message, for failed results.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Error { message, .. } => Some(message),
        }
    }

    /// Text for the result line: the formatted value or the error message.
    pub fn display(&self) -> &str {
        match self {
            Self::Success { display_result, .. } => display_result,
            Self::Error { message, .. } => message,
        }
    }

    /// Raw number for the clipboard; `None` on error.
    pub fn clipboard(&self) -> Option<&str> {
        match self {
            Self::Success {
                clipboard_result, ..
            } => Some(clipboard_result),
            Self::Error { .. } => None,
        }
    }
}

impl Serialize for CalculationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("CalculationResult", 2)?;
        match self {
            Self::Success { value, .. } => {
                state.serialize_field("success", &true)?;
                state.serialize_field("result", value)?;
            }
            Self::Error { message, .. } => {
                state.serialize_field("success", &false)?;
                state.serialize_field("error", message)?;
            }
        }
        state.end()
    }
}

impl ParsedExpression {
    /// Reduce the token streams to a single value.
    ///
    /// Each run of multiplications collapses into one term before the
    /// terms are summed, which gives `*` precedence over `+` for this
    /// parenthesis-free grammar.
    pub fn reduce(&self) -> Result<f64, CalcError> {
        if self.operands.len() != self.operators.len() + 1 {
            return Err(CalcError::StructuralMismatch {
                operands: self.operands.len(),
                operators: self.operators.len(),
            });
        }

        let mut terms = vec![self.operands[0]];
        for (op, &operand) in self.operators.iter().zip(&self.operands[1..]) {
            match op {
                Operator::Multiply => {
                    if let Some(last) = terms.last_mut() {
                        *last *= operand;
                    }
                }
                Operator::Add => terms.push(operand),
            }
        }

        trace!(?terms, "collapsed terms");
        Ok(terms.iter().sum())
    }
}

/// Evaluate an expression, returning the first failure as an error.
///
/// Characters outside the expression alphabet are reported rather than
/// silently dropped; whitespace is ignored.
pub fn evaluate(expression: &str) -> Result<f64, CalcError> {
    if let Some(c) = expression
        .chars()
        .find(|&c| !c.is_whitespace() && !is_allowed_char(c))
    {
        return Err(CalcError::InvalidCharacter(c));
    }

    let cleaned = clean(expression);
    check(&cleaned)?;

    let parsed = parse(&cleaned)?;
    let value = parsed.reduce()?;
    debug!(expression = %cleaned, value, "evaluated expression");
    Ok(value)
}

/// Evaluate an expression without ever failing, using default formatting.
pub fn evaluate_safe(expression: &str) -> CalculationResult {
    evaluate_safe_with(expression, &DisplayConfig::default())
}

/// Evaluate an expression, capturing any failure in the result.
pub fn evaluate_safe_with(expression: &str, config: &DisplayConfig) -> CalculationResult {
    let expression_text = expression.trim().to_string();

    match evaluate(expression) {
        Ok(value) => CalculationResult::Success {
            expression: expression_text,
            display_result: format_display(value, config),
            clipboard_result: format_clipboard(value, config.precision),
            value,
        },
        Err(err) => {
            debug!(expression = %expression_text, error = %err, "evaluation failed");
            CalculationResult::Error {
                expression: expression_text,
                message: err.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_of(expression: &str) -> f64 {
        let result = evaluate_safe(expression);
        assert!(result.is_success(), "{expression}: {:?}", result.error());
        result.value().unwrap()
    }

    #[test]
    fn test_multiplication_before_addition() {
        assert_eq!(value_of("2+3*4"), 14.0);
        assert_eq!(value_of("2*3+4*5"), 26.0);
        assert_eq!(value_of("1+2+3"), 6.0);
    }

    #[test]
    fn test_chained_multiplication() {
        assert_eq!(value_of("2*3*4"), 24.0);
        assert_eq!(value_of("1+2*3*4+5"), 30.0);
    }

    #[test]
    fn test_single_operand() {
        assert_eq!(value_of("5"), 5.0);
        assert_eq!(value_of("0.5"), 0.5);
    }

    #[test]
    fn test_whitespace_is_ignored() {
        assert_eq!(value_of(" 2 +\t3 * 4 "), 14.0);
    }

    #[test]
    fn test_illegal_character_is_reported() {
        let result = evaluate_safe("abc");
        assert!(!result.is_success());
        assert_eq!(result.error(), Some("invalid character: 'a'"));
        assert_eq!(evaluate("2-1"), Err(CalcError::InvalidCharacter('-')));
    }

    #[test]
    fn test_validation_errors_propagate() {
        assert_eq!(evaluate(""), Err(CalcError::EmptyExpression));
        assert_eq!(evaluate("   "), Err(CalcError::EmptyExpression));
        assert_eq!(evaluate("2++3"), Err(CalcError::ConsecutiveOperators));
        assert_eq!(evaluate("2 + + 3"), Err(CalcError::ConsecutiveOperators));
        assert_eq!(evaluate("+2"), Err(CalcError::LeadingOrTrailingOperator));
        assert_eq!(evaluate("2..5+3"), Err(CalcError::too_many_dots("2..5")));
    }

    #[test]
    fn test_structural_mismatch() {
        let parsed = ParsedExpression {
            operands: vec![1.0, 2.0],
            operators: vec![Operator::Add, Operator::Add],
        };
        assert_eq!(
            parsed.reduce(),
            Err(CalcError::StructuralMismatch {
                operands: 2,
                operators: 2
            })
        );

        let empty = ParsedExpression::default();
        assert!(matches!(
            empty.reduce(),
            Err(CalcError::StructuralMismatch { .. })
        ));
    }

    #[test]
    fn test_result_accessors() {
        let result = evaluate_safe("1000 * 1000");
        assert_eq!(result.display(), "1,000,000");
        assert_eq!(result.clipboard(), Some("1000000"));
        assert_eq!(result.expression(), "1000 * 1000");

        let result = evaluate_safe("2+");
        assert_eq!(result.clipboard(), None);
        assert_eq!(
            result.display(),
            "expression cannot start or end with an operator"
        );
    }

    #[test]
    fn test_serialized_shape() {
        let ok = serde_json::to_value(evaluate_safe("2+3*4")).unwrap();
        assert_eq!(ok["success"], true);
        assert_eq!(ok["result"], 14.0);
        assert!(ok.get("error").is_none());

        let err = serde_json::to_value(evaluate_safe("2++3")).unwrap();
        assert_eq!(err["success"], false);
        assert_eq!(err["error"], "no two operators in a row");
        assert!(err.get("result").is_none());
    }
}
