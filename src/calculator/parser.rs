//! Tokenization of validated expressions into operands and operators.

use std::fmt;

use super::error::CalcError;

/// A binary operator between two operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Multiply,
}

impl TryFrom<char> for Operator {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '+' => Ok(Self::Add),
            '*' => Ok(Self::Multiply),
            other => Err(other),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => f.write_str("+"),
            Self::Multiply => f.write_str("*"),
        }
    }
}

/// Operands and operators of an expression, in source order.
///
/// Produced from validated input, `operands.len() == operators.len() + 1`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParsedExpression {
    pub operands: Vec<f64>,
    pub operators: Vec<Operator>,
}

/// Split a validated expression into operands and operators.
///
/// Digits and `.` accumulate into a literal which is flushed whenever an
/// operator is reached and once more at the end of input. Spaces are
/// skipped. The caller is expected to have run [`check`](super::check)
/// first; a literal that still fails to parse is reported instead of
/// panicking.
pub fn parse(expression: &str) -> Result<ParsedExpression, CalcError> {
    let mut parsed = ParsedExpression::default();
    let mut literal = String::new();

    for c in expression.chars() {
        if c.is_ascii_digit() || c == '.' {
            literal.push(c);
        } else if let Ok(op) = Operator::try_from(c) {
            flush(&mut literal, &mut parsed.operands)?;
            parsed.operators.push(op);
        }
    }
    flush(&mut literal, &mut parsed.operands)?;

    Ok(parsed)
}

fn flush(literal: &mut String, operands: &mut Vec<f64>) -> Result<(), CalcError> {
    if literal.is_empty() {
        return Ok(());
    }
    let value = literal
        .parse::<f64>()
        .map_err(|_| CalcError::unparsable(literal.as_str()))?;
    operands.push(value);
    literal.clear();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use Operator::{Add, Multiply};

    #[test]
    fn test_single_operand() {
        let parsed = parse("5").unwrap();
        assert_eq!(parsed.operands, vec![5.0]);
        assert!(parsed.operators.is_empty());
    }

    #[test]
    fn test_mixed_operators() {
        let parsed = parse("2+3*4.5").unwrap();
        assert_eq!(parsed.operands, vec![2.0, 3.0, 4.5]);
        assert_eq!(parsed.operators, vec![Add, Multiply]);
    }

    #[test]
    fn test_spaces_are_skipped() {
        let parsed = parse("1 + 2").unwrap();
        assert_eq!(parsed.operands, vec![1.0, 2.0]);
        assert_eq!(parsed.operators, vec![Add]);
    }

    #[test]
    fn test_unvalidated_input_breaks_invariant() {
        // No operand around a lone operator; the evaluator catches this.
        let parsed = parse("+").unwrap();
        assert!(parsed.operands.is_empty());
        assert_eq!(parsed.operators, vec![Add]);
    }

    #[test]
    fn test_unparsable_literal() {
        assert_eq!(parse("1..2"), Err(CalcError::unparsable("1..2")));
    }

    #[test]
    fn test_operator_display() {
        assert_eq!(Add.to_string(), "+");
        assert_eq!(Operator::try_from('*'), Ok(Multiply));
        assert_eq!(Operator::try_from('-'), Err('-'));
    }
}
