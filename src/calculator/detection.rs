//! Input classification for interactive sessions.
//!
//! Decides whether a line of free input should go to the calculator or to
//! the name formatter. Anything that is not clearly a name is treated as an
//! expression, so malformed arithmetic still gets the evaluator's message.
//! A name needs at least a surname and a first name, so a single word goes
//! to the calculator.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Letters, whitespace and hyphens, with at least one letter.
    static ref NAME_LIKE: Regex = Regex::new(r"^[\p{L}\s-]*\p{L}[\p{L}\s-]*$").unwrap();
}

/// What a line of input looks like.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    /// Nothing but whitespace.
    Empty,
    /// Arithmetic, or anything that is not a name.
    Expression,
    /// Two or more words made of letters, e.g. "Ivanov Ivan Ivanovich".
    Name,
}

/// Classify a line of input.
pub fn classify_input(input: &str) -> InputKind {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        InputKind::Empty
    } else if NAME_LIKE.is_match(trimmed) && trimmed.split_whitespace().nth(1).is_some() {
        InputKind::Name
    } else {
        InputKind::Expression
    }
}

/// Check if input should be handed to the calculator.
pub fn looks_like_expression(input: &str) -> bool {
    classify_input(input) == InputKind::Expression
}
