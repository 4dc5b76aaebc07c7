//! Calculator for `+`/`*` expressions over non-negative decimals.
//!
//! This module provides functionality to:
//! - Sanitize and validate raw input
//! - Parse and evaluate expressions (multiplication before addition)
//! - Format results for display and copy them to the clipboard
//! - Detect whether free input is an expression

mod clipboard;
mod detection;
mod error;
mod evaluation;
mod format;
mod parser;
mod sanitize;
mod validation;

pub use clipboard::copy_to_clipboard;
pub use detection::{InputKind, classify_input, looks_like_expression};
pub use error::CalcError;
pub use evaluation::{CalculationResult, evaluate, evaluate_safe, evaluate_safe_with};
pub use format::{format_clipboard, format_display};
pub use parser::{Operator, ParsedExpression, parse};
pub use sanitize::clean;
pub use validation::{ValidationResult, check, validate};
