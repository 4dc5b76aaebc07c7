//! zcalc library
//!
//! A calculator for `+`/`*` expressions over non-negative decimals and a
//! formatter that renders full names as "Surname F.P.". Modules are
//! exposed for the binary and for integration testing.

pub mod calculator;
pub mod cli;
pub mod config;
pub mod form;
pub mod names;

pub use calculator::{
    CalcError, CalculationResult, ValidationResult, clean, evaluate, evaluate_safe, validate,
};
pub use config::Config;
pub use names::{NameError, format_full_name, process_name_form};
