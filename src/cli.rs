//! Command-line front end.
//!
//! Plays the part of the submission form: `eval` submits an expression,
//! `validate` gives the as-you-type feedback, `clean` applies the on-focus
//! sanitization, `name` submits the name form, and `repl` handles one
//! submission per line of input.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{info, warn};

use crate::calculator::{
    InputKind, classify_input, clean, copy_to_clipboard, evaluate_safe_with, validate,
};
use crate::config::Config;
use crate::form::FormOutcome;
use crate::names::format_full_name;

#[derive(Parser, Debug)]
#[command(name = "zcalc", version)]
#[command(about = "Evaluate +/* expressions and format names as initials", long_about = None)]
pub struct Cli {
    /// Path to config file (overrides the default location)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate an expression
    Eval {
        /// Expression, e.g. "2 + 3 * 4" (arguments are joined with spaces)
        expression: Vec<String>,

        /// Copy the result to the clipboard
        #[arg(short, long)]
        copy: bool,
    },

    /// Check an expression without evaluating it
    Validate {
        expression: Vec<String>,
    },

    /// Strip an expression down to digits, '.', '+' and '*'
    Clean {
        expression: Vec<String>,
    },

    /// Format a full name as "Surname F.P."
    Name {
        surname: String,
        first_name: String,
        patronymic: Option<String>,
    },

    /// Read submissions from stdin, one per line
    Repl,
}

/// Run a parsed command line.
///
/// Returns `Ok(false)` when the submission itself failed (invalid
/// expression or name), so the caller can set the exit status.
pub fn run(cli: Cli, config: &Config, input: impl BufRead, out: &mut impl Write) -> Result<bool> {
    let json = cli.json;

    match cli.command {
        Commands::Eval { expression, copy } => {
            let expression = expression.join(" ");
            let outcome = submit_expression(&expression, config, json, out)?;
            if (copy || config.clipboard.copy_results)
                && let Some(text) = outcome.text_for_clipboard()
                && let Err(err) = copy_to_clipboard(text)
            {
                warn!("{err:#}");
            }
            Ok(!outcome.is_error())
        }
        Commands::Validate { expression } => {
            let result = validate(&expression.join(" "));
            if json {
                writeln!(out, "{}", serde_json::to_string(&result)?)?;
            } else if result.is_valid {
                writeln!(out, "ok: {}", result.message)?;
            } else {
                writeln!(out, "invalid: {}", result.message)?;
            }
            Ok(result.is_valid)
        }
        Commands::Clean { expression } => {
            writeln!(out, "{}", clean(&expression.join(" ")))?;
            Ok(true)
        }
        Commands::Name {
            surname,
            first_name,
            patronymic,
        } => {
            let outcome = submit_name(&surname, &first_name, patronymic.as_deref(), json, out)?;
            Ok(!outcome.is_error())
        }
        Commands::Repl => run_repl(config, json, input, out),
    }
}

fn run_repl(config: &Config, json: bool, input: impl BufRead, out: &mut impl Write) -> Result<bool> {
    let mut all_ok = true;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;

        let outcome = match classify_input(&line) {
            InputKind::Empty => write_outcome(FormOutcome::empty_submission(), json, out)?,
            InputKind::Expression => submit_expression(&line, config, json, out)?,
            InputKind::Name => {
                let mut words = line.split_whitespace();
                let surname = words.next().unwrap_or_default();
                let first_name = words.next().unwrap_or_default();
                let patronymic = words.collect::<Vec<_>>().join(" ");
                submit_name(surname, first_name, Some(patronymic.as_str()), json, out)?
            }
        };
        all_ok &= !outcome.is_error();
    }

    info!(all_ok, "input exhausted");
    Ok(all_ok)
}

fn submit_expression(
    expression: &str,
    config: &Config,
    json: bool,
    out: &mut impl Write,
) -> Result<FormOutcome> {
    let expression = expression.trim();
    if expression.is_empty() {
        return write_outcome(FormOutcome::empty_submission(), json, out);
    }

    let result = evaluate_safe_with(expression, &config.display);
    info!(
        expression = result.expression(),
        outcome = result.display(),
        "submitted expression"
    );
    if json {
        writeln!(out, "{}", serde_json::to_string(&result)?)?;
        return Ok(FormOutcome::from_calc_result(&result));
    }
    write_outcome(FormOutcome::from_calc_result(&result), false, out)
}

fn submit_name(
    surname: &str,
    first_name: &str,
    patronymic: Option<&str>,
    json: bool,
    out: &mut impl Write,
) -> Result<FormOutcome> {
    let outcome = FormOutcome::from_name_result(format_full_name(surname, first_name, patronymic));
    write_outcome(outcome, json, out)
}

fn write_outcome(outcome: FormOutcome, json: bool, out: &mut impl Write) -> Result<FormOutcome> {
    if json {
        let value = if outcome.is_error() {
            json!({ "success": false, "error": &outcome.text })
        } else {
            json!({ "success": true, "result": &outcome.text })
        };
        writeln!(out, "{value}")?;
    } else {
        writeln!(out, "{}", outcome.render())?;
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_args(args: &[&str], stdin: &str) -> (bool, String) {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        let ok = run(cli, &Config::default(), Cursor::new(stdin.to_string()), &mut out).unwrap();
        (ok, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_eval() {
        let (ok, out) = run_args(&["zcalc", "eval", "2", "+", "3", "*", "4"], "");
        assert!(ok);
        assert_eq!(out, "Result: 14\n");
    }

    #[test]
    fn test_eval_error() {
        let (ok, out) = run_args(&["zcalc", "eval", "abc"], "");
        assert!(!ok);
        assert_eq!(out, "Error: invalid character: 'a'\n");
    }

    #[test]
    fn test_eval_flags_after_expression() {
        let cli = Cli::try_parse_from(["zcalc", "eval", "2+3", "--copy"]).unwrap();
        match cli.command {
            Commands::Eval { expression, copy } => {
                assert_eq!(expression, vec!["2+3"]);
                assert!(copy);
            }
            other => panic!("unexpected command: {other:?}"),
        }

        let (ok, out) = run_args(&["zcalc", "eval", "2+3", "--json"], "");
        assert!(ok);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["result"], 5.0);

        let (ok, out) = run_args(&["zcalc", "validate", "2+3", "--json"], "");
        assert!(ok);
        assert!(out.contains("\"isValid\":true"));
    }

    #[test]
    fn test_eval_rejects_subtraction() {
        let (ok, out) = run_args(&["zcalc", "eval", "5-1"], "");
        assert!(!ok);
        assert_eq!(out, "Error: invalid character: '-'\n");
    }

    #[test]
    fn test_eval_empty_submission() {
        let (ok, out) = run_args(&["zcalc", "eval"], "");
        assert!(!ok);
        assert_eq!(out, "Error: please enter an expression\n");
    }

    #[test]
    fn test_eval_json() {
        let (ok, out) = run_args(&["zcalc", "--json", "eval", "2*3+4*5"], "");
        assert!(ok);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["result"], 26.0);
    }

    #[test]
    fn test_validate() {
        let (ok, out) = run_args(&["zcalc", "validate", "2++3"], "");
        assert!(!ok);
        assert_eq!(out, "invalid: no two operators in a row\n");

        let (ok, out) = run_args(&["zcalc", "--json", "validate", "2+3"], "");
        assert!(ok);
        assert_eq!(out, "{\"isValid\":true,\"message\":\"expression is valid.\"}\n");
    }

    #[test]
    fn test_clean() {
        let (ok, out) = run_args(&["zcalc", "clean", "(2 + x) * 3"], "");
        assert!(ok);
        assert_eq!(out, "2+*3\n");
    }

    #[test]
    fn test_name() {
        let (ok, out) = run_args(&["zcalc", "name", "иванов", "иван", "иванович"], "");
        assert!(ok);
        assert_eq!(out, "Result: Иванов И.И.\n");

        let (ok, out) = run_args(&["zcalc", "name", "Ivanov", "I"], "");
        assert!(!ok);
        assert_eq!(out, "Error: First name must contain at least 2 characters\n");
    }

    #[test]
    fn test_repl_routes_lines() {
        let stdin = "2+3*4\n\nivanov ivan\n2+\nabc\n";
        let (ok, out) = run_args(&["zcalc", "repl"], stdin);
        assert!(!ok);
        assert_eq!(
            out,
            "Result: 14\n\
             Error: please enter an expression\n\
             Result: Ivanov I.\n\
             Error: expression cannot start or end with an operator\n\
             Error: invalid character: 'a'\n"
        );
    }

    #[test]
    fn test_repl_json() {
        let (ok, out) = run_args(&["zcalc", "--json", "repl"], "5\nsmith john\n");
        assert!(ok);
        let lines: Vec<serde_json::Value> = out
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines[0]["result"], 5.0);
        assert_eq!(lines[1]["result"], "Smith J.");
    }
}
