//! # hellm
//!
//! hellm is a small interpreted language whose assignments and branches are
//! decided by a language model. Source text is tokenized, parsed into a tree
//! of statements and walked by an evaluator that asks a decision oracle to
//! produce `let` values and to judge `if` and `while` conditions.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::{
    ast::{Program, format_program},
    interpreter::{
        evaluator::core::{Interpreter, RunOptions},
        lexer::tokenize,
        oracle::Oracle,
        parser::core::parse,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` enum and `FunctionDef` that represent
/// a program as a tree. The tree is built by the parser, walked by the
/// evaluator, and rendered back to canonical source by the formatter.
///
/// # Responsibilities
/// - Defines one node type per statement kind.
/// - Renders nodes back to re-parseable source at any indentation depth.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// Every failure mode has its own variant carrying the details needed for
/// a useful message. All errors implement [`std::error::Error`].
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, scopes, the oracle and
/// evaluation.
pub mod interpreter;
/// General helpers used by more than one phase.
pub mod util;

/// Tokenizes and parses source text.
///
/// # Errors
/// Returns a lexing or parsing error.
///
/// # Examples
/// ```
/// use hellm::parse_source;
///
/// let program = parse_source("let x = \"hi\";\nprint x;").unwrap();
/// assert_eq!(program.len(), 2);
///
/// assert!(parse_source("print x").is_err());
/// ```
pub fn parse_source(source: &str) -> Result<Program, Box<dyn std::error::Error>> {
    let tokens = tokenize(source)?;
    Ok(parse(&tokens)?)
}

/// Rewrites source text in canonical form.
///
/// # Errors
/// Returns a lexing or parsing error.
///
/// # Examples
/// ```
/// use hellm::format_source;
///
/// let formatted = format_source("if \"x\" { print a; } else { print b; }").unwrap();
/// assert_eq!(formatted, "if \"x\" {\n    print a;\n} else {\n    print b;\n}\n");
/// ```
pub fn format_source(source: &str) -> Result<String, Box<dyn std::error::Error>> {
    Ok(format_program(&parse_source(source)?))
}

/// Runs a program from source text.
///
/// The source is tokenized, parsed and executed. `print` output goes to
/// `output`; `use` reads from `args`. Execution stops at the first error.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use hellm::{interpreter::{evaluator::core::RunOptions, oracle::OracleError}, run_source};
///
/// let mut oracle = |_: &str, _: &str| -> Result<String, OracleError> { Ok(" hello \n".into()) };
/// let mut output = Vec::new();
///
/// run_source("let x = \"hi\";\nprint x;",
///            &[],
///            &mut oracle,
///            &mut output,
///            RunOptions::default()).unwrap();
/// assert_eq!(output, b"hello\n");
///
/// // Example with an intentional error (unknown variable).
/// let res = run_source("print y;", &[], &mut oracle, &mut output, RunOptions::default());
/// assert!(res.is_err());
/// ```
pub fn run_source(source: &str,
                  args: &[String],
                  oracle: &mut dyn Oracle,
                  output: &mut dyn Write,
                  options: RunOptions)
                  -> Result<(), Box<dyn std::error::Error>> {
    let program = parse_source(source)?;
    Interpreter::new(oracle, output, args).with_options(options)
                                          .run(&program)?;
    Ok(())
}
