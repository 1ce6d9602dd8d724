//! # fcalc
//!
//! fcalc is an interactive calculator for whitespace-separated arithmetic
//! formulas, written in Rust. It tokenizes a formula, builds an expression
//! tree ordered by operator priority, and evaluates the tree to a single
//! floating-point result.

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

use crate::{
    error::ParseError,
    interpreter::{builder::build_expression, tokenizer::tokenize},
};

/// Defines the structure of parsed formulas.
///
/// This module declares the `Expr` enum and the `BinaryOperator` type that
/// represent a formula as a tree of binary operations over numeric literals.
/// The tree is built by the builder and evaluated recursively.
///
/// # Responsibilities
/// - Defines the expression tree and the five binary operators.
/// - Assigns each operator its priority for tree construction.
/// - Evaluates finished trees to a single numeric result.
pub mod ast;
/// Provides unified error types for formula processing.
///
/// This module defines all errors that can be raised while tokenizing a
/// formula or building its expression tree. It standardizes error reporting
/// and carries the offending token or the relevant counts so failures can be
/// explained to the user.
///
/// # Responsibilities
/// - Defines the error enum for all tokenizer and builder failure modes.
/// - Attaches the rejected token text or parenthesis counts for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of formula evaluation.
///
/// This module ties together tokenizing and tree building to turn a raw
/// formula string into an evaluated result. It contains the two processing
/// stages the crate-level entry point runs in order.
///
/// # Responsibilities
/// - Coordinates the core components: tokenizer and builder.
/// - Provides the processing stages behind [`crate::evaluate_formula`].
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for numeric edge cases.
///
/// This module provides the remainder helper used during evaluation. The
/// helper truncates both operands before dividing so that the remainder
/// behaves like integer `%`, while degenerate inputs yield NaN instead of
/// aborting evaluation.
///
/// # Responsibilities
/// - Computes the truncated remainder of two `f64` values.
/// - Maps non-finite operands and a zero divisor to NaN.
pub mod util;

/// Evaluates a whitespace-separated arithmetic formula.
///
/// The formula is tokenized, assembled into an expression tree ordered by
/// operator priority, and evaluated to a single `f64`. Tokens must be
/// separated by single spaces, including parentheses.
///
/// # Errors
/// Returns a [`ParseError`] when the formula cannot be tokenized or does not
/// form exactly one well-shaped expression. Evaluation itself never fails;
/// degenerate arithmetic yields infinities or NaN.
///
/// # Examples
/// ```
/// use fcalc::evaluate_formula;
///
/// assert_eq!(evaluate_formula("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(evaluate_formula("( 2 + 3 ) * 4").unwrap(), 20.0);
///
/// // Fields must lex to exactly one token each.
/// assert!(evaluate_formula("1.2.3 + 1").is_err());
/// ```
pub fn evaluate_formula(formula: &str) -> Result<f64, ParseError> {
    let tokens = tokenize(formula)?;
    let expression = build_expression(&tokens)?;

    Ok(expression.evaluate())
}
