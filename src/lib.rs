//! # calx
//!
//! calx is an arithmetic expression evaluator written in Rust.
//! It accepts integer and decimal literals, the four binary operators, unary
//! negation and parentheses, and evaluates the expression while it is being
//! parsed. No syntax tree is built.

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

use crate::{error::SyntaxError, interpreter::value::Number};

/// Provides the error type reported for malformed expressions.
///
/// Every failure of [`parse`] is a [`SyntaxError`]. It names what the grammar
/// expected, the character actually found (or end of input) and where in the
/// input that character sits.
pub mod error;
/// Tokenizes, parses and evaluates expressions.
///
/// # Responsibilities
/// - Defines the lexical patterns of the language.
/// - Holds the per-call session state: remaining input and last token.
/// - Implements the three grammar rules, computing values as they descend.
/// - Defines the numeric result type and its promotion rules.
pub mod interpreter;
/// Numeric conversion helpers shared by the value type.
pub mod util;

/// Evaluates an arithmetic expression.
///
/// The grammar is:
/// ```text
///     exp    := term   (("+" | "-") term)*
///     term   := factor (("*" | "/") factor)*
///     factor := number | "-" factor | "(" exp ")"
/// ```
/// Whitespace is allowed anywhere between tokens. Each call is independent;
/// nothing is remembered from one call to the next.
///
/// # Errors
/// Returns a [`SyntaxError`] if no valid expression starts at the beginning
/// of the input, if a closing parenthesis is missing, or if characters remain
/// after a complete expression.
///
/// # Examples
/// ```
/// use calx::{interpreter::value::Number, parse};
///
/// assert_eq!(parse("1 + 2 * 3").unwrap(), Number::from(7));
/// assert_eq!(parse("(1 + 2) * 3").unwrap(), Number::from(9));
/// assert!(parse("1 / 0").unwrap().is_nan());
///
/// let err = parse("1 + a").unwrap_err();
/// assert_eq!(err.to_string(), "Expected number or '(' but got 'a' at position 4");
/// ```
pub fn parse(expression: &str) -> Result<Number, SyntaxError> {
    interpreter::parser::core::parse_input(expression)
}
