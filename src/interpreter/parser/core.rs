use log::debug;

use crate::{
    error::SyntaxError,
    interpreter::{cursor::Cursor, parser::binary::parse_additive, value::Number},
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Parses and evaluates a complete input string.
///
/// This is the entry point for expression parsing. It starts a fresh
/// [`Cursor`], evaluates the lowest-precedence rule and then requires that
/// only whitespace remains.
///
/// Grammar: `input := exp`
///
/// # Errors
/// - `UnexpectedTrailing` if characters remain after the expression.
/// - Propagates any errors from sub-expression parsing.
///
/// # Example
/// ```
/// use calx::{error::SyntaxError, interpreter::parser::core::parse_input};
///
/// assert_eq!(parse_input("  1 + 2   ").unwrap().as_integer(), Some(3));
/// assert_eq!(parse_input("1a").unwrap_err(),
///            SyntaxError::UnexpectedTrailing { found: 'a', position: 1 });
/// ```
pub fn parse_input(source: &str) -> ParseResult<Number> {
    let mut cursor = Cursor::new(source);
    let result = parse_expression(&mut cursor);
    match &result {
        Ok(value) => debug!("{source:?} evaluated to {value}"),
        Err(e) => debug!("{source:?} rejected: {e}"),
    }
    result
}

/// Parses a full expression followed by end of input.
///
/// # Errors
/// - `UnexpectedTrailing` if anything but whitespace follows the expression.
/// - Propagates any errors from sub-expression parsing.
pub fn parse_expression(cursor: &mut Cursor<'_>) -> ParseResult<Number> {
    let value = parse_additive(cursor)?;
    match cursor.peek_char() {
        (Some(found), position) => Err(SyntaxError::UnexpectedTrailing { found, position }),
        (None, _) => Ok(value),
    }
}
