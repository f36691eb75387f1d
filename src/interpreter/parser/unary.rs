use crate::{
    error::SyntaxError,
    interpreter::{
        cursor::Cursor,
        lexer::Token,
        parser::{binary::parse_additive, core::ParseResult},
        value::Number,
    },
};

/// Parses and evaluates an operand.
///
/// Leading minus signs are counted rather than recursed into, so any number
/// of them is accepted; each one flips the sign of the operand that follows.
///
/// Grammar:
/// ```text
///     unary   := "-"* primary
///     primary := number
///              | "(" additive ")"
/// ```
///
/// # Errors
/// - `ExpectedOperand` if no literal or group follows, naming the next
///   character or end of input.
/// - `ExpectedClosingParen` if a group is not closed.
/// - `NestingTooDeep` if groups nest beyond the limit.
///
/// # Example
/// ```
/// use calx::{
///     error::SyntaxError,
///     interpreter::{cursor::Cursor, parser::unary::parse_unary},
/// };
///
/// let mut cursor = Cursor::new("--(7)");
/// assert_eq!(parse_unary(&mut cursor).unwrap().as_integer(), Some(7));
///
/// let mut cursor = Cursor::new("");
/// assert_eq!(parse_unary(&mut cursor).unwrap_err(),
///            SyntaxError::ExpectedOperand { found: None, position: 0 });
/// ```
pub fn parse_unary(cursor: &mut Cursor<'_>) -> ParseResult<Number> {
    let mut negate = false;
    while cursor.is_next(|t| matches!(t, Token::Minus)) {
        negate = !negate;
    }
    let value = parse_primary(cursor)?;
    Ok(if negate { -value } else { value })
}

/// Parses a numeric literal or a parenthesized expression.
fn parse_primary(cursor: &mut Cursor<'_>) -> ParseResult<Number> {
    if cursor.is_next(|t| matches!(t, Token::Literal(_)))
       && let Some(Token::Literal(value)) = cursor.current()
    {
        return Ok(value.clone());
    }
    if cursor.is_next(|t| matches!(t, Token::LParen)) {
        return cursor.nested(parse_grouping);
    }
    let (found, position) = cursor.peek_char();
    Err(SyntaxError::ExpectedOperand { found, position })
}

/// Parses the inside of a parenthesized expression and its closing `)`.
///
/// The opening `(` has already been consumed.
fn parse_grouping(cursor: &mut Cursor<'_>) -> ParseResult<Number> {
    let value = parse_additive(cursor)?;
    if cursor.is_next(|t| matches!(t, Token::RParen)) {
        Ok(value)
    } else {
        let (found, position) = cursor.peek_char();
        Err(SyntaxError::ExpectedClosingParen { found, position })
    }
}
