use crate::interpreter::{
    cursor::Cursor,
    lexer::Token,
    parser::{core::ParseResult, unary::parse_unary},
    value::Number,
};

/// Parses and evaluates addition and subtraction.
///
/// Handles left-associative binary operators: `+` and `-`. The running value
/// starts at the first operand and each further operand is folded into it
/// from left to right, so `1-1-1` is `-1`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Example
/// ```
/// use calx::interpreter::{cursor::Cursor, parser::binary::parse_additive};
///
/// let mut cursor = Cursor::new("1 - 1 - 1)");
/// assert_eq!(parse_additive(&mut cursor).unwrap().as_integer(), Some(-1));
/// assert_eq!(cursor.rest(), ")");
/// ```
pub fn parse_additive(cursor: &mut Cursor<'_>) -> ParseResult<Number> {
    let mut result = parse_multiplicative(cursor)?;
    while cursor.is_next(|t| matches!(t, Token::Plus | Token::Minus)) {
        let adding = matches!(cursor.current(), Some(Token::Plus));
        let right = parse_multiplicative(cursor)?;
        result = if adding { result + right } else { result - right };
    }
    Ok(result)
}

/// Parses and evaluates multiplication and division.
///
/// Handles left-associative operators: `*` and `/`. A zero divisor turns
/// the running value into NaN, which then absorbs every later operation.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary)*`
pub fn parse_multiplicative(cursor: &mut Cursor<'_>) -> ParseResult<Number> {
    let mut result = parse_unary(cursor)?;
    while cursor.is_next(|t| matches!(t, Token::Star | Token::Slash)) {
        let multiplying = matches!(cursor.current(), Some(Token::Star));
        let right = parse_unary(cursor)?;
        result = if multiplying { result * right } else { result / right };
    }
    Ok(result)
}
