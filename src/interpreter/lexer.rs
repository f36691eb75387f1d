use logos::Logos;

use crate::interpreter::value::Number;

/// Represents a lexical token in an expression.
///
/// Whitespace between tokens is skipped. Any other character that does not
/// start a token is a lexing error; the parser reports it as the character
/// found where something else was expected.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"\s+")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `007`, `3.14`, `.5` or `000.1`.
    ///
    /// A literal with a decimal point is a [`Number::Decimal`]. A literal
    /// without one is an exact [`Number::Integer`] of any length.
    #[regex(r"[0-9]*\.[0-9]+", parse_decimal)]
    #[regex(r"[0-9]+", parse_integer)]
    Literal(Number),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Parses a decimal literal from the current token slice.
///
/// # Returns
/// - `Some(Number::Decimal)`: The parsed value.
/// - `None`: If the slice is not a valid float.
fn parse_decimal(lex: &logos::Lexer<Token>) -> Option<Number> {
    lex.slice().parse().ok().map(Number::Decimal)
}

/// Parses an integer literal from the current token slice.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<Number> {
    lex.slice().parse().ok().map(Number::Integer)
}
