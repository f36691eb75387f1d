use std::fmt;

/// Text used in messages when the input ended where a character was expected.
pub const END_OF_INPUT: &str = "<EOL>";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing an expression.
///
/// Every variant records the byte offset of the offending character in the
/// original input. At end of input the offset equals the input length.
///
/// # Example
/// ```
/// use calx::{error::SyntaxError, parse};
///
/// let err = parse("(1").unwrap_err();
/// assert_eq!(err, SyntaxError::ExpectedClosingParen { found: None, position: 2 });
/// assert_eq!(err.to_string(), "Expected ')' but got '<EOL>' at position 2");
/// ```
pub enum SyntaxError {
    /// No number, `-` or `(` could be read where an operand was required.
    ExpectedOperand {
        /// The character found instead, `None` at end of input.
        found:    Option<char>,
        /// Byte offset of the character found.
        position: usize,
    },
    /// A parenthesized expression was not closed.
    ExpectedClosingParen {
        /// The character found instead, `None` at end of input.
        found:    Option<char>,
        /// Byte offset of the character found.
        position: usize,
    },
    /// A complete expression was followed by more input.
    UnexpectedTrailing {
        /// The first character after the expression.
        found:    char,
        /// Byte offset of that character.
        position: usize,
    },
    /// Parentheses were nested too deeply.
    NestingTooDeep {
        /// The deepest nesting accepted.
        limit:    usize,
        /// Byte offset where the limit was exceeded.
        position: usize,
    },
}

impl SyntaxError {
    /// Returns the byte offset in the input where the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::ExpectedOperand { position, .. }
            | Self::ExpectedClosingParen { position, .. }
            | Self::UnexpectedTrailing { position, .. }
            | Self::NestingTooDeep { position, .. } => *position,
        }
    }
}

struct Found(Option<char>);

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(c) => write!(f, "'{c}'"),
            None => write!(f, "'{END_OF_INPUT}'"),
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExpectedOperand { found, position } => {
                write!(f,
                       "Expected number or '(' but got {} at position {position}",
                       Found(*found))
            },

            Self::ExpectedClosingParen { found, position } => {
                write!(f, "Expected ')' but got {} at position {position}", Found(*found))
            },

            Self::UnexpectedTrailing { found, position } => write!(f,
                                                                   "Unexpected character after expression: '{found}' at position {position}"),

            Self::NestingTooDeep { limit, position } => write!(f,
                                                               "Expression nested deeper than {limit} levels at position {position}"),
        }
    }
}

impl std::error::Error for SyntaxError {}
