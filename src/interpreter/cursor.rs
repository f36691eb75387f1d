use log::trace;
use logos::Logos;

use crate::{error::SyntaxError, interpreter::lexer::Token};

/// Deepest nesting of parentheses accepted.
pub const MAX_DEPTH: usize = 512;

/// Per-call parsing state.
///
/// Holds the input not yet consumed and the token matched last. The
/// remaining input is always a suffix of the source and only ever shrinks.
/// A cursor is created by each call to [`crate::parse`] and dropped when it
/// returns, so no state is carried from one expression to the next.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source:  &'a str,
    rest:    &'a str,
    current: Option<Token>,
    depth:   usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at the start of `source`.
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self { source,
               rest: source,
               current: None,
               depth: 0 }
    }

    /// Attempts to match one token at the current position.
    ///
    /// Whitespace before the token is skipped. If the token satisfies
    /// `accept`, it is consumed along with any whitespace after it and becomes
    /// [`Cursor::current`]. Otherwise nothing is consumed.
    ///
    /// # Example
    /// ```
    /// use calx::interpreter::{cursor::Cursor, lexer::Token};
    ///
    /// let mut cursor = Cursor::new("  + 2");
    /// assert!(!cursor.is_next(|t| matches!(t, Token::Star)));
    /// assert_eq!(cursor.rest(), "  + 2");
    ///
    /// assert!(cursor.is_next(|t| matches!(t, Token::Plus | Token::Minus)));
    /// assert_eq!(cursor.current(), Some(&Token::Plus));
    /// assert_eq!(cursor.rest(), "2");
    /// ```
    pub fn is_next(&mut self, accept: impl Fn(&Token) -> bool) -> bool {
        let mut lexer = Token::lexer(self.rest);
        match lexer.next() {
            Some(Ok(token)) if accept(&token) => {
                self.rest = lexer.remainder().trim_start();
                trace!("matched {token:?}, {} bytes left", self.rest.len());
                self.current = Some(token);
                true
            },
            _ => false,
        }
    }

    /// Returns the token matched by the last successful [`Cursor::is_next`].
    #[must_use]
    pub const fn current(&self) -> Option<&Token> {
        self.current.as_ref()
    }

    /// Returns the input not yet consumed.
    #[must_use]
    pub const fn rest(&self) -> &'a str {
        self.rest
    }

    /// Returns the next non-whitespace character and its byte offset in the
    /// source. At end of input the character is `None` and the offset is the
    /// source length.
    #[must_use]
    pub fn peek_char(&self) -> (Option<char>, usize) {
        let rest = self.rest.trim_start();
        (rest.chars().next(), self.source.len() - rest.len())
    }

    /// Runs `rule` one parenthesis level deeper.
    ///
    /// # Errors
    /// Returns [`SyntaxError::NestingTooDeep`] once more than [`MAX_DEPTH`]
    /// levels are open, and otherwise whatever `rule` returns.
    pub fn nested<T>(&mut self,
                     rule: impl FnOnce(&mut Self) -> Result<T, SyntaxError>)
                     -> Result<T, SyntaxError> {
        if self.depth >= MAX_DEPTH {
            let (_, position) = self.peek_char();
            return Err(SyntaxError::NestingTooDeep { limit: MAX_DEPTH,
                                                     position });
        }
        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }
}
