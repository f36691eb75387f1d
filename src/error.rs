/// Syntax errors.
///
/// Defines the single error type raised while parsing an expression: an
/// operand that cannot be read, a missing closing parenthesis, characters
/// left over after a complete expression, or nesting beyond the supported
/// depth.
pub mod syntax_error;

pub use syntax_error::SyntaxError;
