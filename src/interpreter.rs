/// The lexer module defines the tokens of the expression language.
///
/// Tokens are numeric literals, the four operators and parentheses. The
/// lexer is never run over the whole input up front; the parser asks it for
/// one token at a time at the current position.
pub mod lexer;
/// Session state threaded through the parser.
///
/// The cursor owns the remaining input and the last matched token for one
/// call, and performs the single-token matching step every rule relies on.
pub mod cursor;
/// The parser module evaluates expressions by recursive descent.
///
/// Each grammar rule consumes its tokens and returns the value computed so
/// far. Precedence follows from which rule calls which.
///
/// # Responsibilities
/// - Implements the `exp`, `term` and `factor` rules.
/// - Reports syntax errors with the character found and its position.
/// - Rejects input left over after a complete expression.
pub mod parser;
/// The value module defines the numeric result type.
///
/// # Responsibilities
/// - Defines the `Number` enum with integer and decimal variants.
/// - Implements arithmetic with integer-to-decimal promotion.
/// - Produces NaN for division by zero.
pub mod value;
