/// Entry point of the grammar.
///
/// Creates the session state for one call, parses a full expression and
/// rejects any input left over after it.
pub mod core;

/// Binary operator rules.
///
/// Implements `exp` (addition and subtraction) and `term` (multiplication and
/// division), both left-associative.
pub mod binary;

/// Operand rule.
///
/// Implements `factor`: numeric literals, unary negation and parenthesized
/// sub-expressions.
pub mod unary;
