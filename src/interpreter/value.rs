/// Numeric results.
///
/// Defines the `Number` type returned by every grammar rule. A number is
/// either an exact integer or a decimal; not-a-number is a decimal. This module
/// also implements the arithmetic used while parsing, including promotion from
/// integer to decimal and the division-by-zero policy.
pub mod number;

pub use number::Number;
