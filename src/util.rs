/// Numeric conversion helpers.
///
/// Integers are exact and unbounded. They become `f64` only when an operation
/// mixes them with a decimal or divides. The helpers here perform those
/// conversions with the best rounding available.
pub mod num;
