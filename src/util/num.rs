use log::debug;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};

/// Converts an integer to the nearest `f64`.
///
/// Integers beyond the `f64` range become an infinity of the same sign.
///
/// ## Example
/// ```
/// use calx::util::num::bigint_to_f64;
/// use num_bigint::BigInt;
///
/// assert_eq!(bigint_to_f64(&BigInt::from(42)), 42.0);
/// assert_eq!(bigint_to_f64(&BigInt::from(-7)), -7.0);
/// ```
#[must_use]
pub fn bigint_to_f64(value: &BigInt) -> f64 {
    let converted = value.to_f64().unwrap_or(if value.is_negative() {
                                                 f64::NEG_INFINITY
                                             } else {
                                                 f64::INFINITY
                                             });
    if !converted.is_finite() {
        debug!("integer with {} bits does not fit in a decimal", value.bits());
    }
    converted
}

/// Divides two integers and rounds the exact quotient to the nearest `f64`.
///
/// Both operands may be far outside the `f64` range as long as their quotient
/// is not. Returns `None` for a zero divisor.
///
/// ## Example
/// ```
/// use calx::util::num::ratio_to_f64;
/// use num_bigint::BigInt;
///
/// let ten = BigInt::from(10);
/// assert_eq!(ratio_to_f64(ten.pow(400), ten.pow(399)), Some(10.0));
/// assert_eq!(ratio_to_f64(BigInt::from(1), BigInt::from(4)), Some(0.25));
/// assert_eq!(ratio_to_f64(BigInt::from(1), BigInt::from(0)), None);
/// ```
#[must_use]
pub fn ratio_to_f64(numer: BigInt, denom: BigInt) -> Option<f64> {
    if denom.is_zero() {
        return None;
    }
    BigRational::new(numer, denom).to_f64()
}
