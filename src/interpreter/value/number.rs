use std::{
    fmt,
    ops::{Add, Div, Mul, Neg, Sub},
};

use log::debug;
use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};

use crate::util::num::{bigint_to_f64, ratio_to_f64};

/// The value of an expression or of any of its sub-expressions.
///
/// Literals written without a decimal point produce `Integer`, which is exact
/// and unbounded; literals with one produce `Decimal`. Mixing the two in an
/// operation produces `Decimal`. Division always produces `Decimal`, and
/// dividing by zero produces `Decimal(NaN)` instead of failing.
///
/// Equality is numeric, so `Integer(3) == Decimal(3.0)`. Match on the variant
/// when the representation matters.
///
/// # Example
/// ```
/// use calx::interpreter::value::Number;
///
/// let sum = Number::from(1) + Number::from(0.5);
/// assert!(matches!(sum, Number::Decimal(_)));
/// assert_eq!(sum, Number::from(1.5));
///
/// let quotient = Number::from(9) / Number::from(3);
/// assert!(matches!(quotient, Number::Decimal(_)));
/// assert_eq!(quotient, Number::from(3));
///
/// assert!((Number::from(1) / Number::from(0)).is_nan());
/// ```
#[derive(Debug, Clone)]
pub enum Number {
    /// An exact integer of any size.
    Integer(BigInt),
    /// A double precision decimal, possibly NaN.
    Decimal(f64),
}

impl From<BigInt> for Number {
    fn from(v: BigInt) -> Self {
        Self::Integer(v)
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Self::Integer(v.into())
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::Decimal(v)
    }
}

impl Number {
    /// Returns the value as an `f64`, rounding integers to the nearest one.
    ///
    /// # Example
    /// ```
    /// use calx::interpreter::value::Number;
    ///
    /// assert_eq!(Number::from(10).as_f64(), 10.0);
    /// assert_eq!(Number::from(0.25).as_f64(), 0.25);
    /// ```
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Integer(n) => bigint_to_f64(n),
            Self::Decimal(d) => *d,
        }
    }

    /// Returns the integer if this value is one and fits in an `i64`.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => n.to_i64(),
            Self::Decimal(_) => None,
        }
    }

    /// Returns `true` for the not-a-number result of a division by zero.
    #[must_use]
    pub const fn is_nan(&self) -> bool {
        match self {
            Self::Integer(_) => false,
            Self::Decimal(d) => d.is_nan(),
        }
    }

    /// Returns `true` if the value equals zero, including `-0.0`.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Integer(n) => n.is_zero(),
            Self::Decimal(d) => *d == 0.0,
        }
    }
}

// Integer pairs stay exact; anything involving a decimal is computed in `f64`.
macro_rules! op {
    ( $t: ident, $f: ident ) => {
        impl $t for Number {
            type Output = Self;

            fn $f(self, rhs: Self) -> Self::Output {
                match (self, rhs) {
                    (Self::Integer(l), Self::Integer(r)) => Self::Integer(l.$f(r)),
                    (l, r) => Self::Decimal(l.as_f64().$f(r.as_f64())),
                }
            }
        }
    };
}

op!(Add, add);
op!(Sub, sub);
op!(Mul, mul);

impl Div for Number {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        if rhs.is_zero() {
            debug!("division of {self} by zero yields NaN");
            return Self::Decimal(f64::NAN);
        }
        match (self, rhs) {
            (Self::Integer(l), Self::Integer(r)) => {
                Self::Decimal(ratio_to_f64(l, r).unwrap_or(f64::NAN))
            },
            (l, r) => Self::Decimal(l.as_f64() / r.as_f64()),
        }
    }
}

impl Neg for Number {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Self::Integer(n) => Self::Integer(-n),
            Self::Decimal(d) => Self::Decimal(-d),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(l), Self::Integer(r)) => l == r,
            (l, r) => l.as_f64() == r.as_f64(),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            // Keep a visible point so integral decimals are not read as integers.
            Self::Decimal(d) if d.is_finite() && d.fract() == 0.0 => write!(f, "{d}.0"),
            Self::Decimal(d) => write!(f, "{d}"),
        }
    }
}
