//! Boxed numeric value.
//!
//! [`Number`] wraps a primitive `f64` without altering it: NaN payloads,
//! infinities and negative zero survive the round trip bit for bit.

use std::fmt;

/// An `f64` carried as a distinct value type.
///
/// Equality is IEEE-754 equality (`NaN != NaN`, `-0.0 == 0.0`). Use
/// [`Number::bits`] when bit-level identity matters.
///
/// # Examples
/// ```
/// use u_tabular::number::Number;
/// let n = Number::from(-0.0);
/// assert!(n.value().is_sign_negative());
/// assert_eq!(n.bits(), (-0.0_f64).to_bits());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Number(f64);

impl Number {
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the wrapped primitive.
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Raw IEEE-754 bit pattern of the wrapped value.
    pub fn bits(self) -> u64 {
        self.0.to_bits()
    }

    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    pub fn is_infinite(self) -> bool {
        self.0.is_infinite()
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<Number> for f64 {
    fn from(n: Number) -> Self {
        n.0
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_values_preserved() {
        for x in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -0.0, 0.0, f64::MIN_POSITIVE] {
            assert_eq!(Number::from(x).bits(), x.to_bits());
        }
    }

    #[test]
    fn test_nan_is_not_equal_to_itself() {
        let n = Number::new(f64::NAN);
        assert!(n.is_nan());
        assert_ne!(n, n);
    }

    #[test]
    fn test_into_f64() {
        let x: f64 = Number::new(2.5).into();
        assert_eq!(x, 2.5);
    }

    #[test]
    fn test_display_matches_f64() {
        assert_eq!(Number::new(1.5).to_string(), "1.5");
        assert_eq!(Number::new(f64::NEG_INFINITY).to_string(), "-inf");
    }
}
