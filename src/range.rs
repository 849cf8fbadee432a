//! Immutable closed numeric interval.
//!
//! A [`Range`] is fixed at construction. Derived quantities (length,
//! central value) are computed on each call, never cached.
//!
//! # Construction policy
//!
//! `Range::new` rejects an inverted pair (`lower > upper`) and NaN bounds
//! with [`DataError::InvalidRange`], so every live `Range` satisfies
//! `lower <= upper`. Infinite bounds are accepted.

use std::fmt;

use crate::error::DataError;

/// Closed interval `[lower, upper]` over `f64`.
///
/// # Examples
/// ```
/// use u_tabular::range::Range;
/// let r = Range::new(1.0, 5.0).unwrap();
/// assert!(r.contains(1.0) && r.contains(5.0));
/// assert!(!r.contains(6.0));
/// assert_eq!(r.length(), 4.0);
/// assert_eq!(r.central_value(), 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RangeRepr"))]
pub struct Range {
    lower: f64,
    upper: f64,
}

/// Unvalidated wire form; deserialization goes through [`Range::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RangeRepr {
    lower: f64,
    upper: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RangeRepr> for Range {
    type Error = DataError;

    fn try_from(repr: RangeRepr) -> Result<Self, Self::Error> {
        Range::new(repr.lower, repr.upper)
    }
}

impl Range {
    /// Creates the range `[lower, upper]`.
    ///
    /// # Errors
    /// Returns [`DataError::InvalidRange`] if `lower > upper` or either bound
    /// is NaN.
    pub fn new(lower: f64, upper: f64) -> Result<Self, DataError> {
        if lower.is_nan() || upper.is_nan() || lower > upper {
            tracing::debug!(lower, upper, "rejecting inverted range");
            return Err(DataError::InvalidRange { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    pub fn lower_bound(&self) -> f64 {
        self.lower
    }

    pub fn upper_bound(&self) -> f64 {
        self.upper
    }

    /// Returns `true` iff `lower <= value <= upper`. NaN is never contained.
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }

    /// `upper - lower`.
    pub fn length(&self) -> f64 {
        self.upper - self.lower
    }

    /// Midpoint `(lower + upper) / 2`.
    pub fn central_value(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }

    /// Returns `true` if this range overlaps `[lower, upper]`.
    ///
    /// An interval that ends exactly at this range's lower bound, or starts
    /// exactly at its upper bound, does not overlap. An inverted pair
    /// (`lower > upper`) never overlaps.
    pub fn intersects(&self, lower: f64, upper: f64) -> bool {
        if lower <= self.lower {
            upper > self.lower
        } else {
            upper >= lower && lower < self.upper
        }
    }

    /// Returns `true` if this range overlaps `other`.
    pub fn intersects_range(&self, other: &Range) -> bool {
        self.intersects(other.lower, other.upper)
    }

    /// Returns the value within the range closest to `value`.
    ///
    /// NaN input is returned unchanged.
    pub fn constrain(&self, value: f64) -> f64 {
        if self.contains(value) || value.is_nan() {
            value
        } else if value > self.upper {
            self.upper
        } else {
            self.lower
        }
    }

    /// Returns a range moved by `delta` along the axis.
    ///
    /// # Errors
    /// Returns [`DataError::InvalidRange`] if `delta` is NaN or the shifted
    /// bounds become NaN (for example, shifting an infinite bound by the
    /// opposite infinity).
    pub fn shift(&self, delta: f64) -> Result<Range, DataError> {
        Range::new(self.lower + delta, self.upper + delta)
    }

    /// Smallest range containing both inputs. Absent inputs are ignored;
    /// returns `None` only when both are absent.
    pub fn combine(a: Option<&Range>, b: Option<&Range>) -> Option<Range> {
        match (a, b) {
            (None, None) => None,
            (Some(r), None) | (None, Some(r)) => Some(*r),
            (Some(a), Some(b)) => Some(Range {
                lower: a.lower.min(b.lower),
                upper: a.upper.max(b.upper),
            }),
        }
    }

    /// Smallest range containing `range` and `value`.
    ///
    /// An absent `range` yields the degenerate range `[value, value]`.
    ///
    /// # Errors
    /// Returns [`DataError::InvalidRange`] if `value` is NaN and `range` is
    /// absent.
    pub fn expand_to_include(range: Option<&Range>, value: f64) -> Result<Range, DataError> {
        match range {
            None => Range::new(value, value),
            Some(r) if value < r.lower => Ok(Range {
                lower: value,
                upper: r.upper,
            }),
            Some(r) if value > r.upper => Ok(Range {
                lower: r.lower,
                upper: value,
            }),
            Some(r) => Ok(*r),
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Range[{},{}]", self.lower, self.upper)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn r(lower: f64, upper: f64) -> Range {
        Range::new(lower, upper).unwrap()
    }

    // --- contains ---

    #[test]
    fn test_contains_inclusive_bounds() {
        let range = r(1.0, 5.0);
        assert!(range.contains(1.0));
        assert!(range.contains(3.0));
        assert!(range.contains(5.0));
        assert!(!range.contains(0.0));
        assert!(!range.contains(6.0));
    }

    #[test]
    fn test_contains_nan() {
        assert!(!r(1.0, 5.0).contains(f64::NAN));
    }

    #[test]
    fn test_contains_degenerate() {
        let range = r(5.0, 5.0);
        assert!(range.contains(5.0));
        assert!(!range.contains(5.0 + f64::EPSILON * 8.0));
    }

    // --- length / central value ---

    #[test]
    fn test_length() {
        assert_eq!(r(1.0, 5.0).length(), 4.0);
        assert!((r(1.0, 1.1).length() - 0.1).abs() < 1e-4);
        assert_eq!(r(1.0, 1_000_000.0).length(), 999_999.0);
        assert_eq!(r(5.0, 5.0).length(), 0.0);
        assert_eq!(r(-5.0, 5.0).length(), 10.0);
    }

    #[test]
    fn test_central_value() {
        assert_eq!(r(1.0, 5.0).central_value(), 3.0);
        assert!((r(1.0, 1.1).central_value() - 1.05).abs() < 1e-4);
        assert_eq!(r(5.0, 5.0).central_value(), 5.0);
        assert_eq!(r(-5.0, 5.0).central_value(), 0.0);
        assert_eq!(r(1.0, 1_000_000.0).central_value(), 500_000.5);
    }

    #[test]
    fn test_infinite_bounds() {
        let range = r(f64::NEG_INFINITY, f64::INFINITY);
        assert!(range.contains(0.0));
        assert_eq!(range.length(), f64::INFINITY);
        assert!(range.central_value().is_nan());
    }

    // --- bounds ---

    #[test]
    fn test_bounds() {
        let range = r(-5.0, 5.0);
        assert_eq!(range.lower_bound(), -5.0);
        assert_eq!(range.upper_bound(), 5.0);
    }

    // --- construction policy ---

    #[test]
    fn test_inverted_rejected() {
        assert_eq!(
            Range::new(5.0, 1.0),
            Err(DataError::InvalidRange {
                lower: 5.0,
                upper: 1.0
            })
        );
    }

    #[test]
    fn test_nan_bound_rejected() {
        assert!(Range::new(f64::NAN, 1.0).is_err());
        assert!(Range::new(1.0, f64::NAN).is_err());
    }

    // --- intersects ---

    #[test]
    fn test_intersects() {
        let range = r(0.0, 1.0);
        assert!(!range.intersects(-2.0, -1.0));
        assert!(!range.intersects(-2.0, 0.0));
        assert!(range.intersects(-2.0, 0.5));
        assert!(range.intersects(-2.0, 2.0));
        assert!(range.intersects(0.0, 0.5));
        assert!(range.intersects(0.5, 0.5));
        assert!(range.intersects(0.5, 2.0));
        assert!(!range.intersects(1.0, 2.0));
        assert!(!range.intersects(0.5, 0.25));
        assert!(range.intersects_range(&r(0.25, 0.75)));
    }

    // --- constrain ---

    #[test]
    fn test_constrain() {
        let range = r(0.0, 1.0);
        assert_eq!(range.constrain(0.5), 0.5);
        assert_eq!(range.constrain(-1.0), 0.0);
        assert_eq!(range.constrain(2.0), 1.0);
        assert_eq!(range.constrain(f64::INFINITY), 1.0);
        assert_eq!(range.constrain(f64::NEG_INFINITY), 0.0);
        assert!(range.constrain(f64::NAN).is_nan());
    }

    // --- shift ---

    #[test]
    fn test_shift() {
        let shifted = r(-1.0, 2.0).shift(3.0).unwrap();
        assert_eq!(shifted, r(2.0, 5.0));
        assert!(r(0.0, 1.0).shift(f64::NAN).is_err());
    }

    // --- combine / expand ---

    #[test]
    fn test_combine() {
        let a = r(1.0, 2.0);
        let b = r(-1.0, 1.5);
        assert_eq!(Range::combine(None, None), None);
        assert_eq!(Range::combine(Some(&a), None), Some(a));
        assert_eq!(Range::combine(None, Some(&b)), Some(b));
        assert_eq!(Range::combine(Some(&a), Some(&b)), Some(r(-1.0, 2.0)));
    }

    #[test]
    fn test_expand_to_include() {
        let a = r(1.0, 2.0);
        assert_eq!(Range::expand_to_include(Some(&a), 5.0).unwrap(), r(1.0, 5.0));
        assert_eq!(Range::expand_to_include(Some(&a), -5.0).unwrap(), r(-5.0, 2.0));
        assert_eq!(Range::expand_to_include(Some(&a), 1.5).unwrap(), a);
        assert_eq!(Range::expand_to_include(None, 1.5).unwrap(), r(1.5, 1.5));
        assert!(Range::expand_to_include(None, f64::NAN).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(r(1.0, 5.5).to_string(), "Range[1,5.5]");
    }
}
