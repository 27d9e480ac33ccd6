//! Tolerance-aware checks for floating point values
//!
//! Every check takes an explicit `tolerance`. Two values whose distance is
//! within the tolerance are treated as equal, which makes them satisfy `<=`
//! and `>=` but neither `<` nor `>`:
//!
//! ```rust
//! use bulwark::prelude::*;
//!
//! assert!(argument(1.0, "f").equal_within(1.0005, 0.01).is_ok());
//! assert!(argument(1.0, "f").equal_within(1.0005, 0.0001).is_err());
//!
//! // 0.995 < 1.0, but the two are within tolerance
//! assert!(argument(0.995, "f").less_than_within(1.0, 0.01).is_err());
//! assert!(argument(0.995, "f").at_least_within(1.0, 0.01).is_ok());
//! ```

use std::fmt::Debug;
use std::ops::Sub;

use crate::failure::{FailureTraits, Kind};
use crate::guard::{Guard, Message, OnAbsent, Presence};

/// Floating point types usable with the `*_within` checks.
pub trait Approx: Copy + PartialOrd + Debug + Sub<Output = Self> {
    /// Absolute value.
    fn magnitude(self) -> Self;

    /// Returns true unless the value is NaN or infinite.
    fn is_finite_value(self) -> bool;

    /// Returns true if `self` and `other` are within `tolerance` of each other.
    #[inline]
    fn close_to(self, other: Self, tolerance: Self) -> bool {
        (self - other).magnitude() <= tolerance
    }
}

impl Approx for f32 {
    #[inline]
    fn magnitude(self) -> Self {
        self.abs()
    }

    #[inline]
    fn is_finite_value(self) -> bool {
        self.is_finite()
    }
}

impl Approx for f64 {
    #[inline]
    fn magnitude(self) -> Self {
        self.abs()
    }

    #[inline]
    fn is_finite_value(self) -> bool {
        self.is_finite()
    }
}

fn below<T: Approx>(value: T, bound: T, tolerance: T) -> bool {
    !value.close_to(bound, tolerance) && value < bound
}

fn above<T: Approx>(value: T, bound: T, tolerance: T) -> bool {
    !value.close_to(bound, tolerance) && value > bound
}

// Written positively so NaN lands outside every range.
fn within_range<T: Approx>(value: T, min: T, max: T, tolerance: T) -> bool {
    (value.close_to(min, tolerance) || value > min)
        && (value.close_to(max, tolerance) || value < max)
}

impl<T, K, P, M> Guard<T, K, P, M>
where
    T: Approx,
    K: FailureTraits,
    P: Presence,
    M: Message,
{
    /// Require `|value - expected| <= tolerance`.
    pub fn equal_within(self, expected: T, tolerance: T) -> Result<Guard<T, K, P>, K::Error> {
        self.check(
            Kind::Generic,
            OnAbsent::Fail,
            |value| value.close_to(expected, tolerance),
            |name, value| {
                format!(
                    "{} must be equal to {:?} (tolerance {:?}) but was {:?}",
                    name, expected, tolerance, value
                )
            },
        )
    }

    /// Require `|value - unexpected| > tolerance`. Absent values pass.
    pub fn not_equal_within(self, unexpected: T, tolerance: T) -> Result<Guard<T, K, P>, K::Error> {
        self.check(
            Kind::Generic,
            OnAbsent::Pass,
            |value| !value.close_to(unexpected, tolerance),
            |name, value| {
                format!(
                    "{} must not be equal to {:?} (tolerance {:?}) but was {:?}",
                    name, unexpected, tolerance, value
                )
            },
        )
    }

    /// Require the value to be below `bound` by more than `tolerance`.
    pub fn less_than_within(self, bound: T, tolerance: T) -> Result<Guard<T, K, P>, K::Error> {
        self.check(
            Kind::Range,
            OnAbsent::Fail,
            |value| below(*value, bound, tolerance),
            |name, value| {
                format!(
                    "{} must be less than {:?} (tolerance {:?}) but was {:?}",
                    name, bound, tolerance, value
                )
            },
        )
    }

    /// Require the value to be below `bound` or within `tolerance` of it.
    pub fn at_most_within(self, bound: T, tolerance: T) -> Result<Guard<T, K, P>, K::Error> {
        self.check(
            Kind::Range,
            OnAbsent::Fail,
            |value| value.close_to(bound, tolerance) || *value < bound,
            |name, value| {
                format!(
                    "{} must be at most {:?} (tolerance {:?}) but was {:?}",
                    name, bound, tolerance, value
                )
            },
        )
    }

    /// Require the value to be above `bound` by more than `tolerance`.
    pub fn greater_than_within(self, bound: T, tolerance: T) -> Result<Guard<T, K, P>, K::Error> {
        self.check(
            Kind::Range,
            OnAbsent::Fail,
            |value| above(*value, bound, tolerance),
            |name, value| {
                format!(
                    "{} must be greater than {:?} (tolerance {:?}) but was {:?}",
                    name, bound, tolerance, value
                )
            },
        )
    }

    /// Require the value to be above `bound` or within `tolerance` of it.
    pub fn at_least_within(self, bound: T, tolerance: T) -> Result<Guard<T, K, P>, K::Error> {
        self.check(
            Kind::Range,
            OnAbsent::Fail,
            |value| value.close_to(bound, tolerance) || *value > bound,
            |name, value| {
                format!(
                    "{} must be at least {:?} (tolerance {:?}) but was {:?}",
                    name, bound, tolerance, value
                )
            },
        )
    }

    /// Require `min <= value <= max`, with both bounds widened by `tolerance`.
    pub fn in_range_within(self, min: T, max: T, tolerance: T) -> Result<Guard<T, K, P>, K::Error> {
        self.check(
            Kind::Range,
            OnAbsent::Fail,
            |value| within_range(*value, min, max, tolerance),
            |name, value| {
                format!(
                    "{} must be in range [{:?}, {:?}] (tolerance {:?}) but was {:?}",
                    name, min, max, tolerance, value
                )
            },
        )
    }

    /// Require the value to lie outside `[min, max]` by more than `tolerance`.
    /// Absent values pass.
    pub fn not_in_range_within(
        self,
        min: T,
        max: T,
        tolerance: T,
    ) -> Result<Guard<T, K, P>, K::Error> {
        self.check(
            Kind::Range,
            OnAbsent::Pass,
            |value| !within_range(*value, min, max, tolerance),
            |name, value| {
                format!(
                    "{} must not be in range [{:?}, {:?}] (tolerance {:?}) but was {:?}",
                    name, min, max, tolerance, value
                )
            },
        )
    }

    /// Reject NaN and infinite values.
    pub fn finite(self) -> Result<Guard<T, K, P>, K::Error> {
        self.check(
            Kind::Generic,
            OnAbsent::Fail,
            |value| value.is_finite_value(),
            |name, value| format!("{} must be finite but was {:?}", name, value),
        )
    }
}
