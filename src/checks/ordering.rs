//! Ordering and range checks.

use std::fmt::Debug;

use crate::failure::{FailureTraits, Kind};
use crate::guard::{Guard, Message, OnAbsent, Presence};

impl<T, K, P, M> Guard<T, K, P, M>
where
    K: FailureTraits,
    P: Presence,
    M: Message,
{
    /// Require `value > bound`.
    pub fn greater_than(self, bound: T) -> Result<Guard<T, K, P>, K::Error>
    where
        T: PartialOrd + Debug,
    {
        self.check(
            Kind::Range,
            OnAbsent::Fail,
            |value| *value > bound,
            |name, value| format!("{} must be greater than {:?} but was {:?}", name, bound, value),
        )
    }

    /// Require `value >= bound`.
    pub fn at_least(self, bound: T) -> Result<Guard<T, K, P>, K::Error>
    where
        T: PartialOrd + Debug,
    {
        self.check(
            Kind::Range,
            OnAbsent::Fail,
            |value| *value >= bound,
            |name, value| format!("{} must be at least {:?} but was {:?}", name, bound, value),
        )
    }

    /// Require `value < bound`.
    pub fn less_than(self, bound: T) -> Result<Guard<T, K, P>, K::Error>
    where
        T: PartialOrd + Debug,
    {
        self.check(
            Kind::Range,
            OnAbsent::Fail,
            |value| *value < bound,
            |name, value| format!("{} must be less than {:?} but was {:?}", name, bound, value),
        )
    }

    /// Require `value <= bound`.
    pub fn at_most(self, bound: T) -> Result<Guard<T, K, P>, K::Error>
    where
        T: PartialOrd + Debug,
    {
        self.check(
            Kind::Range,
            OnAbsent::Fail,
            |value| *value <= bound,
            |name, value| format!("{} must be at most {:?} but was {:?}", name, bound, value),
        )
    }

    /// Require `min <= value <= max`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bulwark::prelude::*;
    ///
    /// let err = invariant(1, "y").in_range(2, 5).unwrap_err();
    /// assert_eq!(err.message(), "y must be in range [2, 5] but was 1");
    /// ```
    pub fn in_range(self, min: T, max: T) -> Result<Guard<T, K, P>, K::Error>
    where
        T: PartialOrd + Debug,
    {
        self.check(
            Kind::Range,
            OnAbsent::Fail,
            |value| *value >= min && *value <= max,
            |name, value| {
                format!("{} must be in range [{:?}, {:?}] but was {:?}", name, min, max, value)
            },
        )
    }

    /// Require the value to lie outside `[min, max]`. Absent values pass.
    pub fn not_in_range(self, min: T, max: T) -> Result<Guard<T, K, P>, K::Error>
    where
        T: PartialOrd + Debug,
    {
        self.check(
            Kind::Range,
            OnAbsent::Pass,
            |value| !(*value >= min && *value <= max),
            |name, value| {
                format!("{} must not be in range [{:?}, {:?}] but was {:?}", name, min, max, value)
            },
        )
    }

    /// Require the value to be greater than `T::default()`.
    pub fn positive(self) -> Result<Guard<T, K, P>, K::Error>
    where
        T: PartialOrd + Default + Debug,
    {
        self.greater_than(T::default())
    }

    /// Require the value to be less than `T::default()`.
    pub fn negative(self) -> Result<Guard<T, K, P>, K::Error>
    where
        T: PartialOrd + Default + Debug,
    {
        self.less_than(T::default())
    }
}
