//! Equality and membership-in-a-list checks.

use std::fmt::Debug;

use crate::failure::{FailureTraits, Kind};
use crate::guard::{Guard, Message, OnAbsent, Presence};

impl<T, K, P, M> Guard<T, K, P, M>
where
    K: FailureTraits,
    P: Presence,
    M: Message,
{
    /// Require the value to equal `expected`.
    pub fn equal<U>(self, expected: U) -> Result<Guard<T, K, P>, K::Error>
    where
        T: PartialEq<U> + Debug,
        U: Debug,
    {
        self.check(
            Kind::Generic,
            OnAbsent::Fail,
            |value| *value == expected,
            |name, value| format!("{} must be equal to {:?} but was {:?}", name, expected, value),
        )
    }

    /// Require the value to differ from `unexpected`. Absent values pass.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bulwark::prelude::*;
    ///
    /// let err = argument(0, "x").not_equal(0).unwrap_err();
    /// assert!(err.is_generic());
    /// assert_eq!(err.to_string(), "x must not be equal to 0");
    /// ```
    pub fn not_equal<U>(self, unexpected: U) -> Result<Guard<T, K, P>, K::Error>
    where
        T: PartialEq<U>,
        U: Debug,
    {
        self.check(
            Kind::Generic,
            OnAbsent::Pass,
            |value| *value != unexpected,
            |name, _| format!("{} must not be equal to {:?}", name, unexpected),
        )
    }

    /// Require the value to equal one of `candidates`.
    pub fn one_of<U>(self, candidates: &[U]) -> Result<Guard<T, K, P>, K::Error>
    where
        T: PartialEq<U> + Debug,
        U: Debug,
    {
        self.check(
            Kind::Generic,
            OnAbsent::Fail,
            |value| candidates.iter().any(|candidate| *value == *candidate),
            |name, value| format!("{} must be one of {:?} but was {:?}", name, candidates, value),
        )
    }

    /// Require the value to equal none of `excluded`. Absent values pass.
    pub fn not_one_of<U>(self, excluded: &[U]) -> Result<Guard<T, K, P>, K::Error>
    where
        T: PartialEq<U> + Debug,
        U: Debug,
    {
        self.check(
            Kind::Generic,
            OnAbsent::Pass,
            |value| !excluded.iter().any(|candidate| *value == *candidate),
            |name, value| format!("{} must not be one of {:?} but was {:?}", name, excluded, value),
        )
    }
}
