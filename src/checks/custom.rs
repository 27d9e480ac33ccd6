//! Checks backed by a user predicate.

use std::fmt::Debug;

use crate::failure::{FailureTraits, Kind};
use crate::guard::{Guard, Message, OnAbsent, Presence};
use crate::predicate::Predicate;

impl<T, K, P, M> Guard<T, K, P, M>
where
    T: Debug,
    K: FailureTraits,
    P: Presence,
    M: Message,
{
    /// Require `predicate` to hold for the value.
    ///
    /// Closures work directly; predicates from [`crate::predicate`] also
    /// describe themselves in the failure message.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bulwark::prelude::*;
    ///
    /// let err = argument(7, "n")
    ///     .satisfies(|n: &i32| n % 2 == 0)
    ///     .unwrap_err();
    /// assert_eq!(err.to_string(), "n must satisfy the required condition but was 7");
    /// ```
    pub fn satisfies<Q>(self, predicate: Q) -> Result<Guard<T, K, P>, K::Error>
    where
        Q: Predicate<T>,
    {
        self.check(
            Kind::Generic,
            OnAbsent::Fail,
            |value| predicate.test(value),
            |name, value| {
                format!("{} must satisfy {} but was {:?}", name, predicate.description(), value)
            },
        )
    }
}
