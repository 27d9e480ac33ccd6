//! Bit flag checks.
//!
//! Works for any `Copy` type with `&` and a `Default` zero, which covers the
//! integer primitives and most generated flag types.

use std::fmt::Debug;
use std::ops::BitAnd;

use crate::failure::{FailureTraits, Kind};
use crate::guard::{Guard, Message, OnAbsent, Presence};

impl<T, K, P, M> Guard<T, K, P, M>
where
    T: Copy + BitAnd<Output = T> + PartialEq + Default + Debug,
    K: FailureTraits,
    P: Presence,
    M: Message,
{
    /// Require every bit of `flags` to be set.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bulwark::prelude::*;
    ///
    /// const READ: u8 = 0b001;
    /// const WRITE: u8 = 0b010;
    ///
    /// assert!(argument(READ | WRITE, "mode").has_flags(READ | WRITE).is_ok());
    /// assert!(argument(READ, "mode").has_flags(READ | WRITE).unwrap_err().is_range());
    /// ```
    pub fn has_flags(self, flags: T) -> Result<Guard<T, K, P>, K::Error> {
        self.check(
            Kind::Range,
            OnAbsent::Fail,
            |value| *value & flags == flags,
            |name, value| format!("{} must have flags {:?} set but was {:?}", name, flags, value),
        )
    }

    /// Require at least one bit of `flags` to be set.
    pub fn has_any_flag(self, flags: T) -> Result<Guard<T, K, P>, K::Error> {
        self.check(
            Kind::Range,
            OnAbsent::Fail,
            |value| *value & flags != T::default(),
            |name, value| {
                format!("{} must have any of flags {:?} set but was {:?}", name, flags, value)
            },
        )
    }

    /// Require every bit of `flags` to be clear. Absent values pass.
    pub fn lacks_flags(self, flags: T) -> Result<Guard<T, K, P>, K::Error> {
        self.check(
            Kind::Range,
            OnAbsent::Pass,
            |value| *value & flags == T::default(),
            |name, value| format!("{} must not have flags {:?} set but was {:?}", name, flags, value),
        )
    }
}
