//! Boolean checks.

use crate::failure::{FailureTraits, Kind};
use crate::guard::{Guard, Message, OnAbsent, Presence};

impl<K, P, M> Guard<bool, K, P, M>
where
    K: FailureTraits,
    P: Presence,
    M: Message,
{
    /// Require `true`.
    pub fn is_true(self) -> Result<Guard<bool, K, P>, K::Error> {
        self.check(
            Kind::Generic,
            OnAbsent::Fail,
            |value| *value,
            |name, _| format!("{} must be true", name),
        )
    }

    /// Require `false`.
    pub fn is_false(self) -> Result<Guard<bool, K, P>, K::Error> {
        self.check(
            Kind::Generic,
            OnAbsent::Fail,
            |value| !*value,
            |name, _| format!("{} must be false", name),
        )
    }
}
