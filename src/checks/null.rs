//! Presence checks.

use std::fmt::Debug;

use crate::failure::{self, FailureTraits, Kind};
use crate::guard::{absent, Guard, Message, Nullable, OnAbsent, Present};

impl<T, K, M> Guard<T, K, Nullable, M>
where
    K: FailureTraits,
    M: Message,
{
    /// Require a value; the returned guard no longer tracks absence.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bulwark::prelude::*;
    ///
    /// let id: Option<u64> = Some(9);
    /// let id = argument(id, "id").nullable().not_null()?.positive()?.into_value();
    /// assert_eq!(id, 9);
    /// # Ok::<(), ArgumentError>(())
    /// ```
    pub fn not_null(self) -> Result<Guard<T, K>, K::Error> {
        let Guard {
            value,
            name,
            message,
            ..
        } = self;

        match value {
            Some(value) => Ok(Guard::new(value, name)),
            None => {
                let text = message.resolve(|| absent(&name));
                Err(failure::raise::<K>(Kind::Null, &name, text))
            }
        }
    }

    /// Require the value to be absent.
    pub fn is_null(self) -> Result<Guard<T, K, Nullable>, K::Error>
    where
        T: Debug,
    {
        self.check(
            Kind::Generic,
            OnAbsent::Pass,
            |_| false,
            |name, value| format!("{} must be null but was {:?}", name, value),
        )
    }
}

impl<T, K, M> Guard<Option<T>, K, Present, M>
where
    K: FailureTraits,
    M: Message,
{
    /// Require `Some`, unwrapping the option into the returned guard.
    pub fn not_null(self) -> Result<Guard<T, K>, K::Error> {
        self.nullable().not_null()
    }
}
