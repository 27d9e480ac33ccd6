//! Emptiness, membership and count checks on collection-like values
//!
//! Available on any guard whose value implements
//! [`AsCollection`](crate::introspect::AsCollection). Each check asks the
//! [introspector](crate::introspect) only the question it needs, so a type
//! without a size accessor is walked no further than the bound being tested:
//! `not_empty` pulls one item, `count_at_most(k)` at most `k + 1`.
//!
//! ```rust
//! use bulwark::prelude::*;
//!
//! let ids = vec![3, 5, 8];
//! argument(&ids, "ids").not_empty()?.contains(&5)?.count_at_most(10)?;
//!
//! let err = argument(ids, "ids").count_at_least(4).unwrap_err();
//! assert_eq!(err.to_string(), "ids must have at least 4 items but had 3");
//! # Ok::<(), ArgumentError>(())
//! ```

use std::cell::Cell;
use std::fmt::Debug;

use crate::failure::{FailureTraits, Kind};
use crate::guard::{Guard, Message, OnAbsent, Presence};
use crate::introspect::{self, AsCollection, Collection, Count};

/// Checks on collection values.
pub trait CollectionChecks: Sized {
    /// The guard returned when a check passes.
    type Passed;
    /// The error returned when a check fails.
    type Error;
    /// The collection's element type.
    type Item;

    /// Require no items.
    fn is_empty(self) -> Result<Self::Passed, Self::Error>;

    /// Require at least one item.
    fn not_empty(self) -> Result<Self::Passed, Self::Error>;

    /// Require `item` to be in the collection.
    fn contains(self, item: &Self::Item) -> Result<Self::Passed, Self::Error>
    where
        Self::Item: PartialEq + Debug;

    /// Require `item` not to be in the collection. Absent values pass.
    fn not_contains(self, item: &Self::Item) -> Result<Self::Passed, Self::Error>
    where
        Self::Item: PartialEq + Debug;

    /// Require exactly `count` items.
    fn count_is(self, count: usize) -> Result<Self::Passed, Self::Error>;

    /// Require at least `min` items.
    fn count_at_least(self, min: usize) -> Result<Self::Passed, Self::Error>;

    /// Require at most `max` items.
    fn count_at_most(self, max: usize) -> Result<Self::Passed, Self::Error>;

    /// Require between `min` and `max` items, inclusive.
    fn count_in_range(self, min: usize, max: usize) -> Result<Self::Passed, Self::Error>;
}

type Item<T> = <<T as AsCollection>::Target as Collection>::Item;

impl<T, K, P, M> Guard<T, K, P, M>
where
    T: AsCollection,
    K: FailureTraits,
    P: Presence,
    M: Message,
{
    /// Count with an upper bound and check the result, reusing the count in
    /// the failure message.
    fn count_check<F, D>(self, limit: usize, test: F, describe: D) -> Result<Guard<T, K, P>, K::Error>
    where
        F: FnOnce(usize) -> bool,
        D: FnOnce(&str, Count) -> String,
    {
        let seen = Cell::new(Count::Exact(0));
        self.check(
            Kind::Range,
            OnAbsent::Fail,
            |value| {
                seen.set(introspect::count_up_to(value.as_collection(), limit));
                test(seen.get().value())
            },
            |name, _| describe(name, seen.get()),
        )
    }
}

impl<T, K, P, M> CollectionChecks for Guard<T, K, P, M>
where
    T: AsCollection,
    K: FailureTraits,
    P: Presence,
    M: Message,
{
    type Passed = Guard<T, K, P>;
    type Error = K::Error;
    type Item = Item<T>;

    fn is_empty(self) -> Result<Self::Passed, Self::Error> {
        self.check(
            Kind::Generic,
            OnAbsent::Fail,
            |value| introspect::count_up_to(value.as_collection(), 1).value() == 0,
            |name, _| format!("{} must be empty", name),
        )
    }

    fn not_empty(self) -> Result<Self::Passed, Self::Error> {
        self.check(
            Kind::Generic,
            OnAbsent::Fail,
            |value| introspect::count_up_to(value.as_collection(), 1).value() > 0,
            |name, _| format!("{} must not be empty", name),
        )
    }

    fn contains(self, item: &Item<T>) -> Result<Self::Passed, Self::Error>
    where
        Item<T>: PartialEq + Debug,
    {
        self.check(
            Kind::Generic,
            OnAbsent::Fail,
            |value| introspect::contains(value.as_collection(), item),
            |name, _| format!("{} must contain {:?}", name, item),
        )
    }

    fn not_contains(self, item: &Item<T>) -> Result<Self::Passed, Self::Error>
    where
        Item<T>: PartialEq + Debug,
    {
        self.check(
            Kind::Generic,
            OnAbsent::Pass,
            |value| !introspect::contains(value.as_collection(), item),
            |name, _| format!("{} must not contain {:?}", name, item),
        )
    }

    fn count_is(self, count: usize) -> Result<Self::Passed, Self::Error> {
        let limit = count.saturating_add(1);
        self.count_check(
            limit,
            |seen| seen == count,
            |name, seen| format!("{} must have {} items but had {}", name, count, seen),
        )
    }

    fn count_at_least(self, min: usize) -> Result<Self::Passed, Self::Error> {
        self.count_check(
            min,
            |seen| seen >= min,
            |name, seen| format!("{} must have at least {} items but had {}", name, min, seen),
        )
    }

    fn count_at_most(self, max: usize) -> Result<Self::Passed, Self::Error> {
        let limit = max.saturating_add(1);
        self.count_check(
            limit,
            |seen| seen <= max,
            |name, seen| format!("{} must have at most {} items but had {}", name, max, seen),
        )
    }

    fn count_in_range(self, min: usize, max: usize) -> Result<Self::Passed, Self::Error> {
        let limit = max.saturating_add(1);
        self.count_check(
            limit,
            |seen| (min..=max).contains(&seen),
            |name, seen| {
                format!(
                    "{} must have between {} and {} items but had {}",
                    name,
                    min,
                    max,
                    seen
                )
            },
        )
    }
}
