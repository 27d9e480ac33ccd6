//! The guard handle threaded through a chain of checks
//!
//! A [`Guard`] holds the value under test, a display name for messages, and
//! (at the type level) the [`FailureTraits`] deciding what a failed check
//! returns. Every check consumes the guard and hands back a fresh one on
//! success, so checks chain with `?`:
//!
//! ```rust
//! use bulwark::prelude::*;
//!
//! fn open(port: u16, host: &str) -> Result<(), ArgumentError> {
//!     argument(port, "port").in_range(1, 65535)?;
//!     argument(host, "host").not_blank()?.length_at_most(253)?;
//!     Ok(())
//! }
//!
//! assert!(open(8080, "localhost").is_ok());
//! assert!(open(0, "localhost").unwrap_err().is_range());
//! ```
//!
//! # Absent values
//!
//! A guard over an `Option` can be switched to [`Nullable`] presence with
//! [`Guard::nullable`]. Positive checks (`equal`, `in_range`, `contains`, ...)
//! then fail with [`Kind::Null`] when the value is absent, while negative
//! checks (`not_equal`, `not_in_range`, `not_contains`, ...) pass.
//!
//! # Lazy messages
//!
//! [`Guard::because`] attaches a message closure to the next check only. The
//! closure runs on failure, so the success path never formats anything.

mod factory;

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use crate::failure::{self, Failure, FailureTraits, Kind, Requires};

pub use factory::{
    argument, invariant, postcondition, precondition, requires, variable, Factory, ARGUMENT,
    INVARIANT, POSTCONDITION, PRECONDITION,
};

/// How a guard stores its value: always present, or possibly absent.
pub trait Presence {
    /// Storage for a value of type `T`.
    type Slot<T>;

    /// Borrow the value if it is present.
    fn get<T>(slot: &Self::Slot<T>) -> Option<&T>;
}

/// The value is always present and stored as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct Present;

impl Presence for Present {
    type Slot<T> = T;

    #[inline]
    fn get<T>(slot: &T) -> Option<&T> {
        Some(slot)
    }
}

/// The value may be absent and is stored as an `Option`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Nullable;

impl Presence for Nullable {
    type Slot<T> = Option<T>;

    #[inline]
    fn get<T>(slot: &Option<T>) -> Option<&T> {
        slot.as_ref()
    }
}

/// Source of the message used when a check fails.
pub trait Message {
    /// Produce the message, calling `fallback` for the built-in template.
    fn resolve(self, fallback: impl FnOnce() -> String) -> String;
}

/// Use the check's built-in message template.
#[derive(Debug, Clone, Copy, Default)]
pub struct Templated;

impl Message for Templated {
    #[inline]
    fn resolve(self, fallback: impl FnOnce() -> String) -> String {
        fallback()
    }
}

impl<F> Message for F
where
    F: FnOnce() -> String,
{
    #[inline]
    fn resolve(self, _fallback: impl FnOnce() -> String) -> String {
        self()
    }
}

/// What a check does when a [`Nullable`] guard holds no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OnAbsent {
    /// Fail with [`Kind::Null`].
    Fail,
    /// Succeed without testing anything.
    Pass,
}

/// A value under validation.
///
/// - `T`: the checked value
/// - `K`: the [`FailureTraits`] choosing the returned error
/// - `P`: [`Present`] or [`Nullable`]
/// - `M`: the message source for the next check
pub struct Guard<T, K = failure::Argument, P: Presence = Present, M = Templated> {
    pub(crate) value: P::Slot<T>,
    pub(crate) name: Cow<'static, str>,
    pub(crate) message: M,
    pub(crate) kinds: PhantomData<fn() -> K>,
}

impl<T, K, P: Presence> Guard<T, K, P> {
    pub(crate) fn new(value: P::Slot<T>, name: Cow<'static, str>) -> Self {
        Guard {
            value,
            name,
            message: Templated,
            kinds: PhantomData,
        }
    }
}

impl<T, K, P: Presence, M> Guard<T, K, P, M> {
    /// The display name used in failure messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Borrow the stored value.
    pub fn value(&self) -> &P::Slot<T> {
        &self.value
    }

    /// Consume the guard and return the stored value.
    pub fn into_value(self) -> P::Slot<T> {
        self.value
    }

    /// Use `message` instead of the built-in text if the next check fails.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bulwark::prelude::*;
    ///
    /// let err = argument(0, "retries")
    ///     .because(|| "retries must be configured".to_string())
    ///     .positive()
    ///     .unwrap_err();
    /// assert_eq!(err.to_string(), "retries must be configured");
    /// ```
    pub fn because<F>(self, message: F) -> Guard<T, K, P, F>
    where
        F: FnOnce() -> String,
    {
        Guard {
            value: self.value,
            name: self.name,
            message,
            kinds: PhantomData,
        }
    }

    /// Return `E` for every kind of failure from here on.
    pub fn with_kind<E: Failure>(self) -> Guard<T, Requires<E>, P, M> {
        self.with_traits()
    }

    /// Switch to another set of failure traits.
    pub fn with_traits<K2>(self) -> Guard<T, K2, P, M> {
        Guard {
            value: self.value,
            name: self.name,
            message: self.message,
            kinds: PhantomData,
        }
    }

    fn pass(self) -> Guard<T, K, P> {
        Guard::new(self.value, self.name)
    }
}

impl<T, K, P, M> Guard<T, K, P, M>
where
    K: FailureTraits,
    P: Presence,
    M: Message,
{
    /// Run one check.
    ///
    /// `test` sees the value when it is present; `describe` builds the
    /// default message for a failed `test` and is only called on failure.
    pub(crate) fn check<F, D>(
        self,
        kind: Kind,
        on_absent: OnAbsent,
        test: F,
        describe: D,
    ) -> Result<Guard<T, K, P>, K::Error>
    where
        F: FnOnce(&T) -> bool,
        D: FnOnce(&str, &T) -> String,
    {
        let passed = match P::get(&self.value) {
            Some(value) => Some(test(value)),
            None => None,
        };

        match (passed, on_absent) {
            (Some(true), _) | (None, OnAbsent::Pass) => Ok(self.pass()),
            (Some(false), _) => Err(self.fail(kind, |name, value| match value {
                Some(value) => describe(name, value),
                None => absent(name),
            })),
            (None, OnAbsent::Fail) => Err(self.fail(Kind::Null, |name, _| absent(name))),
        }
    }

    pub(crate) fn fail<D>(self, kind: Kind, describe: D) -> K::Error
    where
        D: FnOnce(&str, Option<&T>) -> String,
    {
        let Guard {
            value,
            name,
            message,
            ..
        } = self;
        let text = message.resolve(|| describe(&name, P::get(&value)));
        failure::raise::<K>(kind, &name, text)
    }
}

impl<T, K, M> Guard<Option<T>, K, Present, M> {
    /// Treat `None` as an absent value for the following checks.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bulwark::prelude::*;
    ///
    /// let missing: Option<i32> = None;
    /// assert!(argument(missing, "limit").nullable().not_equal(5).is_ok());
    /// assert!(argument(missing, "limit").nullable().equal(5).unwrap_err().is_null());
    /// ```
    pub fn nullable(self) -> Guard<T, K, Nullable, M> {
        Guard {
            value: self.value,
            name: self.name,
            message: self.message,
            kinds: PhantomData,
        }
    }
}

impl<T, K, P, M> fmt::Debug for Guard<T, K, P, M>
where
    P: Presence,
    P::Slot<T>: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard")
            .field("name", &self.name)
            .field("value", &self.value)
            .finish()
    }
}

pub(crate) fn absent(name: &str) -> String {
    format!("{} must not be null", name)
}
