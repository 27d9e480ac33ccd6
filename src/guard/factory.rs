//! Entry points that bind failure traits to new guards.

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use super::{Guard, Nullable};
use crate::failure::{Argument, Failure, Invariant, Postcondition, Precondition, Requires};

/// Builds guards that share one set of failure traits `K`.
///
/// The four built-in factories are [`ARGUMENT`], [`PRECONDITION`],
/// [`POSTCONDITION`] and [`INVARIANT`]; [`Factory::requires`] derives one that
/// returns a single custom error type.
///
/// # Example
///
/// ```rust
/// use bulwark::guard::{Factory, ARGUMENT};
/// use bulwark::prelude::*;
///
/// let guard = ARGUMENT.create(42, "answer");
/// assert_eq!(guard.name(), "answer");
///
/// let strict = ARGUMENT.requires::<String>();
/// let err = strict.create(3, "n").in_range(5, 10).unwrap_err();
/// assert_eq!(err, "n must be in range [5, 10] but was 3");
/// ```
pub struct Factory<K>(PhantomData<fn() -> K>);

impl<K> Factory<K> {
    /// Create a factory for the traits `K`.
    pub const fn new() -> Self {
        Factory(PhantomData)
    }

    /// Wrap `value` in a guard named `name`.
    pub fn create<T>(&self, value: T, name: impl Into<Cow<'static, str>>) -> Guard<T, K> {
        Guard::new(value, name.into())
    }

    /// Wrap a possibly absent value.
    pub fn nullable<T>(
        &self,
        value: Option<T>,
        name: impl Into<Cow<'static, str>>,
    ) -> Guard<T, K, Nullable> {
        Guard::new(value, name.into())
    }

    /// A factory that returns `E` for every failure kind.
    pub const fn requires<E: Failure>(&self) -> Factory<Requires<E>> {
        Factory::new()
    }
}

impl<K> Clone for Factory<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for Factory<K> {}

impl<K> Default for Factory<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> fmt::Debug for Factory<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Factory<{}>", std::any::type_name::<K>())
    }
}

/// Factory for argument checks.
pub const ARGUMENT: Factory<Argument> = Factory::new();

/// Factory for preconditions and checked variables.
pub const PRECONDITION: Factory<Precondition> = Factory::new();

/// Factory for postconditions.
pub const POSTCONDITION: Factory<Postcondition> = Factory::new();

/// Factory for invariants.
pub const INVARIANT: Factory<Invariant> = Factory::new();

/// Guard a function argument.
///
/// Failures are [`InvalidArgument`](crate::InvalidArgument),
/// [`ArgumentNull`](crate::ArgumentNull) or
/// [`ArgumentOutOfRange`](crate::ArgumentOutOfRange), wrapped in an
/// [`ArgumentError`](crate::ArgumentError).
pub fn argument<T>(value: T, name: impl Into<Cow<'static, str>>) -> Guard<T, Argument> {
    ARGUMENT.create(value, name)
}

/// Guard a local variable; failures are precondition violations.
pub fn variable<T>(value: T, name: impl Into<Cow<'static, str>>) -> Guard<T, Precondition> {
    PRECONDITION.create(value, name)
}

/// Guard a precondition.
pub fn precondition<T>(value: T, name: impl Into<Cow<'static, str>>) -> Guard<T, Precondition> {
    PRECONDITION.create(value, name)
}

/// Guard a postcondition.
pub fn postcondition<T>(value: T, name: impl Into<Cow<'static, str>>) -> Guard<T, Postcondition> {
    POSTCONDITION.create(value, name)
}

/// Guard an invariant.
pub fn invariant<T>(value: T, name: impl Into<Cow<'static, str>>) -> Guard<T, Invariant> {
    INVARIANT.create(value, name)
}

/// Guard a value with a single custom error type for every failure kind.
///
/// # Example
///
/// ```rust
/// use bulwark::prelude::*;
///
/// #[derive(Debug)]
/// struct ConfigError(String);
///
/// impl From<String> for ConfigError {
///     fn from(message: String) -> Self {
///         ConfigError(message)
///     }
/// }
///
/// bulwark::failure!(ConfigError);
///
/// let err = requires::<ConfigError, _>(-1, "workers").positive().unwrap_err();
/// assert_eq!(err.0, "workers must be greater than 0 but was -1");
/// ```
pub fn requires<E: Failure, T>(
    value: T,
    name: impl Into<Cow<'static, str>>,
) -> Guard<T, Requires<E>> {
    Factory::<Requires<E>>::new().create(value, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::failure::{InvariantViolated, PostconditionViolated, PreconditionViolated};

    #[test]
    fn factories_carry_names_and_values() {
        let guard = ARGUMENT.create(String::from("abc"), "code");
        assert_eq!(guard.name(), "code");
        assert_eq!(guard.value(), "abc");
    }

    #[test]
    fn owned_names_are_accepted() {
        let field = format!("items[{}]", 3);
        let guard = argument(1, field);
        assert_eq!(guard.name(), "items[3]");
    }

    #[test]
    fn nullable_factory_stores_option() {
        let guard = INVARIANT.nullable(None::<u8>, "slot");
        assert_eq!(guard.into_value(), None);
    }

    #[test]
    fn entry_points_pick_their_error_types() {
        let pre: Result<_, PreconditionViolated> = precondition(1, "a").equal(2).map(|_| ());
        let var: Result<_, PreconditionViolated> = variable(1, "a").equal(2).map(|_| ());
        let post: Result<_, PostconditionViolated> = postcondition(1, "a").equal(2).map(|_| ());
        let inv: Result<_, InvariantViolated> = invariant(1, "a").equal(2).map(|_| ());

        assert!(pre.is_err());
        assert!(var.is_err());
        assert!(post.is_err());
        assert!(inv.is_err());
    }

    #[test]
    fn requires_factory_from_builtin() {
        let err = INVARIANT
            .requires::<String>()
            .create(1, "x")
            .equal(2)
            .unwrap_err();
        assert_eq!(err, "x must be equal to 2 but was 1");
    }
}
