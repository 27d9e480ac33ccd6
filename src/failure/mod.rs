//! Failure kinds and how a failing check turns into an error value
//!
//! Every guard carries a [`FailureTraits`] type that maps the three failure
//! categories of a check ([`Kind::Generic`], [`Kind::Null`], [`Kind::Range`])
//! to concrete error values. The checks themselves never name an error type:
//! they report a [`Kind`] and a message, and the guard's traits decide what
//! gets returned.
//!
//! # Example
//!
//! ```rust
//! use bulwark::failure::{FailureTraits, Kind, Requires, Violation};
//! use bulwark::{Argument, ArgumentError, PreconditionViolated};
//!
//! let err = <Argument as FailureTraits>::raise(Kind::Null, "id must not be null".into());
//! assert!(matches!(err, Violation::Null(_)));
//!
//! let err = <Requires<PreconditionViolated> as FailureTraits>::raise(
//!     Kind::Range,
//!     "count out of range".into(),
//! );
//! assert_eq!(err.message(), "count out of range");
//! # let _: ArgumentError = <Argument as FailureTraits>::raise(Kind::Generic, String::new());
//! ```

mod standard;

use std::error::Error as StdError;
use std::fmt;
use std::marker::PhantomData;

pub use standard::{
    ArgumentNull, ArgumentOutOfRange, InvalidArgument, InvariantViolated, PostconditionViolated,
    PreconditionViolated,
};

/// The category of a failed check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    /// Any violation that is neither about absence nor about ordering.
    Generic,
    /// A value that must be present is absent.
    Null,
    /// A present value lies outside an allowed range, ordering or bit pattern.
    Range,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Generic => write!(f, "generic"),
            Kind::Null => write!(f, "null"),
            Kind::Range => write!(f, "range"),
        }
    }
}

/// An error type a failing check can construct from a message.
///
/// Types that are built without arguments can use the `default` form of
/// the [`failure!`](crate::failure!) macro, which discards the message.
pub trait Failure: Sized {
    /// Build the error from a human-readable message.
    fn from_message(message: String) -> Self;
}

impl Failure for String {
    fn from_message(message: String) -> Self {
        message
    }
}

impl Failure for Box<dyn StdError + Send + Sync> {
    fn from_message(message: String) -> Self {
        Box::from(message)
    }
}

/// Maps the three failure categories of a check to one error type.
///
/// Implementors are zero-sized markers used as the `K` parameter of
/// [`Guard`](crate::Guard), so the mapping is fixed when the guard is built.
pub trait FailureTraits {
    /// The error every failing check under these traits returns.
    type Error;

    /// Construct the error for a failure of the given kind.
    fn raise(kind: Kind, message: String) -> Self::Error;
}

/// Traits that raise the same error type `E` for every kind.
///
/// This is the single-kind override: `Requires<MyError>` makes every check
/// in a chain return `MyError` regardless of its category.
pub struct Requires<E>(PhantomData<fn() -> E>);

impl<E: Failure> FailureTraits for Requires<E> {
    type Error = E;

    fn raise(_kind: Kind, message: String) -> E {
        E::from_message(message)
    }
}

impl<E> fmt::Debug for Requires<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Requires<{}>", std::any::type_name::<E>())
    }
}

/// Traits with one error type per kind: generic `G`, null `N`, range `R`.
///
/// `Traits<G>` uses `G` for everything, `Traits<G, N>` swaps in a dedicated
/// null kind, `Traits<G, N, R>` sets all three. Failures are returned as a
/// [`Violation`] holding exactly one of them.
pub struct Traits<G, N = G, R = G>(PhantomData<fn() -> (G, N, R)>);

impl<G, N, R> FailureTraits for Traits<G, N, R>
where
    G: Failure,
    N: Failure,
    R: Failure,
{
    type Error = Violation<G, N, R>;

    fn raise(kind: Kind, message: String) -> Self::Error {
        match kind {
            Kind::Generic => Violation::Generic(G::from_message(message)),
            Kind::Null => Violation::Null(N::from_message(message)),
            Kind::Range => Violation::Range(R::from_message(message)),
        }
    }
}

impl<G, N, R> fmt::Debug for Traits<G, N, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Traits<{}, {}, {}>",
            std::any::type_name::<G>(),
            std::any::type_name::<N>(),
            std::any::type_name::<R>()
        )
    }
}

/// The error raised under [`Traits`]: one of the three configured kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation<G, N, R> {
    /// A generic failure.
    Generic(G),
    /// A null failure.
    Null(N),
    /// A range failure.
    Range(R),
}

impl<G, N, R> Violation<G, N, R> {
    /// The kind of check that failed.
    pub fn kind(&self) -> Kind {
        match self {
            Violation::Generic(_) => Kind::Generic,
            Violation::Null(_) => Kind::Null,
            Violation::Range(_) => Kind::Range,
        }
    }

    /// Returns true if a required value was absent.
    pub fn is_null(&self) -> bool {
        matches!(self, Violation::Null(_))
    }

    /// Returns true if a value was out of range.
    pub fn is_range(&self) -> bool {
        matches!(self, Violation::Range(_))
    }

    /// Returns true for any other failure.
    pub fn is_generic(&self) -> bool {
        matches!(self, Violation::Generic(_))
    }
}

impl<G: fmt::Display, N: fmt::Display, R: fmt::Display> fmt::Display for Violation<G, N, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Generic(e) => write!(f, "{}", e),
            Violation::Null(e) => write!(f, "{}", e),
            Violation::Range(e) => write!(f, "{}", e),
        }
    }
}

impl<G, N, R> StdError for Violation<G, N, R>
where
    G: StdError + 'static,
    N: StdError + 'static,
    R: StdError + 'static,
{
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Violation::Generic(e) => e.source(),
            Violation::Null(e) => e.source(),
            Violation::Range(e) => e.source(),
        }
    }
}

/// Argument validation: invalid, null and out-of-range argument errors.
pub type Argument = Traits<InvalidArgument, ArgumentNull, ArgumentOutOfRange>;

/// The error returned by checks on an [`argument`](crate::argument) guard.
pub type ArgumentError = Violation<InvalidArgument, ArgumentNull, ArgumentOutOfRange>;

/// Preconditions and variables: every kind is a [`PreconditionViolated`].
pub type Precondition = Requires<PreconditionViolated>;

/// Postconditions: every kind is a [`PostconditionViolated`].
pub type Postcondition = Requires<PostconditionViolated>;

/// Invariants: every kind is an [`InvariantViolated`].
pub type Invariant = Requires<InvariantViolated>;

/// Turn a failed check into the error chosen by `K`.
///
/// `name` identifies the checked value for diagnostics; the returned error
/// carries only `message`.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub fn raise<K: FailureTraits>(kind: Kind, name: &str, message: String) -> K::Error {
    #[cfg(feature = "tracing")]
    tracing::debug!(target: "bulwark", subject = name, %kind, %message, "guard check failed");

    K::raise(kind, message)
}

/// Implement [`Failure`] for an error type.
///
/// The plain form builds the error with `From<String>`; the `default` form
/// builds it with `Default` and drops the message.
///
/// # Example
///
/// ```rust
/// use bulwark::failure::Failure;
///
/// #[derive(Debug)]
/// struct Rejected(String);
///
/// impl From<String> for Rejected {
///     fn from(message: String) -> Self {
///         Rejected(message)
///     }
/// }
///
/// #[derive(Debug, Default)]
/// struct Denied;
///
/// bulwark::failure!(Rejected);
/// bulwark::failure!(Denied, default);
///
/// assert_eq!(Rejected::from_message("no".into()).0, "no");
/// let _ = Denied::from_message("ignored".into());
/// ```
#[macro_export]
macro_rules! failure {
    ($ty:ty) => {
        impl $crate::failure::Failure for $ty {
            fn from_message(message: ::std::string::String) -> Self {
                <$ty as ::core::convert::From<::std::string::String>>::from(message)
            }
        }
    };
    ($ty:ty, default) => {
        impl $crate::failure::Failure for $ty {
            fn from_message(_message: ::std::string::String) -> Self {
                <$ty as ::core::default::Default>::default()
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Unit;

    crate::failure!(Unit, default);

    #[test]
    fn argument_traits_map_each_kind() {
        let generic = <Argument as FailureTraits>::raise(Kind::Generic, "g".into());
        let null = <Argument as FailureTraits>::raise(Kind::Null, "n".into());
        let range = <Argument as FailureTraits>::raise(Kind::Range, "r".into());

        assert_eq!(generic, Violation::Generic(InvalidArgument::from_message("g".into())));
        assert_eq!(null, Violation::Null(ArgumentNull::from_message("n".into())));
        assert_eq!(range, Violation::Range(ArgumentOutOfRange::from_message("r".into())));
    }

    #[test]
    fn requires_ignores_kind() {
        for kind in [Kind::Generic, Kind::Null, Kind::Range] {
            let err = <Invariant as FailureTraits>::raise(kind, "broken".into());
            assert_eq!(err.message(), "broken");
        }
    }

    #[test]
    fn partial_override_keeps_other_kinds() {
        type Custom = Traits<String, ArgumentNull, ArgumentOutOfRange>;

        let generic = <Custom as FailureTraits>::raise(Kind::Generic, "domain".into());
        let null = <Custom as FailureTraits>::raise(Kind::Null, "missing".into());

        assert_eq!(generic, Violation::Generic("domain".to_string()));
        assert!(null.is_null());
    }

    #[test]
    fn default_failure_drops_message() {
        let err = <Requires<Unit> as FailureTraits>::raise(Kind::Range, "lost".into());
        assert_eq!(err, Unit);
    }

    #[test]
    fn violation_display_delegates() {
        let err: ArgumentError = <Argument as FailureTraits>::raise(Kind::Range, "x too big".into());
        assert_eq!(err.to_string(), "x too big");
        assert_eq!(err.kind(), Kind::Range);
        assert!(err.is_range());
        assert!(!err.is_generic());
    }

    #[test]
    fn kind_display() {
        assert_eq!(Kind::Generic.to_string(), "generic");
        assert_eq!(Kind::Null.to_string(), "null");
        assert_eq!(Kind::Range.to_string(), "range");
    }

    #[test]
    fn boxed_error_failure() {
        let err = <Requires<Box<dyn StdError + Send + Sync>> as FailureTraits>::raise(
            Kind::Generic,
            "boxed".into(),
        );
        assert_eq!(err.to_string(), "boxed");
    }
}
