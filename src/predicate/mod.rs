//! Reusable, composable predicates for [`Guard::satisfies`](crate::Guard::satisfies)
//!
//! A predicate is a value that tests a `&T` and can describe what it
//! requires. Descriptions only matter on failure, where they end up in the
//! error message, so building them is deferred until then.
//!
//! Plain closures are predicates with a generic description; [`described`]
//! names one, and the comparison constructors ([`gt`], [`between`], ...)
//! describe themselves:
//!
//! ```rust
//! use bulwark::prelude::*;
//! use bulwark::predicate::{between, described};
//!
//! let even = described("even", |n: &i32| n % 2 == 0);
//! let port = between(1024, 49151).and(even);
//!
//! assert!(argument(8080, "port").satisfies(port).is_ok());
//!
//! let err = argument(8081, "port").satisfies(port).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "port must satisfy (between 1024 and 49151 and even) but was 8081"
//! );
//! ```

mod compare;

pub use compare::{between, eq, ge, gt, le, lt, ne, Between, Compare};

/// A test over values of type `T`.
pub trait Predicate<T: ?Sized> {
    /// Returns true if `value` satisfies the predicate.
    fn test(&self, value: &T) -> bool;

    /// What the predicate requires, for failure messages.
    fn description(&self) -> String {
        "the required condition".to_string()
    }
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    #[inline]
    fn test(&self, value: &T) -> bool {
        self(value)
    }
}

/// Combinators for predicates.
///
/// ```rust
/// use bulwark::predicate::{gt, lt, Predicate, PredicateExt};
///
/// let outside = gt(0).and(lt(100)).not();
/// assert!(outside.test(&-5));
/// assert!(!outside.test(&50));
/// assert_eq!(outside.description(), "not (greater than 0 and less than 100)");
/// ```
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Both `self` and `other` must hold.
    fn and<Q: Predicate<T>>(self, other: Q) -> And<Self, Q> {
        And(self, other)
    }

    /// Either `self` or `other` must hold.
    fn or<Q: Predicate<T>>(self, other: Q) -> Or<Self, Q> {
        Or(self, other)
    }

    /// `self` must not hold.
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// Conjunction of two predicates.
#[derive(Debug, Clone, Copy)]
pub struct And<A, B>(pub A, pub B);

impl<T: ?Sized, A: Predicate<T>, B: Predicate<T>> Predicate<T> for And<A, B> {
    #[inline]
    fn test(&self, value: &T) -> bool {
        self.0.test(value) && self.1.test(value)
    }

    fn description(&self) -> String {
        format!("({} and {})", self.0.description(), self.1.description())
    }
}

/// Disjunction of two predicates.
#[derive(Debug, Clone, Copy)]
pub struct Or<A, B>(pub A, pub B);

impl<T: ?Sized, A: Predicate<T>, B: Predicate<T>> Predicate<T> for Or<A, B> {
    #[inline]
    fn test(&self, value: &T) -> bool {
        self.0.test(value) || self.1.test(value)
    }

    fn description(&self) -> String {
        format!("({} or {})", self.0.description(), self.1.description())
    }
}

/// Negation of a predicate.
#[derive(Debug, Clone, Copy)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn test(&self, value: &T) -> bool {
        !self.0.test(value)
    }

    fn description(&self) -> String {
        format!("not {}", self.0.description())
    }
}

/// A closure with a name used in failure messages.
#[derive(Clone, Copy)]
pub struct Described<F> {
    name: &'static str,
    test: F,
}

impl<F> std::fmt::Debug for Described<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Described").field(&self.name).finish()
    }
}

/// Name `test` so a failing [`satisfies`](crate::Guard::satisfies) can say
/// what was expected.
pub fn described<T: ?Sized, F>(name: &'static str, test: F) -> Described<F>
where
    F: Fn(&T) -> bool,
{
    Described { name, test }
}

impl<T: ?Sized, F> Predicate<T> for Described<F>
where
    F: Fn(&T) -> bool,
{
    #[inline]
    fn test(&self, value: &T) -> bool {
        (self.test)(value)
    }

    fn description(&self) -> String {
        self.name.to_string()
    }
}
