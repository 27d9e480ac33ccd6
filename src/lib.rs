//! # Bulwark
//!
//! Fluent guard clauses for Rust.
//!
//! Wrap a value in a [`Guard`] and chain checks on it. The first failing
//! check returns an error whose type is chosen where the guard is created:
//! [`argument`] returns argument-shaped errors, [`invariant`] returns
//! [`InvariantViolated`], [`requires`] returns any error type you like. The
//! checks themselves are written once and know nothing about error types.
//!
//! ## Quick Example
//!
//! ```rust
//! use bulwark::prelude::*;
//!
//! fn schedule(name: &str, workers: i32, tags: &[&str]) -> Result<(), ArgumentError> {
//!     argument(name, "name").not_blank()?.length_at_most(64)?;
//!     argument(workers, "workers").in_range(1, 32)?;
//!     argument(tags, "tags").count_at_most(8)?;
//!     Ok(())
//! }
//!
//! assert!(schedule("nightly", 4, &["db"]).is_ok());
//!
//! let err = schedule("nightly", 0, &[]).unwrap_err();
//! assert!(err.is_range());
//! assert_eq!(err.to_string(), "workers must be in range [1, 32] but was 0");
//! ```
//!
//! ## Choosing the error
//!
//! ```rust
//! use bulwark::prelude::*;
//!
//! #[derive(Debug)]
//! struct ConfigError(String);
//!
//! impl From<String> for ConfigError {
//!     fn from(message: String) -> Self {
//!         ConfigError(message)
//!     }
//! }
//!
//! bulwark::failure!(ConfigError);
//!
//! let err = requires::<ConfigError, _>(None::<u16>, "port")
//!     .not_null()
//!     .unwrap_err();
//! assert_eq!(err.0, "port must not be null");
//! ```
//!
//! ## Modules
//!
//! - [`failure`]: failure kinds, traits and the standard error types
//! - [`guard`]: the guard handle and its factories
//! - [`checks`]: the check catalogue
//! - [`introspect`]: size and membership for arbitrary collection types
//! - [`predicate`]: reusable predicates for [`Guard::satisfies`]
//! - [`testing`]: assertion macros for tests

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod assert;
pub mod checks;
pub mod failure;
pub mod guard;
pub mod introspect;
pub mod predicate;
pub mod testing;

// Re-exports
pub use assert::{ensure, ensure_with};
pub use failure::{
    Argument, ArgumentError, ArgumentNull, ArgumentOutOfRange, Failure, FailureTraits,
    InvalidArgument, Invariant, InvariantViolated, Kind, Postcondition, PostconditionViolated,
    Precondition, PreconditionViolated, Requires, Traits, Violation,
};
pub use guard::{
    argument, invariant, postcondition, precondition, requires, variable, Factory, Guard,
    Nullable, Present,
};
pub use introspect::{AsCollection, Collection, ResolutionError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::assert::{ensure, ensure_with};
    pub use crate::checks::{Approx, CollectionChecks, TextChecks};
    pub use crate::failure::{
        ArgumentError, ArgumentNull, ArgumentOutOfRange, Failure, InvalidArgument,
        InvariantViolated, Kind, PostconditionViolated, PreconditionViolated,
    };
    pub use crate::guard::{
        argument, invariant, postcondition, precondition, requires, variable, Guard,
    };
    pub use crate::predicate::{Predicate, PredicateExt};
}
