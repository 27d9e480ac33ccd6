//! Free-form assertions for conditions no built-in check covers.
//!
//! ```rust
//! use bulwark::{ensure_with, InvariantViolated};
//!
//! fn rebalance(left: usize, right: usize) -> Result<(), InvariantViolated> {
//!     ensure_with(
//!         || left.abs_diff(right) <= 1,
//!         || format!("tree unbalanced: {} vs {}", left, right),
//!     )
//! }
//!
//! assert!(rebalance(3, 4).is_ok());
//! assert_eq!(rebalance(1, 5).unwrap_err().message(), "tree unbalanced: 1 vs 5");
//! ```

use crate::failure::{self, Failure, Kind, Requires};

const UNSATISFIED: &str = "assertion failed";

/// Return `E` if `condition` does not hold.
///
/// `condition` is evaluated exactly once.
pub fn ensure<E, F>(condition: F) -> Result<(), E>
where
    E: Failure,
    F: FnOnce() -> bool,
{
    ensure_with(condition, || UNSATISFIED.to_string())
}

/// Return `E` built from `message` if `condition` does not hold.
///
/// `message` runs only when the condition fails.
pub fn ensure_with<E, F, D>(condition: F, message: D) -> Result<(), E>
where
    E: Failure,
    F: FnOnce() -> bool,
    D: FnOnce() -> String,
{
    if condition() {
        return Ok(());
    }

    Err(failure::raise::<Requires<E>>(Kind::Generic, "assertion", message()))
}
