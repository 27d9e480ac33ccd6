//! Testing helpers for code that guards its inputs
//!
//! # Assertion macros
//!
//! ```rust
//! use bulwark::prelude::*;
//! use bulwark::{assert_passes, assert_raises, Violation};
//!
//! let guard = assert_passes!(argument(5, "n").in_range(1, 10));
//! assert_eq!(guard.into_value(), 5);
//!
//! assert_raises!(argument(0, "n").positive());
//! assert_raises!(argument(0, "n").positive(), Violation::Range(_));
//! ```

/// Assert that a check passes and evaluate to the returned guard.
///
/// Panics with the failure message otherwise.
#[macro_export]
macro_rules! assert_passes {
    ($check:expr) => {
        match $check {
            ::core::result::Result::Ok(passed) => passed,
            ::core::result::Result::Err(err) => {
                panic!("Expected check to pass, got failure: {:?}", err);
            }
        }
    };
}

/// Assert that a check fails, optionally with an error matching a pattern.
///
/// Evaluates to the error so further assertions can inspect it.
#[macro_export]
macro_rules! assert_raises {
    ($check:expr) => {
        match $check {
            ::core::result::Result::Err(err) => err,
            ::core::result::Result::Ok(_) => {
                panic!("Expected check to fail, but it passed");
            }
        }
    };
    ($check:expr, $pattern:pat) => {
        match $check {
            ::core::result::Result::Err(err) => {
                if !matches!(&err, $pattern) {
                    panic!(
                        "Expected failure matching `{}`, got: {:?}",
                        stringify!($pattern),
                        err
                    );
                }
                err
            }
            ::core::result::Result::Ok(_) => {
                panic!(
                    "Expected failure matching `{}`, but the check passed",
                    stringify!($pattern)
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::failure::Kind;

#[cfg(feature = "proptest")]
impl Arbitrary for Kind {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        prop_oneof![Just(Kind::Generic), Just(Kind::Null), Just(Kind::Range)].boxed()
    }
}

#[cfg(test)]
mod tests {
    use crate::failure::Violation;
    use crate::prelude::*;

    #[test]
    fn assert_passes_returns_guard() {
        let guard = assert_passes!(argument("abc", "s").not_empty());
        assert_eq!(guard.name(), "s");
    }

    #[test]
    fn assert_raises_returns_error() {
        let err = assert_raises!(precondition(1, "x").equal(2));
        assert_eq!(err.message(), "x must be equal to 2 but was 1");
    }

    #[test]
    fn assert_raises_with_pattern() {
        let err = assert_raises!(argument(None::<u8>, "b").not_null(), Violation::Null(_));
        assert!(err.is_null());
    }

    #[test]
    #[should_panic(expected = "Expected check to pass")]
    fn assert_passes_panics_on_failure() {
        assert_passes!(argument(1, "n").negative());
    }

    #[test]
    #[should_panic(expected = "but it passed")]
    fn assert_raises_panics_on_success() {
        assert_raises!(argument(1, "n").positive());
    }

    #[test]
    #[should_panic(expected = "Expected failure matching `Violation::Null(_)`")]
    fn assert_raises_panics_on_other_kind() {
        assert_raises!(argument(1, "n").negative(), Violation::Null(_));
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use crate::failure::{Argument, FailureTraits, Kind};
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn argument_traits_preserve_arbitrary_kind(kind in any::<Kind>()) {
                let err = <Argument as FailureTraits>::raise(kind, String::from("m"));
                prop_assert_eq!(err.kind(), kind);
            }
        }
    }
}
