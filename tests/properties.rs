//! Property-based tests for guard checks

use bulwark::failure::{FailureTraits, Kind};
use bulwark::prelude::*;
use bulwark::{Argument, Invariant, Violation};
use proptest::prelude::*;

fn kind_of(err: &ArgumentError) -> Kind {
    err.kind()
}

fn kinds() -> impl Strategy<Value = Kind> {
    prop_oneof![Just(Kind::Generic), Just(Kind::Null), Just(Kind::Range)]
}

proptest! {
    #[test]
    fn equal_within_matches_distance(a in -1e6f64..1e6, b in -1e6f64..1e6, tol in 0f64..10.0) {
        let passed = argument(a, "a").equal_within(b, tol).is_ok();
        prop_assert_eq!(passed, (a - b).abs() <= tol);
    }

    #[test]
    fn strict_orderings_fail_within_tolerance(a in -1e3f64..1e3, delta in -1.0f64..1.0, tol in 1.0f64..2.0) {
        let b = a + delta;
        prop_assume!((a - b).abs() <= tol);

        prop_assert!(argument(a, "a").less_than_within(b, tol).is_err());
        prop_assert!(argument(a, "a").greater_than_within(b, tol).is_err());
        prop_assert!(argument(a, "a").at_most_within(b, tol).is_ok());
        prop_assert!(argument(a, "a").at_least_within(b, tol).is_ok());
    }

    #[test]
    fn evaluation_is_idempotent(value in any::<i32>(), min in -100i32..0, max in 0i32..100) {
        let first = argument(value, "v").in_range(min, max).map(|g| g.into_value());
        let second = argument(value, "v").in_range(min, max).map(|g| g.into_value());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn range_checks_never_change_the_value(value in any::<i64>()) {
        let kept = argument(value, "v")
            .not_in_range(i64::MIN, i64::MIN)
            .map(|g| g.into_value());
        if value != i64::MIN {
            prop_assert_eq!(kept, Ok(value));
        }
    }

    #[test]
    fn absent_values_fail_positive_and_pass_negative(x in any::<i32>(), lo in -50i32..0, hi in 0i32..50) {
        let none = || argument(None::<i32>, "n").nullable();

        prop_assert!(none().not_equal(x).is_ok());
        prop_assert!(none().not_in_range(lo, hi).is_ok());
        prop_assert_eq!(none().equal(x).map(|_| ()).map_err(|e| kind_of(&e)), Err(Kind::Null));
        prop_assert_eq!(none().in_range(lo, hi).map(|_| ()).map_err(|e| kind_of(&e)), Err(Kind::Null));
    }

    #[test]
    fn argument_traits_report_the_check_kind(value in any::<u16>(), bound in any::<u16>()) {
        if let Err(err) = argument(value, "v").at_most(bound) {
            prop_assert_eq!(kind_of(&err), Kind::Range);
        }
        if let Err(err) = argument(value, "v").equal(bound) {
            prop_assert!(matches!(err, Violation::Generic(_)));
        }
    }

    #[test]
    fn requires_collapses_every_kind(kind in kinds()) {
        let err = <Invariant as FailureTraits>::raise(kind, String::from("broken"));
        prop_assert_eq!(err.message(), "broken");

        let err = <Argument as FailureTraits>::raise(kind, String::from("broken"));
        prop_assert_eq!(err.kind(), kind);
    }

    #[test]
    fn count_checks_agree_with_len(items in prop::collection::vec(any::<u8>(), 0..40), k in 0usize..50) {
        prop_assert_eq!(argument(&items, "items").count_at_most(k).is_ok(), items.len() <= k);
        prop_assert_eq!(argument(&items, "items").count_at_least(k).is_ok(), items.len() >= k);
        prop_assert_eq!(argument(&items, "items").count_is(k).is_ok(), items.len() == k);
    }

    #[test]
    fn text_lengths_count_chars(text in "\\PC{0,30}", max in 0usize..40) {
        let chars = text.chars().count();
        prop_assert_eq!(argument(text.as_str(), "t").length_at_most(max).is_ok(), chars <= max);
    }
}
