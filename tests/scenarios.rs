//! End-to-end guard scenarios

use bulwark::introspect::{Collection, SizeFn};
use bulwark::prelude::*;
use bulwark::{assert_passes, assert_raises, Traits, Violation};

#[derive(Debug, PartialEq)]
struct CustomEx(String);

impl From<String> for CustomEx {
    fn from(message: String) -> Self {
        CustomEx(message)
    }
}

bulwark::failure!(CustomEx);

/// Knows its length but has no membership test.
struct Readings {
    values: Vec<i64>,
}

impl Collection for Readings {
    type Item = i64;

    fn size_accessor() -> Option<SizeFn<Self>> {
        Some(|readings| readings.values.len())
    }

    fn enumerate(&self) -> Option<Box<dyn Iterator<Item = &i64> + '_>> {
        Some(Box::new(self.values.iter()))
    }
}

#[test]
fn not_equal_raises_generic_argument_error() {
    let err = assert_raises!(argument(0, "x").not_equal(0), Violation::Generic(_));
    assert_eq!(err.to_string(), "x must not be equal to 0");
}

#[test]
fn absent_collection_raises_null_or_custom_kind() {
    let err = argument(None::<Vec<i32>>, "xs").nullable().is_empty().unwrap_err();
    assert!(matches!(err, Violation::Null(_)));

    let err = argument(None::<Vec<i32>>, "xs")
        .nullable()
        .with_kind::<CustomEx>()
        .is_empty()
        .unwrap_err();
    assert_eq!(err, CustomEx("xs must not be null".to_string()));

    let err = requires::<CustomEx, _>(None::<Vec<i32>>, "xs")
        .nullable()
        .is_empty()
        .unwrap_err();
    assert_eq!(err.0, "xs must not be null");
}

#[test]
fn invariant_range_failure() {
    let err = invariant(1, "y").in_range(2, 5).unwrap_err();
    assert_eq!(err.message(), "y must be in range [2, 5] but was 1");
    assert!(invariant(3, "y").in_range(2, 5).is_ok());
}

#[test]
fn float_equality_with_tolerance() {
    assert_passes!(argument(1.0, "f").equal_within(1.0005, 0.01));
    assert_raises!(
        argument(1.0, "f").equal_within(1.0005, 0.0001),
        Violation::Generic(_)
    );
}

#[test]
fn size_only_collection_falls_back_to_enumeration() {
    let readings = Readings {
        values: vec![1, 3, 5, 7],
    };

    assert_passes!(argument(&readings, "c").contains(&5));
    assert_raises!(argument(&readings, "c").contains(&4));
    assert_passes!(argument(&readings, "c").not_contains(&4));
    assert_passes!(argument(&readings, "c").count_is(4));
}

#[test]
fn ensure_only_builds_message_on_failure() {
    let err = ensure::<InvariantViolated, _>(|| false).unwrap_err();
    assert_eq!(err.message(), "assertion failed");

    let result = ensure_with::<InvariantViolated, _, _>(
        || true,
        || unreachable!("message must not be built on success"),
    );
    assert!(result.is_ok());
}

#[test]
fn chains_stop_at_first_failure() {
    fn configure(name: &str, retries: u32) -> Result<(String, u32), ArgumentError> {
        let name = argument(name, "name")
            .not_blank()?
            .length_at_most(8)?
            .into_value()
            .to_string();
        let retries = argument(retries, "retries").at_most(5)?.into_value();
        Ok((name, retries))
    }

    assert_eq!(configure("svc", 3).unwrap(), ("svc".to_string(), 3));
    assert!(configure(" ", 3).unwrap_err().is_generic());
    assert!(configure("service-name", 3).unwrap_err().is_range());
    assert!(configure("svc", 9).unwrap_err().is_range());
}

#[test]
fn partial_traits_override() {
    type Domain = Traits<CustomEx, ArgumentNull, ArgumentOutOfRange>;

    let err = argument("x", "mode")
        .with_traits::<Domain>()
        .one_of(&["fast", "safe"])
        .unwrap_err();
    assert_eq!(
        err,
        Violation::Generic(CustomEx(
            r#"mode must be one of ["fast", "safe"] but was "x""#.to_string()
        ))
    );

    let err = argument(None::<u8>, "level")
        .with_traits::<Domain>()
        .not_null()
        .unwrap_err();
    assert!(err.is_null());
}

#[test]
fn postconditions_and_variables() {
    let total = postcondition(10, "total").at_least(0).unwrap().into_value();
    assert_eq!(total, 10);

    let err = variable(-1, "offset").positive().unwrap_err();
    assert_eq!(err.message(), "offset must be greater than 0 but was -1");
}

#[test]
fn lazy_custom_message() {
    let err = argument(42, "answer")
        .because(|| "the answer is not negotiable".to_string())
        .equal(41)
        .unwrap_err();
    assert_eq!(err.to_string(), "the answer is not negotiable");
}
