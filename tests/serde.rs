//! Serialization under the `serde` feature
#![cfg(feature = "serde")]

use bulwark::introspect::Capability;
use bulwark::prelude::*;

#[test]
fn errors_serialize_their_message() {
    let err = invariant(1, "y").in_range(2, 5).unwrap_err();
    let json = serde_json::to_string(&err).unwrap();
    assert_eq!(json, r#"{"message":"y must be in range [2, 5] but was 1"}"#);

    let back: InvariantViolated = serde_json::from_str(&json).unwrap();
    assert_eq!(back, err);
}

#[test]
fn kinds_and_capabilities_serialize_as_names() {
    assert_eq!(serde_json::to_string(&Kind::Range).unwrap(), r#""Range""#);
    assert_eq!(serde_json::from_str::<Kind>(r#""Null""#).unwrap(), Kind::Null);
    assert_eq!(serde_json::to_string(&Capability::Membership).unwrap(), r#""Membership""#);
}

#[test]
fn argument_error_payload_round_trips() {
    let err = argument(None::<u8>, "id").not_null().unwrap_err();
    let bulwark::Violation::Null(inner) = err else {
        panic!("expected a null failure");
    };

    let json = serde_json::to_value(&inner).unwrap();
    assert_eq!(json["message"], "id must not be null");

    let back: ArgumentNull = serde_json::from_value(json).unwrap();
    assert_eq!(back, inner);
}
