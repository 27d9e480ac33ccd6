//! Log output under the `tracing` feature
#![cfg(feature = "tracing")]

use bulwark::introspect::{self, Accessors, Collection};
use bulwark::prelude::*;
use tracing_test::traced_test;

struct Traced(Vec<u8>);

impl Collection for Traced {
    type Item = u8;

    fn enumerate(&self) -> Option<Box<dyn Iterator<Item = &u8> + '_>> {
        Some(Box::new(self.0.iter()))
    }

    fn registered_accessors() -> Option<Accessors<Self>> {
        introspect::registered::<Self>()
    }
}

struct Unwalkable;

impl Collection for Unwalkable {
    type Item = u8;
}

#[traced_test]
#[test]
fn failed_check_is_logged_with_kind() {
    let _ = argument(11, "limit").at_most(10);

    assert!(logs_contain("guard check failed"));
    assert!(logs_contain("limit"));
    assert!(logs_contain("range"));
}

#[traced_test]
#[test]
fn passing_check_logs_nothing() {
    let _ = argument(1, "quiet").at_most(10);

    assert!(!logs_contain("guard check failed"));
}

#[traced_test]
#[test]
fn registry_lookup_and_registration_are_logged() {
    let _ = introspect::size_of(&Traced(vec![1, 2]));
    assert!(logs_contain("looking up registered collection accessors"));

    introspect::register(Accessors::<Traced>::none().with_size(|traced| traced.0.len()));
    assert!(logs_contain("registering collection accessors"));
}

#[traced_test]
#[test]
fn failed_assertion_is_logged() {
    let _ = ensure::<String, _>(|| false);

    assert!(logs_contain("guard check failed"));
    assert!(logs_contain("assertion"));
}

#[traced_test]
#[test]
fn resolution_failure_is_logged_before_panicking() {
    let outcome = std::panic::catch_unwind(|| introspect::size_of(&Unwalkable));

    assert!(outcome.is_err());
    assert!(logs_contain("collection accessor resolution failed"));
}
