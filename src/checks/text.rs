//! String shape checks
//!
//! Available on any guard whose value implements `AsRef<str>`: `String`,
//! `&str`, `Cow<str>`, `Box<str>` and friends. Lengths are counted in
//! `char`s, not bytes.
//!
//! # Example
//!
//! ```rust
//! use bulwark::prelude::*;
//!
//! let url = argument("https://example.com", "url")
//!     .not_blank()?
//!     .starts_with("https://")?
//!     .length_at_most(2048)?
//!     .into_value();
//! assert_eq!(url, "https://example.com");
//! # Ok::<(), ArgumentError>(())
//! ```

use crate::failure::{FailureTraits, Kind};
use crate::guard::{Guard, Message, OnAbsent, Presence};

/// Checks on text values.
pub trait TextChecks: Sized {
    /// The guard returned when a check passes.
    type Passed;
    /// The error returned when a check fails.
    type Error;

    /// Require at least one character.
    fn not_empty(self) -> Result<Self::Passed, Self::Error>;

    /// Require the empty string.
    fn is_empty(self) -> Result<Self::Passed, Self::Error>;

    /// Require at least one non-whitespace character.
    fn not_blank(self) -> Result<Self::Passed, Self::Error>;

    /// Require the text to start with `prefix`.
    fn starts_with(self, prefix: &str) -> Result<Self::Passed, Self::Error>;

    /// Require the text not to start with `prefix`. Absent values pass.
    fn not_starts_with(self, prefix: &str) -> Result<Self::Passed, Self::Error>;

    /// Require the text to end with `suffix`.
    fn ends_with(self, suffix: &str) -> Result<Self::Passed, Self::Error>;

    /// Require the text not to end with `suffix`. Absent values pass.
    fn not_ends_with(self, suffix: &str) -> Result<Self::Passed, Self::Error>;

    /// Require `needle` to occur in the text.
    fn contains(self, needle: &str) -> Result<Self::Passed, Self::Error>;

    /// Require `needle` not to occur in the text. Absent values pass.
    fn not_contains(self, needle: &str) -> Result<Self::Passed, Self::Error>;

    /// Require equality with `other`, ignoring case.
    fn equal_ignoring_case(self, other: &str) -> Result<Self::Passed, Self::Error>;

    /// Require exactly `len` characters.
    fn length_is(self, len: usize) -> Result<Self::Passed, Self::Error>;

    /// Require between `min` and `max` characters, inclusive.
    fn length_in_range(self, min: usize, max: usize) -> Result<Self::Passed, Self::Error>;

    /// Require at least `min` characters.
    fn length_at_least(self, min: usize) -> Result<Self::Passed, Self::Error>;

    /// Require at most `max` characters.
    fn length_at_most(self, max: usize) -> Result<Self::Passed, Self::Error>;
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

impl<T, K, P, M> TextChecks for Guard<T, K, P, M>
where
    T: AsRef<str>,
    K: FailureTraits,
    P: Presence,
    M: Message,
{
    type Passed = Guard<T, K, P>;
    type Error = K::Error;

    fn not_empty(self) -> Result<Self::Passed, Self::Error> {
        self.check(
            Kind::Generic,
            OnAbsent::Fail,
            |value| !value.as_ref().is_empty(),
            |name, _| format!("{} must not be empty", name),
        )
    }

    fn is_empty(self) -> Result<Self::Passed, Self::Error> {
        self.check(
            Kind::Generic,
            OnAbsent::Fail,
            |value| value.as_ref().is_empty(),
            |name, value| format!("{} must be empty but was {:?}", name, value.as_ref()),
        )
    }

    fn not_blank(self) -> Result<Self::Passed, Self::Error> {
        self.check(
            Kind::Generic,
            OnAbsent::Fail,
            |value| !value.as_ref().trim().is_empty(),
            |name, _| format!("{} must not be empty or whitespace", name),
        )
    }

    fn starts_with(self, prefix: &str) -> Result<Self::Passed, Self::Error> {
        self.check(
            Kind::Generic,
            OnAbsent::Fail,
            |value| value.as_ref().starts_with(prefix),
            |name, value| {
                format!("{} must start with {:?} but was {:?}", name, prefix, value.as_ref())
            },
        )
    }

    fn not_starts_with(self, prefix: &str) -> Result<Self::Passed, Self::Error> {
        self.check(
            Kind::Generic,
            OnAbsent::Pass,
            |value| !value.as_ref().starts_with(prefix),
            |name, value| {
                format!("{} must not start with {:?} but was {:?}", name, prefix, value.as_ref())
            },
        )
    }

    fn ends_with(self, suffix: &str) -> Result<Self::Passed, Self::Error> {
        self.check(
            Kind::Generic,
            OnAbsent::Fail,
            |value| value.as_ref().ends_with(suffix),
            |name, value| format!("{} must end with {:?} but was {:?}", name, suffix, value.as_ref()),
        )
    }

    fn not_ends_with(self, suffix: &str) -> Result<Self::Passed, Self::Error> {
        self.check(
            Kind::Generic,
            OnAbsent::Pass,
            |value| !value.as_ref().ends_with(suffix),
            |name, value| {
                format!("{} must not end with {:?} but was {:?}", name, suffix, value.as_ref())
            },
        )
    }

    fn contains(self, needle: &str) -> Result<Self::Passed, Self::Error> {
        self.check(
            Kind::Generic,
            OnAbsent::Fail,
            |value| value.as_ref().contains(needle),
            |name, value| format!("{} must contain {:?} but was {:?}", name, needle, value.as_ref()),
        )
    }

    fn not_contains(self, needle: &str) -> Result<Self::Passed, Self::Error> {
        self.check(
            Kind::Generic,
            OnAbsent::Pass,
            |value| !value.as_ref().contains(needle),
            |name, value| {
                format!("{} must not contain {:?} but was {:?}", name, needle, value.as_ref())
            },
        )
    }

    fn equal_ignoring_case(self, other: &str) -> Result<Self::Passed, Self::Error> {
        self.check(
            Kind::Generic,
            OnAbsent::Fail,
            |value| {
                value
                    .as_ref()
                    .chars()
                    .flat_map(char::to_lowercase)
                    .eq(other.chars().flat_map(char::to_lowercase))
            },
            |name, value| {
                format!(
                    "{} must be equal to {:?} ignoring case but was {:?}",
                    name,
                    other,
                    value.as_ref()
                )
            },
        )
    }

    fn length_is(self, len: usize) -> Result<Self::Passed, Self::Error> {
        self.length_in_range(len, len)
    }

    fn length_in_range(self, min: usize, max: usize) -> Result<Self::Passed, Self::Error> {
        self.check(
            Kind::Range,
            OnAbsent::Fail,
            |value| (min..=max).contains(&char_len(value.as_ref())),
            |name, value| {
                let len = char_len(value.as_ref());
                if min == max {
                    format!("{} must be {} characters long but was {}", name, min, len)
                } else {
                    format!(
                        "{} must be between {} and {} characters long but was {}",
                        name, min, max, len
                    )
                }
            },
        )
    }

    fn length_at_least(self, min: usize) -> Result<Self::Passed, Self::Error> {
        self.check(
            Kind::Range,
            OnAbsent::Fail,
            |value| char_len(value.as_ref()) >= min,
            |name, value| {
                format!(
                    "{} must be at least {} characters long but was {}",
                    name,
                    min,
                    char_len(value.as_ref())
                )
            },
        )
    }

    fn length_at_most(self, max: usize) -> Result<Self::Passed, Self::Error> {
        self.check(
            Kind::Range,
            OnAbsent::Fail,
            |value| char_len(value.as_ref()) <= max,
            |name, value| {
                format!(
                    "{} must be at most {} characters long but was {}",
                    name,
                    max,
                    char_len(value.as_ref())
                )
            },
        )
    }
}
