//! The error types behind the built-in entry points.

use super::Failure;

macro_rules! standard_failure {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[error("{message}")]
        pub struct $name {
            message: String,
        }

        impl $name {
            /// The human-readable description of the failed check.
            pub fn message(&self) -> &str {
                &self.message
            }
        }

        impl Failure for $name {
            fn from_message(message: String) -> Self {
                Self { message }
            }
        }
    };
}

standard_failure!(
    /// An argument failed a check that is not about absence or range.
    InvalidArgument
);

standard_failure!(
    /// A required argument was absent.
    ArgumentNull
);

standard_failure!(
    /// An argument was outside its allowed range.
    ArgumentOutOfRange
);

standard_failure!(
    /// A precondition (or a checked local variable) did not hold.
    PreconditionViolated
);

standard_failure!(
    /// A postcondition did not hold.
    PostconditionViolated
);

standard_failure!(
    /// An invariant did not hold.
    InvariantViolated
);
