//! The chainable checks available on a [`Guard`](crate::Guard)
//!
//! Checks on plain values (equality, ordering, tolerance, flags, booleans)
//! are inherent methods. Text and collection checks share method names such
//! as `contains` and `not_empty`, so they live on the [`TextChecks`] and
//! [`CollectionChecks`] extension traits, both exported from the prelude.
//!
//! Failure kinds follow one rule per family:
//! - absence in a positive check → [`Kind::Null`](crate::Kind::Null)
//! - ordering, ranges, flags, lengths and counts → [`Kind::Range`](crate::Kind::Range)
//! - everything else → [`Kind::Generic`](crate::Kind::Generic)

mod boolean;
mod collection;
mod custom;
mod equality;
mod flags;
mod float;
mod null;
mod ordering;
mod text;

pub use collection::CollectionChecks;
pub use float::Approx;
pub use text::TextChecks;
