//! Size and membership for arbitrary collection-like types
//!
//! Collection checks do not require a common container interface. A type
//! implements [`Collection`] and declares whatever it can answer directly:
//! a size accessor, a membership accessor, and/or a way to enumerate its
//! items. Declared accessors are plain `fn` items, fixed per concrete type at
//! compile time, so borrowed collections such as `&[&str]` work like owned
//! ones. Every question goes through the fastest available path:
//!
//! 1. accessors registered at runtime with [`register`], for `'static` types
//!    that forward [`Collection::registered_accessors`] to [`registered`], else
//! 2. accessors declared by the type's [`Collection`] impl, else
//! 3. bounded enumeration: membership stops at the first match and counting
//!    never pulls more items than the question needs, else
//! 4. a [`ResolutionError`].
//!
//! A resolution error means the type cannot answer the question at all. It
//! is an authoring defect, not a failed check, so the guard-level checks
//! escalate it by panicking whatever their failure traits; the `try_*`
//! functions here return it instead.
//!
//! # Example
//!
//! ```rust
//! use bulwark::introspect::{self, Collection};
//!
//! /// A ring buffer that knows its length but offers no `contains`.
//! struct Ring {
//!     slots: Vec<u32>,
//! }
//!
//! impl Collection for Ring {
//!     type Item = u32;
//!
//!     fn size_accessor() -> Option<introspect::SizeFn<Self>> {
//!         Some(|ring| ring.slots.len())
//!     }
//!
//!     fn enumerate(&self) -> Option<Box<dyn Iterator<Item = &u32> + '_>> {
//!         Some(Box::new(self.slots.iter()))
//!     }
//! }
//!
//! let ring = Ring { slots: vec![3, 5, 8] };
//! assert_eq!(introspect::size_of(&ring), 3);
//! assert!(introspect::contains(&ring, &5));
//! ```

mod registry;
mod std_impls;

use std::any::type_name;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

pub use registry::{register, registered};

/// Reads the number of items of a `C`.
pub type SizeFn<C> = fn(&C) -> usize;

/// Tests whether a `C` holds an item.
pub type MembershipFn<C> = fn(&C, &<C as Collection>::Item) -> bool;

/// A collection-like type the introspector can measure and search.
///
/// All members are optional. A type that declares nothing and cannot be
/// enumerated fails resolution for every collection check.
pub trait Collection {
    /// The element type.
    type Item;

    /// A direct accessor for the number of items.
    fn size_accessor() -> Option<SizeFn<Self>> {
        None
    }

    /// A direct membership test.
    fn membership_accessor() -> Option<MembershipFn<Self>> {
        None
    }

    /// Enumerate the items, if the type can be walked.
    fn enumerate(&self) -> Option<Box<dyn Iterator<Item = &Self::Item> + '_>> {
        None
    }

    /// Accessors supplied at runtime, used instead of the declared ones.
    ///
    /// `None` by default. A `'static` type that takes its accessors from
    /// [`register`] returns [`registered::<Self>()`](registered) here.
    fn registered_accessors() -> Option<Accessors<Self>> {
        None
    }
}

/// Values a guard can inspect as a [`Collection`].
///
/// Implemented for the standard collections and for `&C`, `Box<C>`, `Rc<C>`
/// and `Arc<C>` of any collection `C`. A custom collection is usually guarded
/// by reference; to guard it by value, implement this trait with
/// `Target = Self`.
pub trait AsCollection {
    /// The collection type being inspected.
    type Target: Collection + ?Sized;

    /// Borrow the collection.
    fn as_collection(&self) -> &Self::Target;
}

impl<C: Collection + ?Sized> AsCollection for &C {
    type Target = C;

    fn as_collection(&self) -> &C {
        self
    }
}

impl<C: Collection + ?Sized> AsCollection for Box<C> {
    type Target = C;

    fn as_collection(&self) -> &C {
        self
    }
}

impl<C: Collection + ?Sized> AsCollection for Rc<C> {
    type Target = C;

    fn as_collection(&self) -> &C {
        self
    }
}

impl<C: Collection + ?Sized> AsCollection for Arc<C> {
    type Target = C;

    fn as_collection(&self) -> &C {
        self
    }
}

/// The resolved accessors of one collection type.
pub struct Accessors<C: Collection + ?Sized> {
    size: Option<SizeFn<C>>,
    membership: Option<MembershipFn<C>>,
}

impl<C: Collection + ?Sized> Accessors<C> {
    /// No direct accessors; everything goes through enumeration.
    pub fn none() -> Self {
        Accessors {
            size: None,
            membership: None,
        }
    }

    /// The accessors declared by `C`'s [`Collection`] impl.
    pub fn declared() -> Self {
        Accessors {
            size: C::size_accessor(),
            membership: C::membership_accessor(),
        }
    }

    /// Use `size` as the size accessor.
    pub fn with_size(mut self, size: SizeFn<C>) -> Self {
        self.size = Some(size);
        self
    }

    /// Use `membership` as the membership accessor.
    pub fn with_membership(mut self, membership: MembershipFn<C>) -> Self {
        self.membership = Some(membership);
        self
    }

    /// The size accessor, if any.
    pub fn size(&self) -> Option<SizeFn<C>> {
        self.size
    }

    /// The membership accessor, if any.
    pub fn membership(&self) -> Option<MembershipFn<C>> {
        self.membership
    }
}

impl<C: Collection + ?Sized> Clone for Accessors<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: Collection + ?Sized> Copy for Accessors<C> {}

impl<C: Collection + ?Sized> fmt::Debug for Accessors<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessors")
            .field("collection", &type_name::<C>())
            .field("size", &self.size.is_some())
            .field("membership", &self.membership.is_some())
            .finish()
    }
}

/// The accessors used for `C`: registered ones if `C` has any, else the
/// ones its [`Collection`] impl declares.
pub fn resolve<C>() -> Accessors<C>
where
    C: Collection + ?Sized,
{
    C::registered_accessors().unwrap_or_else(Accessors::declared)
}

/// The outcome of a bounded count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Count {
    /// Every item was counted.
    Exact(usize),
    /// Enumeration stopped at the bound; there are at least this many items.
    AtLeast(usize),
}

impl Count {
    /// The number of items seen.
    pub fn value(self) -> usize {
        match self {
            Count::Exact(n) | Count::AtLeast(n) => n,
        }
    }

    /// Whether the count is known exactly.
    pub fn is_exact(self) -> bool {
        matches!(self, Count::Exact(_))
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Count::Exact(n) => write!(f, "{}", n),
            Count::AtLeast(n) => write!(f, "at least {}", n),
        }
    }
}

/// The capability a collection type failed to provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Capability {
    /// Counting items.
    Size,
    /// Testing membership.
    Membership,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Size => write!(f, "size"),
            Capability::Membership => write!(f, "membership"),
        }
    }
}

/// A collection type offers neither a direct accessor nor enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{collection}` exposes no {capability} accessor and cannot be enumerated")]
pub struct ResolutionError {
    collection: &'static str,
    capability: Capability,
}

impl ResolutionError {
    fn new<C: ?Sized>(capability: Capability) -> Self {
        ResolutionError {
            collection: type_name::<C>(),
            capability,
        }
    }

    /// Name of the offending collection type.
    pub fn collection(&self) -> &'static str {
        self.collection
    }

    /// The capability that could not be resolved.
    pub fn capability(&self) -> Capability {
        self.capability
    }
}

/// Count the items of `collection`, walking it completely if needed.
pub fn try_size_of<C>(collection: &C) -> Result<usize, ResolutionError>
where
    C: Collection + ?Sized,
{
    match resolve::<C>().size() {
        Some(size) => Ok(size(collection)),
        None => count_by_enumeration(collection, None),
    }
}

/// Count the items of `collection`, pulling at most `limit` items when it
/// has to be enumerated.
///
/// With a size accessor the count is [`Count::Exact`], and may exceed
/// `limit`. Enumeration that reaches `limit` stops there and reports
/// [`Count::AtLeast`].
pub fn try_count_up_to<C>(collection: &C, limit: usize) -> Result<Count, ResolutionError>
where
    C: Collection + ?Sized,
{
    if let Some(size) = resolve::<C>().size() {
        return Ok(Count::Exact(size(collection)));
    }

    let seen = count_by_enumeration(collection, Some(limit))?;
    Ok(if seen >= limit {
        Count::AtLeast(seen)
    } else {
        Count::Exact(seen)
    })
}

/// Count by walking the items, ignoring any size accessor.
///
/// Pulls at most `limit` items when a limit is given.
pub fn count_by_enumeration<C>(collection: &C, limit: Option<usize>) -> Result<usize, ResolutionError>
where
    C: Collection + ?Sized,
{
    let items = collection
        .enumerate()
        .ok_or_else(|| ResolutionError::new::<C>(Capability::Size))?;

    Ok(match limit {
        Some(limit) => items.take(limit).count(),
        None => items.count(),
    })
}

/// Test whether `collection` holds `item`.
///
/// Uses the membership accessor when there is one, otherwise enumerates
/// until the first match.
pub fn try_contains<C>(collection: &C, item: &C::Item) -> Result<bool, ResolutionError>
where
    C: Collection + ?Sized,
    C::Item: PartialEq,
{
    if let Some(membership) = resolve::<C>().membership() {
        return Ok(membership(collection, item));
    }

    let mut items = collection
        .enumerate()
        .ok_or_else(|| ResolutionError::new::<C>(Capability::Membership))?;
    Ok(items.any(|candidate| candidate == item))
}

/// Like [`try_size_of`], panicking on a [`ResolutionError`].
pub fn size_of<C>(collection: &C) -> usize
where
    C: Collection + ?Sized,
{
    try_size_of(collection).unwrap_or_else(|err| escalate(err))
}

/// Like [`try_count_up_to`], panicking on a [`ResolutionError`].
pub fn count_up_to<C>(collection: &C, limit: usize) -> Count
where
    C: Collection + ?Sized,
{
    try_count_up_to(collection, limit).unwrap_or_else(|err| escalate(err))
}

/// Like [`try_contains`], panicking on a [`ResolutionError`].
pub fn contains<C>(collection: &C, item: &C::Item) -> bool
where
    C: Collection + ?Sized,
    C::Item: PartialEq,
{
    try_contains(collection, item).unwrap_or_else(|err| escalate(err))
}

fn escalate(err: ResolutionError) -> ! {
    #[cfg(feature = "tracing")]
    tracing::error!(
        target: "bulwark",
        collection = err.collection(),
        capability = %err.capability(),
        "collection accessor resolution failed"
    );

    panic!("{}", err)
}
