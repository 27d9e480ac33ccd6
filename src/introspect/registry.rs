//! Process-wide registry of accessors supplied at runtime.

#[cfg(feature = "tracing")]
use std::any::type_name;
use std::any::{Any, TypeId};
use std::sync::LazyLock;

use dashmap::DashMap;

use super::{Accessors, Collection};

type Entry = Box<dyn Any + Send + Sync>;

static REGISTRY: LazyLock<DashMap<TypeId, Entry>> = LazyLock::new(DashMap::new);

/// Install accessors for `C`, replacing any registered before.
///
/// For types whose [`Collection`] impl cannot declare a fast path. The
/// registry is keyed by type identity, so `C` must be `'static`, and it is
/// only consulted when `C` forwards
/// [`registered_accessors`](Collection::registered_accessors) to
/// [`registered`]. The last registration wins.
///
/// # Example
///
/// ```rust
/// use bulwark::introspect::{self, Accessors, Collection};
///
/// struct Bag(Vec<u8>);
///
/// impl Collection for Bag {
///     type Item = u8;
///
///     fn enumerate(&self) -> Option<Box<dyn Iterator<Item = &u8> + '_>> {
///         Some(Box::new(self.0.iter()))
///     }
///
///     fn registered_accessors() -> Option<Accessors<Self>> {
///         introspect::registered::<Self>()
///     }
/// }
///
/// assert!(introspect::resolve::<Bag>().size().is_none());
/// introspect::register(Accessors::<Bag>::none().with_size(|bag| bag.0.len()));
/// assert!(introspect::resolve::<Bag>().size().is_some());
/// ```
pub fn register<C>(accessors: Accessors<C>)
where
    C: Collection + ?Sized + 'static,
{
    #[cfg(feature = "tracing")]
    tracing::debug!(
        target: "bulwark",
        collection = type_name::<C>(),
        size = accessors.size().is_some(),
        membership = accessors.membership().is_some(),
        "registering collection accessors"
    );

    REGISTRY.insert(TypeId::of::<C>(), Box::new(accessors));
}

/// The accessors registered for `C`, if any.
///
/// Concurrent readers never block each other; a read copies the `fn`
/// pointers out of the registry.
pub fn registered<C>() -> Option<Accessors<C>>
where
    C: Collection + ?Sized + 'static,
{
    let accessors = REGISTRY
        .get(&TypeId::of::<C>())
        .and_then(|entry| entry.downcast_ref::<Accessors<C>>().copied());

    #[cfg(feature = "tracing")]
    tracing::trace!(
        target: "bulwark",
        collection = type_name::<C>(),
        found = accessors.is_some(),
        "looking up registered collection accessors"
    );

    accessors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::introspect::resolve;

    struct Declared(Vec<i32>);

    impl Collection for Declared {
        type Item = i32;

        fn size_accessor() -> Option<crate::introspect::SizeFn<Self>> {
            Some(|declared| declared.0.len())
        }
    }

    struct Runtime;

    impl Collection for Runtime {
        type Item = i32;

        fn registered_accessors() -> Option<Accessors<Self>> {
            registered::<Self>()
        }
    }

    struct Ignoring;

    impl Collection for Ignoring {
        type Item = i32;
    }

    #[test]
    fn declared_accessors_skip_the_registry() {
        let accessors = resolve::<Declared>();
        assert_eq!(accessors.size().map(|size| size(&Declared(vec![1, 2]))), Some(2));
        assert!(accessors.membership().is_none());
        assert!(!REGISTRY.contains_key(&TypeId::of::<Declared>()));
    }

    #[test]
    fn registration_overrides_declaration() {
        assert!(resolve::<Runtime>().size().is_none());
        register(Accessors::<Runtime>::none().with_size(|_| 42));
        let size = resolve::<Runtime>().size().map(|f| f(&Runtime));
        assert_eq!(size, Some(42));

        register(Accessors::<Runtime>::none().with_size(|_| 7));
        assert_eq!(resolve::<Runtime>().size().map(|f| f(&Runtime)), Some(7));
    }

    #[test]
    fn types_that_do_not_forward_ignore_registrations() {
        register(Accessors::<Ignoring>::none().with_size(|_| 1));
        assert!(registered::<Ignoring>().is_some());
        assert!(resolve::<Ignoring>().size().is_none());
    }
}
