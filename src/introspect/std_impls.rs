//! `Collection` and `AsCollection` for the standard collections.
//!
//! Sequences declare a size accessor and are searched by enumeration. Sets
//! and maps also declare membership; a map's items are its keys.

use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::hash::{BuildHasher, Hash};

use super::{AsCollection, Collection, MembershipFn, SizeFn};

macro_rules! sequence {
    ($([$($generics:tt)*] $ty:ty;)*) => {$(
        impl<$($generics)*> Collection for $ty {
            type Item = T;

            fn size_accessor() -> Option<SizeFn<Self>> {
                let size: SizeFn<Self> = |seq| seq.len();
                Some(size)
            }

            fn enumerate(&self) -> Option<Box<dyn Iterator<Item = &T> + '_>> {
                Some(Box::new(self.iter()))
            }
        }
    )*};
}

sequence! {
    [T] Vec<T>;
    [T] VecDeque<T>;
    [T] LinkedList<T>;
    [T] BinaryHeap<T>;
    [T] [T];
    [T, const N: usize] [T; N];
}

impl<T, S> Collection for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    type Item = T;

    fn size_accessor() -> Option<SizeFn<Self>> {
        let size: SizeFn<Self> = |set| set.len();
        Some(size)
    }

    fn membership_accessor() -> Option<MembershipFn<Self>> {
        let membership: MembershipFn<Self> = |set, item| set.contains(item);
        Some(membership)
    }

    fn enumerate(&self) -> Option<Box<dyn Iterator<Item = &T> + '_>> {
        Some(Box::new(self.iter()))
    }
}

impl<T: Ord> Collection for BTreeSet<T> {
    type Item = T;

    fn size_accessor() -> Option<SizeFn<Self>> {
        let size: SizeFn<Self> = |set| set.len();
        Some(size)
    }

    fn membership_accessor() -> Option<MembershipFn<Self>> {
        let membership: MembershipFn<Self> = |set, item| set.contains(item);
        Some(membership)
    }

    fn enumerate(&self) -> Option<Box<dyn Iterator<Item = &T> + '_>> {
        Some(Box::new(self.iter()))
    }
}

impl<K, V, S> Collection for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Item = K;

    fn size_accessor() -> Option<SizeFn<Self>> {
        let size: SizeFn<Self> = |map| map.len();
        Some(size)
    }

    fn membership_accessor() -> Option<MembershipFn<Self>> {
        let membership: MembershipFn<Self> = |map, key| map.contains_key(key);
        Some(membership)
    }

    fn enumerate(&self) -> Option<Box<dyn Iterator<Item = &K> + '_>> {
        Some(Box::new(self.keys()))
    }
}

impl<K: Ord, V> Collection for BTreeMap<K, V> {
    type Item = K;

    fn size_accessor() -> Option<SizeFn<Self>> {
        let size: SizeFn<Self> = |map| map.len();
        Some(size)
    }

    fn membership_accessor() -> Option<MembershipFn<Self>> {
        let membership: MembershipFn<Self> = |map, key| map.contains_key(key);
        Some(membership)
    }

    fn enumerate(&self) -> Option<Box<dyn Iterator<Item = &K> + '_>> {
        Some(Box::new(self.keys()))
    }
}

// Owned standard collections are guarded by value.
macro_rules! as_itself {
    ($([$($generics:tt)*] $ty:ty;)*) => {$(
        impl<$($generics)*> AsCollection for $ty
        where
            $ty: Collection,
        {
            type Target = $ty;

            fn as_collection(&self) -> &$ty {
                self
            }
        }
    )*};
}

as_itself! {
    [T] Vec<T>;
    [T] VecDeque<T>;
    [T] LinkedList<T>;
    [T] BinaryHeap<T>;
    [T, const N: usize] [T; N];
    [T, S] HashSet<T, S>;
    [T] BTreeSet<T>;
    [K, V, S] HashMap<K, V, S>;
    [K, V] BTreeMap<K, V>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::introspect::{try_contains, try_count_up_to, try_size_of, Count};

    #[test]
    fn sequences() {
        let deque: VecDeque<_> = (1..=4).collect();
        assert_eq!(try_size_of(&deque).unwrap(), 4);
        assert!(try_contains(&deque, &3).unwrap());

        let list: LinkedList<_> = ["a", "b"].into_iter().collect();
        assert!(!try_contains(&list, &"c").unwrap());

        let heap: BinaryHeap<_> = vec![5, 1, 9].into();
        assert_eq!(try_count_up_to(&heap, 1).unwrap(), Count::Exact(3));

        let array = [0u8; 6];
        assert_eq!(try_size_of(&array).unwrap(), 6);
    }

    #[test]
    fn sets_and_maps_search_keys() {
        let set: HashSet<_> = ["x", "y"].into_iter().collect();
        assert!(try_contains(&set, &"x").unwrap());

        let tree: BTreeSet<_> = (0..10).collect();
        assert_eq!(try_size_of(&tree).unwrap(), 10);

        let map: HashMap<_, _> = [("k", 1)].into_iter().collect();
        assert!(try_contains(&map, &"k").unwrap());
        assert!(!try_contains(&map, &"v").unwrap());

        let tree_map: BTreeMap<_, _> = [(1, 'a'), (2, 'b')].into_iter().collect();
        assert_eq!(try_size_of(&tree_map).unwrap(), 2);
    }

    #[test]
    fn owned_collections_borrow_themselves() {
        let v = vec![1, 2];
        assert!(std::ptr::eq(v.as_collection(), &v));
    }
}
