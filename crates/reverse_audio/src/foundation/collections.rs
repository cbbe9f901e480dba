//! Handle-based storage
//!
//! Assets live in a [`HandleMap`] owned by the asset manager. Everything else
//! refers to them through a [`TypedHandle`], a `Copy` key that does not keep
//! the asset alive.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

pub use slotmap::{DefaultKey, SlotMap};

/// Handle-based map using slot map for stable references
pub type HandleMap<T> = SlotMap<DefaultKey, T>;

/// Typed handle for type-safe asset references
///
/// The type parameter only tags the handle; `T` does not need to be `Copy`,
/// `Eq` or `Debug` for the handle to be.
pub struct TypedHandle<T> {
    key: DefaultKey,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> TypedHandle<T> {
    /// Create a new typed handle from a key
    pub fn new(key: DefaultKey) -> Self {
        Self {
            key,
            _phantom: PhantomData,
        }
    }

    /// Get the underlying key
    pub fn key(&self) -> DefaultKey {
        self.key
    }
}

impl<T> Clone for TypedHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypedHandle<T> {}

impl<T> PartialEq for TypedHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<T> Eq for TypedHandle<T> {}

impl<T> Hash for TypedHandle<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl<T> fmt::Debug for TypedHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypedHandle").field(&self.key).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NotCopy(#[allow(dead_code)] Vec<u8>);

    #[test]
    fn test_handles_compare_by_key() {
        let mut map: HandleMap<NotCopy> = HandleMap::new();
        let a = TypedHandle::<NotCopy>::new(map.insert(NotCopy(vec![1])));
        let b = TypedHandle::<NotCopy>::new(map.insert(NotCopy(vec![2])));

        let a_copy = a;
        assert_eq!(a, a_copy);
        assert_ne!(a, b);
        assert!(map.get(a.key()).is_some());
    }
}
