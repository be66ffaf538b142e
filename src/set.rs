//! Key-only set over the radix tree.

use std::fmt;

use crate::debug::TreeStats;
use crate::error::IntegrityError;
use crate::iter::Keys;
use crate::map::RadixMap;

/// An ordered set of byte-string keys, stored in a compressed radix tree.
///
/// This is a [`RadixMap`] with no payload.
///
/// ```rust
/// use radix_rs::RadixSet;
///
/// let mut set = RadixSet::new();
/// set.insert("butterfly");
/// set.insert("butterscotch");
///
/// assert!(set.contains("butterfly"));
/// assert!(!set.contains("butter"));
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RadixSet {
    map: RadixMap<()>,
}

impl RadixSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Add `key`. Returns `true` if it was not already present.
    pub fn insert(&mut self, key: impl AsRef<[u8]>) -> bool {
        self.map.insert(key, ()).is_none()
    }

    pub fn contains(&self, key: impl AsRef<[u8]>) -> bool {
        self.map.contains_key(key)
    }

    /// Remove `key`. Returns `true` if it was present.
    pub fn remove(&mut self, key: impl AsRef<[u8]>) -> bool {
        self.map.remove(key).is_some()
    }

    pub fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(&[u8]),
    {
        self.map.for_each(|key, _| visit(key));
    }

    pub fn for_each_with_prefix<F>(&self, prefix: impl AsRef<[u8]>, mut visit: F)
    where
        F: FnMut(&[u8]),
    {
        self.map.for_each_with_prefix(prefix, |key, _| visit(key));
    }

    pub fn iter(&self) -> Keys<'_, ()> {
        self.map.keys()
    }

    pub fn prefix_iter(&self, prefix: impl AsRef<[u8]>) -> Keys<'_, ()> {
        Keys {
            inner: self.map.prefix_iter(prefix),
        }
    }

    pub fn check_integrity(&self) -> Result<(), IntegrityError> {
        self.map.check_integrity()
    }

    pub fn stats(&self) -> TreeStats {
        self.map.stats()
    }

    pub fn structure(&self) -> String {
        self.map.structure()
    }
}

impl fmt::Debug for RadixSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(
                self.iter()
                    .map(|key| String::from_utf8_lossy(&key).into_owned()),
            )
            .finish()
    }
}

impl<K: AsRef<[u8]>> FromIterator<K> for RadixSet {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<K: AsRef<[u8]>> Extend<K> for RadixSet {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a> IntoIterator for &'a RadixSet {
    type Item = Vec<u8>;
    type IntoIter = Keys<'a, ()>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
