//! Key/value map over the radix tree.

use std::fmt;

use crate::debug::{self, TreeStats};
use crate::error::IntegrityError;
use crate::iter::{Iter, Keys, Values};
use crate::node::Node;
use crate::tracing_helpers::debug_log;
use crate::tree;

/// An ordered map from byte-string keys to values, stored in a compressed
/// radix tree.
///
/// Keys sharing a prefix share the nodes that spell it, and every key with a
/// given prefix can be reached from a single subtree. Iteration is in
/// ascending byte order.
///
/// ```rust
/// use radix_rs::RadixMap;
///
/// let mut map = RadixMap::new();
/// map.insert("armor", 1);
/// map.insert("armored", 2);
/// map.insert("arm", 3);
///
/// assert_eq!(map.get("armor"), Some(&1));
/// assert_eq!(map.get("armo"), None);
///
/// let mut seen = Vec::new();
/// map.for_each_with_prefix("armor", |key, value| seen.push((key.to_vec(), *value)));
/// assert_eq!(seen, vec![(b"armor".to_vec(), 1), (b"armored".to_vec(), 2)]);
/// ```
#[derive(Clone)]
pub struct RadixMap<V> {
    root: Option<Box<Node<V>>>,
    len: usize,
}

impl<V> RadixMap<V> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        debug_log!(len = self.len, "radix map: clear");
        self.root = None;
        self.len = 0;
    }

    /// Insert `value` under `key`, returning the value it replaced.
    pub fn insert(&mut self, key: impl AsRef<[u8]>, value: V) -> Option<V> {
        let (root, old) = tree::insert(self.root.take(), key.as_ref(), value);
        self.root = Some(root);
        if old.is_none() {
            self.len += 1;
        }
        old
    }

    pub fn get(&self, key: impl AsRef<[u8]>) -> Option<&V> {
        tree::lookup(self.root.as_deref(), key.as_ref()).and_then(|node| node.value.as_ref())
    }

    pub fn get_mut(&mut self, key: impl AsRef<[u8]>) -> Option<&mut V> {
        tree::lookup_mut(self.root.as_deref_mut(), key.as_ref())
            .and_then(|node| node.value.as_mut())
    }

    pub fn contains_key(&self, key: impl AsRef<[u8]>) -> bool {
        tree::lookup(self.root.as_deref(), key.as_ref()).is_some_and(Node::is_terminal)
    }

    /// Remove `key`, returning its value if it was present.
    pub fn remove(&mut self, key: impl AsRef<[u8]>) -> Option<V> {
        let (root, old) = tree::delete(self.root.take(), key.as_ref());
        self.root = root;
        if old.is_some() {
            self.len -= 1;
        }
        old
    }

    /// Call `visit` with every entry, in ascending key order.
    pub fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(&[u8], &V),
    {
        let mut buffer = Vec::new();
        tree::traverse(self.root.as_deref(), &mut buffer, &mut visit);
    }

    /// Call `visit` with every entry whose key starts with `prefix`, in
    /// ascending key order.
    pub fn for_each_with_prefix<F>(&self, prefix: impl AsRef<[u8]>, mut visit: F)
    where
        F: FnMut(&[u8], &V),
    {
        if let Some(anchor) = tree::prefix_anchor(self.root.as_deref(), prefix.as_ref()) {
            let mut buffer = anchor.prefix;
            tree::traverse(Some(anchor.node), &mut buffer, &mut visit);
        }
    }

    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(self.root.as_deref())
    }

    pub fn keys(&self) -> Keys<'_, V> {
        Keys { inner: self.iter() }
    }

    pub fn values(&self) -> Values<'_, V> {
        Values { inner: self.iter() }
    }

    /// Iterate the entries whose key starts with `prefix`.
    pub fn prefix_iter(&self, prefix: impl AsRef<[u8]>) -> Iter<'_, V> {
        Iter::from_anchor(tree::prefix_anchor(self.root.as_deref(), prefix.as_ref()))
    }

    /// Verify the tree's structural invariants and its recorded length.
    pub fn check_integrity(&self) -> Result<(), IntegrityError> {
        debug::check_integrity(self.root.as_deref(), self.len)
    }

    pub fn stats(&self) -> TreeStats {
        debug::stats(self.root.as_deref())
    }

    /// Render the node layout, one node per line. Meant for debugging.
    pub fn structure(&self) -> String {
        debug::structure(self.root.as_deref())
    }
}

impl<V> Default for RadixMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for RadixMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.iter()
                    .map(|(key, value)| (String::from_utf8_lossy(&key).into_owned(), value)),
            )
            .finish()
    }
}

impl<V: PartialEq> PartialEq for RadixMap<V> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<V: Eq> Eq for RadixMap<V> {}

impl<K: AsRef<[u8]>, V> FromIterator<(K, V)> for RadixMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: AsRef<[u8]>, V> Extend<(K, V)> for RadixMap<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, V> IntoIterator for &'a RadixMap<V> {
    type Item = (Vec<u8>, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
