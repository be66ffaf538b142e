//! Lock-protected map for sharing one tree between threads.

use parking_lot::RwLock;

use crate::map::RadixMap;
use crate::tracing_helpers::debug_log;

/// A [`RadixMap`] behind a reader/writer lock.
///
/// The tree itself is unsynchronized; this wrapper serializes writers and
/// lets readers run concurrently. Values are cloned out so no borrow outlives
/// the lock.
///
/// ```rust
/// use radix_rs::SharedRadixMap;
///
/// let map = SharedRadixMap::new();
/// map.insert("user:1001", 42u64);
/// map.insert("user:1002", 43u64);
///
/// assert_eq!(map.get("user:1001"), Some(42));
/// assert_eq!(map.prefix("user:").len(), 2);
/// ```
pub struct SharedRadixMap<V> {
    inner: RwLock<RadixMap<V>>,
}

impl<V> SharedRadixMap<V> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(RadixMap::new()),
        }
    }

    /// Insert a key-value pair, returning the previous value.
    pub fn insert(&self, key: impl AsRef<[u8]>, value: V) -> Option<V> {
        self.inner.write().insert(key, value)
    }

    pub fn contains_key(&self, key: impl AsRef<[u8]>) -> bool {
        self.inner.read().contains_key(key)
    }

    /// Remove a key, returning its value if it existed.
    pub fn remove(&self, key: impl AsRef<[u8]>) -> Option<V> {
        self.inner.write().remove(key)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn clear(&self) {
        self.inner.write().clear();
    }

    pub fn into_inner(self) -> RadixMap<V> {
        self.inner.into_inner()
    }
}

impl<V: Clone> SharedRadixMap<V> {
    pub fn get(&self, key: impl AsRef<[u8]>) -> Option<V> {
        self.inner.read().get(key).cloned()
    }

    /// All entries whose key starts with `prefix`, in key order.
    pub fn prefix(&self, prefix: impl AsRef<[u8]>) -> Vec<(Vec<u8>, V)> {
        let inner = self.inner.read();
        let entries = inner
            .prefix_iter(prefix)
            .map(|(key, value)| (key, value.clone()))
            .collect();
        entries
    }

    /// Copy of the current contents.
    pub fn snapshot(&self) -> RadixMap<V> {
        let inner = self.inner.read();
        debug_log!(len = inner.len(), "radix map: snapshot");
        inner.clone()
    }
}

impl<V> Default for SharedRadixMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> From<RadixMap<V>> for SharedRadixMap<V> {
    fn from(map: RadixMap<V>) -> Self {
        Self {
            inner: RwLock::new(map),
        }
    }
}
