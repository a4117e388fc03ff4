use std::hash::Hash;
use std::ops::{Index, IndexMut};

use indexmap::IndexMap;

use super::{EdgeId, VertexId};

/// Scratch state keyed by vertex identity. See [`KeyedMap`].
pub type VertexMap<T> = KeyedMap<VertexId, T>;
/// Scratch state keyed by edge identity. See [`KeyedMap`].
pub type EdgeMap<T> = KeyedMap<EdgeId, T>;

/// An insertion-ordered map with default-on-read indexing.
///
/// The algorithms in this crate attach scratch state to vertices and
/// edges by id and rely on an absent key reading as the default value:
/// SCC and rank coloring distinguish "not yet visited" (0) from
/// "visited with DFS number n" by exactly that convention. `map[key]`
/// reads the stored value or the default without inserting;
/// `map[key] = v` (and any mutation through indexing) inserts the
/// default first when the key is absent.
///
/// Iteration follows insertion order, keeping outputs built from these
/// maps deterministic.
#[derive(Debug, Clone)]
pub struct KeyedMap<K, T> {
    inner: IndexMap<K, T>,
    default: T,
}

impl<K: Hash + Eq, T: Default> KeyedMap<K, T> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            inner: IndexMap::new(),
            default: T::default(),
        }
    }
}

impl<K: Hash + Eq, T: Default> Default for KeyedMap<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, T> KeyedMap<K, T> {
    /// Insert a value, returning the previous one if the key was
    /// present.
    pub fn insert(&mut self, key: K, value: T) -> Option<T> {
        self.inner.insert(key, value)
    }

    /// Remove a key, returning its value. Preserves the order of the
    /// remaining entries.
    pub fn remove(&mut self, key: K) -> Option<T> {
        self.inner.shift_remove(&key)
    }

    /// Stored value for a key, if any. Unlike indexing, this does not
    /// fall back to the default.
    pub fn get(&self, key: K) -> Option<&T> {
        self.inner.get(&key)
    }

    /// `true` if a value is stored for this key.
    pub fn contains(&self, key: K) -> bool {
        self.inner.contains_key(&key)
    }

    /// Number of stored entries. Keys only ever read through indexing
    /// are not stored.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// `true` if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<K: Hash + Eq + Copy, T> KeyedMap<K, T> {
    /// Iterate over stored entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (K, &T)> {
        self.inner.iter().map(|(k, v)| (*k, v))
    }

    /// Iterate over stored keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.inner.keys().copied()
    }
}

impl<K: Hash + Eq, T: Default> Index<K> for KeyedMap<K, T> {
    type Output = T;

    /// Absent keys read as the default value, without inserting.
    fn index(&self, key: K) -> &T {
        self.inner.get(&key).unwrap_or(&self.default)
    }
}

impl<K: Hash + Eq, T: Default> IndexMut<K> for KeyedMap<K, T> {
    /// Absent keys are default-inserted before the mutable borrow.
    fn index_mut(&mut self, key: K) -> &mut T {
        self.inner.entry(key).or_default()
    }
}
