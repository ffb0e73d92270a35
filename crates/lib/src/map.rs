//! Insertion-ordered key/value storage.
//!
//! [`OrderedMap`] is the leaf storage behind [`ArrayObject`](crate::ArrayObject):
//! an insertion-ordered map from [`Key`] to `V` that also tracks the next
//! integer key to hand out for appends.
//!
//! # Key rules
//!
//! - Inserting an existing key replaces the value in place; the entry keeps
//!   its position.
//! - Appending assigns the next integer key, which starts at 0 and is always
//!   greater than every integer key the map has seen.
//! - Removing entries never lowers the next integer key.
//! - A map collected from an iterator is a fresh map: its next integer key
//!   derives only from the keys it was built from.
//!
//! ```
//! use array_object::{Key, OrderedMap};
//!
//! let mut map = OrderedMap::new();
//! map.insert(10, "ten");
//! assert_eq!(map.append("eleven"), Key::Int(11));
//!
//! map.remove(&Key::Int(11));
//! assert_eq!(map.append("twelve"), Key::Int(12));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use indexmap::IndexMap;
use serde::de::{Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::Key;

/// An insertion-ordered map from [`Key`] to `V` with an auto-increment counter.
#[derive(Clone)]
pub struct OrderedMap<V> {
    entries: IndexMap<Key, V>,
    next_int_key: i64,
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> OrderedMap<V> {
    /// Creates an empty map
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
            next_int_key: 0,
        }
    }

    /// Creates an empty map with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
            next_int_key: 0,
        }
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The key the next [`append`](Self::append) will use
    pub fn next_int_key(&self) -> i64 {
        self.next_int_key
    }

    /// Gets the value stored under `key`
    pub fn get(&self, key: &Key) -> Option<&V> {
        self.entries.get(key)
    }

    /// Gets a mutable reference to the value stored under `key`
    pub fn get_mut(&mut self, key: &Key) -> Option<&mut V> {
        self.entries.get_mut(key)
    }

    /// Returns true if `key` is present
    pub fn contains_key(&self, key: &Key) -> bool {
        self.entries.contains_key(key)
    }

    /// Gets the entry at position `index`
    pub fn get_index(&self, index: usize) -> Option<(&Key, &V)> {
        self.entries.get_index(index)
    }

    /// Returns the position of `key`
    pub fn index_of(&self, key: &Key) -> Option<usize> {
        self.entries.get_index_of(key)
    }

    /// The first entry in order
    pub fn first(&self) -> Option<(&Key, &V)> {
        self.entries.first()
    }

    /// The last entry in order
    pub fn last(&self) -> Option<(&Key, &V)> {
        self.entries.last()
    }

    /// Stores `value` under `key`, or under the next integer key when `key` is `None`.
    ///
    /// Returns the key the value was stored under.
    pub fn set(&mut self, key: Option<Key>, value: V) -> Key {
        match key {
            Some(key) => {
                self.insert(key.clone(), value);
                key
            }
            None => self.append(value),
        }
    }

    /// Stores `value` under `key`, returning the value it replaced.
    ///
    /// An existing key keeps its position; a new key goes to the end.
    pub fn insert(&mut self, key: impl Into<Key>, value: V) -> Option<V> {
        let key = key.into();
        self.observe(&key);
        self.entries.insert(key, value)
    }

    /// Appends `value` under the next integer key and returns that key
    pub fn append(&mut self, value: V) -> Key {
        let key = Key::Int(self.next_int_key);
        self.insert(key.clone(), value);
        key
    }

    /// Removes `key`, keeping the order of the remaining entries
    pub fn remove(&mut self, key: &Key) -> Option<V> {
        self.entries.shift_remove(key)
    }

    /// Removes and returns the last entry
    pub fn pop_last(&mut self) -> Option<(Key, V)> {
        self.entries.pop()
    }

    /// Removes and returns the first entry
    pub fn pop_first(&mut self) -> Option<(Key, V)> {
        self.entries.shift_remove_index(0)
    }

    /// Replaces every entry with `entries` and returns the previous contents.
    ///
    /// The map's counter is rebuilt from the new keys.
    pub fn replace_all<K, I>(&mut self, entries: I) -> OrderedMap<V>
    where
        K: Into<Key>,
        I: IntoIterator<Item = (K, V)>,
    {
        std::mem::replace(self, entries.into_iter().collect())
    }

    /// Stable in-place sort of the entries
    pub fn sort_by<F>(&mut self, mut cmp: F)
    where
        F: FnMut(&Key, &V, &Key, &V) -> Ordering,
    {
        self.entries.sort_by(|k1, v1, k2, v2| cmp(k1, v1, k2, v2));
    }

    /// Reverses the order of the entries
    pub fn reverse(&mut self) {
        self.entries.reverse();
    }

    /// Iterates over entries in order
    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, V> {
        self.entries.iter()
    }

    /// Iterates over keys in order
    pub fn keys(&self) -> indexmap::map::Keys<'_, Key, V> {
        self.entries.keys()
    }

    /// Iterates over values in order
    pub fn values(&self) -> indexmap::map::Values<'_, Key, V> {
        self.entries.values()
    }

    /// Consumes the map into its ordered entries
    pub fn into_entries(self) -> Vec<(Key, V)> {
        self.entries.into_iter().collect()
    }

    /// Consumes the map into its values, discarding keys
    pub fn into_values(self) -> Vec<V> {
        self.entries.into_values().collect()
    }

    /// Returns true if the keys are exactly `0..len` in order
    pub fn is_list(&self) -> bool {
        self.entries
            .keys()
            .enumerate()
            .all(|(i, key)| key.as_int() == Some(i as i64))
    }

    /// Raises the counter to at least `next`; it never goes down
    pub fn reserve_int_keys(&mut self, next: i64) {
        self.next_int_key = self.next_int_key.max(next);
    }

    fn observe(&mut self, key: &Key) {
        if let Key::Int(n) = key {
            if *n >= self.next_int_key {
                self.next_int_key = n.saturating_add(1);
            }
        }
    }
}

impl<V: Clone> OrderedMap<V> {
    /// Copies the entries. The copy is independent of later changes to `self`.
    pub fn snapshot(&self) -> OrderedMap<V> {
        self.clone()
    }
}

impl<K: Into<Key>, V> FromIterator<(K, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = OrderedMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<Key>, V> Extend<(K, V)> for OrderedMap<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<V> From<Vec<V>> for OrderedMap<V> {
    fn from(values: Vec<V>) -> Self {
        let mut map = OrderedMap::with_capacity(values.len());
        for value in values {
            map.append(value);
        }
        map
    }
}

impl<K: Into<Key>, V, const N: usize> From<[(K, V); N]> for OrderedMap<V> {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<V> IntoIterator for OrderedMap<V> {
    type Item = (Key, V);
    type IntoIter = indexmap::map::IntoIter<Key, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a OrderedMap<V> {
    type Item = (&'a Key, &'a V);
    type IntoIter = indexmap::map::Iter<'a, Key, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// Order matters: two maps with the same entries in a different order differ.
impl<V: PartialEq> PartialEq for OrderedMap<V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.entries.iter().eq(other.entries.iter())
    }
}

impl<V: Eq> Eq for OrderedMap<V> {}

impl<V: fmt::Debug> fmt::Debug for OrderedMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

// Lists serialize as sequences, everything else as an object keyed by the
// key's string form. Both shapes deserialize.
impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_list() {
            let mut seq = serializer.serialize_seq(Some(self.len()))?;
            for value in self.entries.values() {
                seq.serialize_element(value)?;
            }
            seq.end()
        } else {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (key, value) in &self.entries {
                map.serialize_entry(key, value)?;
            }
            map.end()
        }
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(EntriesVisitor(PhantomData))
    }
}

struct EntriesVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
    type Value = OrderedMap<V>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a sequence of values or a map of keys to values")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut map = OrderedMap::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(value) = seq.next_element::<V>()? {
            map.append(value);
        }
        Ok(map)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = OrderedMap::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<Key, V>()? {
            map.insert(key, value);
        }
        Ok(map)
    }
}
