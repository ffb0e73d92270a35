//! The array object.
//!
//! [`ArrayObject`] owns an [`OrderedMap`], an internal [`Cursor`] and a
//! [`MutationHook`]. Its methods fall into a few groups:
//!
//! - element access and bulk replacement (this module)
//! - cursor navigation ([`cursor`](self::cursor))
//! - sorting (`sort.rs`) and stack operations (`stack.rs`)
//! - read-only queries (`query.rs`)
//!
//! Every method that changes the contents ends in one private gate that
//! fires the hook exactly once and applies the method's cursor policy:
//! `offset_set`, `append` and `push` keep the cursor where it is, all other
//! mutations move it back to the first entry. Reads never fire the hook and
//! never move the cursor.
//!
//! # Examples
//!
//! ```
//! use array_object::{ArrayObject, Key, SortFlag, UpdateCounter, Value, array};
//!
//! let mut numbers: ArrayObject<Value, UpdateCounter> =
//!     ArrayObject::from(array![10 => "ten", 11 => "eleven", 12 => "twelve"]);
//!
//! numbers.a_r_sort(SortFlag::Regular);
//! assert_eq!(numbers.keys(), vec![Key::Int(12), Key::Int(10), Key::Int(11)]);
//!
//! assert_eq!(numbers.push([Value::from("thirteen")]), 4);
//! assert_eq!(numbers.hook().count(), 2);
//!
//! // reads leave the hook alone
//! numbers.slice(0, Some(2), false);
//! assert_eq!(numbers.hook().count(), 2);
//! ```

use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::{Key, OrderedMap, Result};

mod cursor;
mod errors;
mod hook;
mod query;
mod sort;
mod stack;


pub use cursor::Cursor;
pub use errors::ArrayError;
pub use hook::{MutationHook, NoopHook, UpdateCounter};
pub use query::Picked;

/// Target case for [`ArrayObject::change_key_case`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyCase {
    #[default]
    Lower,
    Upper,
}

/// An ordered key/value container with an internal cursor and a mutation hook.
///
/// `V` is the value type. Comparison-based operations (sorting, searching,
/// `unique`, `min`/`max`) need `V: `[`Element`](crate::Element).
///
/// `H` is notified once after every mutating call; see [`MutationHook`].
#[derive(Clone)]
pub struct ArrayObject<V, H = NoopHook> {
    map: OrderedMap<V>,
    cursor: Cursor,
    hook: H,
}

impl<V> ArrayObject<V> {
    /// Creates an empty array object without a hook
    pub fn new() -> Self {
        Self::with_hook(NoopHook)
    }

    /// Wraps `map` without a hook
    pub fn from_map(map: OrderedMap<V>) -> Self {
        Self::from_map_with_hook(map, NoopHook)
    }
}

impl<V, H: MutationHook> ArrayObject<V, H> {
    /// Creates an empty array object notifying `hook`
    pub fn with_hook(hook: H) -> Self {
        Self::from_map_with_hook(OrderedMap::new(), hook)
    }

    /// Wraps `map`, notifying `hook` of later changes
    pub fn from_map_with_hook(map: OrderedMap<V>, hook: H) -> Self {
        Self {
            map,
            cursor: Cursor::default(),
            hook,
        }
    }

    /// Builds an array object from the fields of a serializable record.
    ///
    /// Structs and maps contribute their fields in declaration order;
    /// sequences contribute their items under keys `0..n`.
    ///
    /// ```
    /// use array_object::{ArrayObject, Key, Value};
    /// use serde::Serialize;
    ///
    /// #[derive(Serialize)]
    /// struct User {
    ///     id: i64,
    ///     name: String,
    /// }
    ///
    /// let user = User { id: 7, name: "bob".into() };
    /// let array: ArrayObject<Value> = ArrayObject::from_record(&user).unwrap();
    /// assert_eq!(array.offset_get("id"), Some(&Value::Int(7)));
    /// assert_eq!(array.key_last(), Some(&Key::from("name")));
    /// ```
    pub fn from_record<T>(record: &T) -> Result<Self>
    where
        T: Serialize + ?Sized,
        V: DeserializeOwned,
        H: Default,
    {
        let map = match serde_json::to_value(record)? {
            serde_json::Value::Object(fields) => fields
                .into_iter()
                .map(|(name, value)| -> Result<(Key, V)> {
                    Ok((Key::from(name), serde_json::from_value(value)?))
                })
                .collect::<Result<OrderedMap<V>>>()?,
            serde_json::Value::Array(items) => items
                .into_iter()
                .map(serde_json::from_value)
                .collect::<std::result::Result<Vec<V>, _>>()
                .map(OrderedMap::from)?,
            other => {
                return Err(ArrayError::InvalidArgument {
                    operation: "from_record".to_string(),
                    reason: format!("expected a record, found {}", json_type_name(&other)),
                }
                .into());
            }
        };
        Ok(Self::from_map_with_hook(map, H::default()))
    }

    /// The hook
    pub fn hook(&self) -> &H {
        &self.hook
    }

    /// The hook, mutably
    pub fn hook_mut(&mut self) -> &mut H {
        &mut self.hook
    }

    /// Borrows the underlying map
    pub fn as_map(&self) -> &OrderedMap<V> {
        &self.map
    }

    /// Consumes the array object into its map
    pub fn into_map(self) -> OrderedMap<V> {
        self.map
    }

    // ===== Element access =====

    /// Value stored under `key`
    pub fn offset_get(&self, key: impl Into<Key>) -> Option<&V> {
        self.map.get(&key.into())
    }

    /// Returns true if `key` is present
    pub fn offset_exists(&self, key: impl Into<Key>) -> bool {
        self.map.contains_key(&key.into())
    }

    /// Stores `value` under `key`, or under the next integer key when `key`
    /// is `None`. Returns the key used.
    pub fn offset_set(&mut self, key: Option<Key>, value: V) -> Key {
        let key = self.map.set(key, value);
        self.updated("offset_set", false);
        key
    }

    /// Appends `value` under the next integer key
    pub fn append(&mut self, value: V) -> Key {
        let key = self.map.append(value);
        self.updated("append", false);
        key
    }

    /// Removes `key`, returning its value. The hook fires even if `key` was
    /// absent.
    pub fn offset_unset(&mut self, key: impl Into<Key>) -> Option<V> {
        let removed = self.map.remove(&key.into());
        self.updated("offset_unset", true);
        removed
    }

    /// Number of entries
    pub fn count(&self) -> usize {
        self.map.len()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterates over entries in order, independently of the cursor
    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, V> {
        self.map.iter()
    }

    /// A copy of the entries
    pub fn get_array_copy(&self) -> OrderedMap<V>
    where
        V: Clone,
    {
        self.map.snapshot()
    }

    // ===== Bulk replacement =====

    /// Replaces the contents with `entries`, returning the previous contents
    pub fn exchange_array(&mut self, entries: impl Into<OrderedMap<V>>) -> OrderedMap<V> {
        self.replace_map(entries.into(), "exchange_array")
    }

    /// Lowercases or uppercases every string key.
    ///
    /// When two keys collide, the later value wins and sits at the earlier
    /// key's position.
    pub fn change_key_case(&mut self, case: KeyCase) {
        let entries = std::mem::take(&mut self.map);
        let changed = entries.into_iter().map(|(key, value)| {
            let key = match case {
                KeyCase::Lower => key.to_lowercase(),
                KeyCase::Upper => key.to_uppercase(),
            };
            (key, value)
        });
        self.replace_map(changed.collect(), "change_key_case");
    }

    /// Reverses the order of the entries.
    ///
    /// String keys always travel with their values. Integer keys do too when
    /// `preserve_keys` is set; otherwise they are renumbered from 0.
    pub fn reverse(&mut self, preserve_keys: bool) {
        let entries = std::mem::take(&mut self.map).into_entries();
        let mut reversed = OrderedMap::with_capacity(entries.len());
        for (key, value) in entries.into_iter().rev() {
            match key {
                Key::Int(_) if !preserve_keys => {
                    reversed.append(value);
                }
                key => {
                    reversed.insert(key, value);
                }
            }
        }
        self.replace_map(reversed, "reverse");
    }

    /// Shuffles the values with the thread-local RNG. Keys become `0..n`.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::thread_rng());
    }

    /// Shuffles the values with `rng`. Keys become `0..n`.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut values = std::mem::take(&mut self.map).into_values();
        values.shuffle(rng);
        self.replace_map(OrderedMap::from(values), "shuffle");
    }

    // ===== Serialization =====

    /// Encodes the entries, keeping key order and key types
    pub fn serialize(&self) -> Result<String>
    where
        V: Serialize,
    {
        serde_json::to_string(&self.map).map_err(|e| {
            ArrayError::SerializationFailed {
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Replaces the contents with entries decoded from `data`.
    ///
    /// On failure the contents are untouched and the hook does not fire.
    pub fn unserialize(&mut self, data: &str) -> Result<()>
    where
        V: DeserializeOwned,
    {
        let map: OrderedMap<V> =
            serde_json::from_str(data).map_err(|e| ArrayError::DeserializationFailed {
                reason: e.to_string(),
            })?;
        debug!(entries = map.len(), "unserialized array");
        self.replace_map(map, "unserialize");
        Ok(())
    }

    // ===== Mutation gate =====

    /// Swaps in `map` and fires the hook once, returning the old contents.
    fn replace_map(&mut self, map: OrderedMap<V>, operation: &'static str) -> OrderedMap<V> {
        let previous = std::mem::replace(&mut self.map, map);
        self.updated(operation, true);
        previous
    }

    /// The single place the hook is called from.
    fn updated(&mut self, operation: &'static str, reset_cursor: bool) {
        if reset_cursor {
            self.cursor = Cursor::default();
        }
        trace!(operation, len = self.map.len(), "array updated");
        self.hook.on_after_update();
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

impl<V, H: Default> Default for ArrayObject<V, H> {
    fn default() -> Self {
        Self {
            map: OrderedMap::new(),
            cursor: Cursor::default(),
            hook: H::default(),
        }
    }
}

impl<V, H: Default> From<OrderedMap<V>> for ArrayObject<V, H> {
    fn from(map: OrderedMap<V>) -> Self {
        Self {
            map,
            cursor: Cursor::default(),
            hook: H::default(),
        }
    }
}

impl<V, H: Default> From<Vec<V>> for ArrayObject<V, H> {
    fn from(values: Vec<V>) -> Self {
        Self::from(OrderedMap::from(values))
    }
}

impl<K: Into<Key>, V, H: Default> FromIterator<(K, V)> for ArrayObject<V, H> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<OrderedMap<V>>())
    }
}

impl<'a, V, H> IntoIterator for &'a ArrayObject<V, H> {
    type Item = (&'a Key, &'a V);
    type IntoIter = indexmap::map::Iter<'a, Key, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}

impl<V, H> IntoIterator for ArrayObject<V, H> {
    type Item = (Key, V);
    type IntoIter = indexmap::map::IntoIter<Key, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.into_iter()
    }
}

// Contents only: the cursor and the hook do not take part.
impl<V: PartialEq, H> PartialEq for ArrayObject<V, H> {
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl<V: PartialEq, H> PartialEq<OrderedMap<V>> for ArrayObject<V, H> {
    fn eq(&self, other: &OrderedMap<V>) -> bool {
        &self.map == other
    }
}

impl<V: fmt::Debug, H> fmt::Debug for ArrayObject<V, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayObject")
            .field("entries", &self.map)
            .field("cursor", &self.cursor)
            .finish()
    }
}
