//! Read-only queries.
//!
//! Nothing here fires the hook or moves the cursor. Results are fresh maps or
//! vectors, independent of the array they came from.

use std::cmp::Ordering;

use rand::Rng;
use rand::seq::index;
use tracing::debug;

use super::{ArrayError, ArrayObject, MutationHook};
use crate::collate::SortFlag;
use crate::{Element, Key, OrderedMap, Result};

/// Keys picked by [`ArrayObject::rand`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Picked {
    /// A single key, when one was asked for
    One(Key),
    /// Several distinct keys, in array order
    Many(Vec<Key>),
}

impl Picked {
    /// The picked keys as a vector
    pub fn into_vec(self) -> Vec<Key> {
        match self {
            Picked::One(key) => vec![key],
            Picked::Many(keys) => keys,
        }
    }

    /// The key, if exactly one was picked
    pub fn as_one(&self) -> Option<&Key> {
        match self {
            Picked::One(key) => Some(key),
            Picked::Many(_) => None,
        }
    }
}

impl<V, H: MutationHook> ArrayObject<V, H> {
    /// All keys, in order
    pub fn keys(&self) -> Vec<Key> {
        self.map.keys().cloned().collect()
    }

    /// All values, in order
    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.map.values().cloned().collect()
    }

    pub fn key_first(&self) -> Option<&Key> {
        self.map.first().map(|(k, _)| k)
    }

    pub fn key_last(&self) -> Option<&Key> {
        self.map.last().map(|(k, _)| k)
    }

    /// Returns true if `key` is present
    pub fn key_exists(&self, key: impl Into<Key>) -> bool {
        self.map.contains_key(&key.into())
    }

    /// Returns true if the keys are exactly `0..count` in order
    pub fn is_list(&self) -> bool {
        self.map.is_list()
    }

    /// Entries whose value satisfies `predicate`
    pub fn filter<F>(&self, mut predicate: F) -> OrderedMap<V>
    where
        V: Clone,
        F: FnMut(&V) -> bool,
    {
        self.filter_entries(|_, v| predicate(v))
    }

    /// Entries whose key satisfies `predicate`
    pub fn filter_keys<F>(&self, mut predicate: F) -> OrderedMap<V>
    where
        V: Clone,
        F: FnMut(&Key) -> bool,
    {
        self.filter_entries(|k, _| predicate(k))
    }

    /// Entries whose key and value together satisfy `predicate`
    pub fn filter_entries<F>(&self, mut predicate: F) -> OrderedMap<V>
    where
        V: Clone,
        F: FnMut(&Key, &V) -> bool,
    {
        self.map
            .iter()
            .filter(|(k, v)| predicate(*k, *v))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Applies `f` to every value, keeping keys
    pub fn map<U, F>(&self, mut f: F) -> OrderedMap<U>
    where
        F: FnMut(&V) -> U,
    {
        self.map.iter().map(|(k, v)| (k.clone(), f(v))).collect()
    }

    /// Splits the entries into arrays of `size` entries (at least 1).
    ///
    /// Without `preserve_keys` each chunk is keyed `0..size`.
    pub fn chunk(&self, size: usize, preserve_keys: bool) -> Vec<ArrayObject<V, H>>
    where
        V: Clone,
        H: Default,
    {
        let size = size.max(1);
        let entries: Vec<_> = self.map.iter().collect();
        entries
            .chunks(size)
            .map(|chunk| {
                let map = if preserve_keys {
                    chunk.iter().map(|(k, v)| ((*k).clone(), (*v).clone())).collect()
                } else {
                    OrderedMap::from(chunk.iter().map(|(_, v)| (*v).clone()).collect::<Vec<_>>())
                };
                ArrayObject::from(map)
            })
            .collect()
    }

    /// A contiguous run of entries.
    ///
    /// A negative `offset` counts from the end. A negative `length` stops that
    /// many entries before the end; `None` runs to the end. Integer keys are
    /// renumbered unless `preserve_keys` is set; string keys are always kept.
    ///
    /// ```
    /// use array_object::{ArrayObject, OrderedMap};
    ///
    /// let array: ArrayObject<&str> = [(10, "ten"), (11, "eleven"), (12, "twelve")]
    ///     .into_iter()
    ///     .collect();
    /// assert_eq!(array.slice(-2, Some(-1), false), OrderedMap::from(vec!["eleven"]));
    /// assert_eq!(array.slice(1, None, true), OrderedMap::from([(11, "eleven"), (12, "twelve")]));
    /// assert!(array.slice(3, None, false).is_empty());
    /// ```
    pub fn slice(&self, offset: i64, length: Option<i64>, preserve_keys: bool) -> OrderedMap<V>
    where
        V: Clone,
    {
        let len = self.map.len() as i64;
        let start = if offset < 0 {
            (len + offset).max(0)
        } else {
            offset.min(len)
        };
        let end = match length {
            None => len,
            Some(length) if length < 0 => len + length,
            Some(length) => start.saturating_add(length).min(len),
        };

        let mut sliced = OrderedMap::new();
        if end <= start {
            return sliced;
        }
        for (key, value) in self.map.iter().skip(start as usize).take((end - start) as usize) {
            match key {
                Key::Int(_) if !preserve_keys => {
                    sliced.append(value.clone());
                }
                key => {
                    sliced.insert(key.clone(), value.clone());
                }
            }
        }
        sliced
    }

    /// Picks `n` distinct keys at random with the thread-local RNG.
    ///
    /// See [`rand_with`](Self::rand_with) for the result shape and errors.
    pub fn rand(&self, n: usize) -> Result<Picked> {
        self.rand_with(&mut rand::thread_rng(), n)
    }

    /// Picks `n` distinct keys at random with `rng`.
    ///
    /// Returns [`Picked::One`] when `n == 1`, otherwise the keys in array
    /// order. Fails when the array is empty or `n` is not in `1..=count`.
    pub fn rand_with<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Result<Picked> {
        let len = self.map.len();
        if len == 0 {
            return Err(ArrayError::InvalidArgument {
                operation: "rand".to_string(),
                reason: "array is empty".to_string(),
            }
            .into());
        }
        if n < 1 || n > len {
            return Err(ArrayError::InvalidArgument {
                operation: "rand".to_string(),
                reason: format!("must pick between 1 and {len} keys, asked for {n}"),
            }
            .into());
        }

        let mut picked = index::sample(rng, len, n).into_vec();
        picked.sort_unstable();
        let mut keys: Vec<Key> = picked
            .into_iter()
            .filter_map(|i| self.map.get_index(i).map(|(k, _)| k.clone()))
            .collect();
        if n == 1 {
            if let Some(key) = keys.pop() {
                return Ok(Picked::One(key));
            }
        }
        Ok(Picked::Many(keys))
    }
}

impl<V: Element, H: MutationHook> ArrayObject<V, H> {
    /// Keys whose value matches `needle`
    pub fn keys_of(&self, needle: &V, strict: bool) -> Vec<Key> {
        self.map
            .iter()
            .filter(|(_, v)| value_matches(*v, needle, strict))
            .map(|(k, _)| k.clone())
            .collect()
    }

    /// Returns true if some value matches `needle`
    pub fn contains(&self, needle: &V, strict: bool) -> bool {
        self.map.values().any(|v| value_matches(v, needle, strict))
    }

    /// Same as [`contains`](Self::contains)
    pub fn in_array(&self, needle: &V, strict: bool) -> bool {
        self.contains(needle, strict)
    }

    /// The first key whose value matches `needle`
    pub fn search(&self, needle: &V, strict: bool) -> Option<&Key> {
        self.map
            .iter()
            .find(|(_, v)| value_matches(*v, needle, strict))
            .map(|(k, _)| k)
    }

    /// Entries whose value is truthy
    pub fn filter_truthy(&self) -> OrderedMap<V> {
        self.filter(|v| v.is_truthy())
    }

    /// Swaps keys and values. Values without a key form are skipped; when two
    /// values collide the later key wins.
    pub fn flip(&self) -> OrderedMap<Key> {
        let mut flipped = OrderedMap::with_capacity(self.map.len());
        for (key, value) in &self.map {
            match value.to_key() {
                Some(new_key) => {
                    flipped.insert(new_key, key.clone());
                }
                None => debug!(%key, "flip skipped a value that cannot be a key"),
            }
        }
        flipped
    }

    /// Extracts one field from every record.
    ///
    /// With `column_key` of `None` the whole record is taken. Records lacking
    /// the column are skipped. With `index_key`, results are keyed by that
    /// field's value (later duplicates overwrite earlier ones); records whose
    /// index field is missing or not key-like get the next integer key.
    pub fn column(&self, column_key: Option<&Key>, index_key: Option<&Key>) -> OrderedMap<V> {
        let mut column = OrderedMap::new();
        for record in self.map.values() {
            let value = match column_key {
                Some(field) => match record.field(field) {
                    Some(value) => value,
                    None => continue,
                },
                None => record,
            };
            let key = index_key.and_then(|field| record.field(field)).and_then(|v| {
                let key = v.to_key();
                if key.is_none() {
                    debug!("column index value cannot be a key; appending");
                }
                key
            });
            column.set(key, value.clone());
        }
        column
    }

    /// Entries with duplicate values removed; the first occurrence of each
    /// value keeps its key and position.
    ///
    /// Values are equal when `flag` compares them as equal. Entries are
    /// stable-sorted under `flag` and only the first of each run of equal
    /// values survives.
    pub fn unique(&self, flag: SortFlag) -> OrderedMap<V> {
        let entries: Vec<(&Key, &V)> = self.map.iter().collect();
        let mut order: Vec<usize> = (0..entries.len()).collect();
        order.sort_by(|&a, &b| entries[a].1.compare(entries[b].1, flag));

        let mut keep = vec![false; entries.len()];
        let mut run_start: Option<&V> = None;
        for i in order {
            let value = entries[i].1;
            let repeated =
                run_start.is_some_and(|first| first.compare(value, flag) == Ordering::Equal);
            if !repeated {
                keep[i] = true;
                run_start = Some(value);
            }
        }

        entries
            .into_iter()
            .zip(keep)
            .filter(|(_, kept)| *kept)
            .map(|((key, value), _)| (key.clone(), value.clone()))
            .collect()
    }

    /// The smallest value; the first of several equal ones
    pub fn min(&self) -> Result<&V> {
        self.extreme("min", Ordering::Less)
    }

    /// The largest value; the first of several equal ones
    pub fn max(&self) -> Result<&V> {
        self.extreme("max", Ordering::Greater)
    }

    fn extreme(&self, operation: &str, wanted: Ordering) -> Result<&V> {
        let mut values = self.map.values();
        let Some(mut best) = values.next() else {
            return Err(ArrayError::EmptyCollection {
                operation: operation.to_string(),
            }
            .into());
        };
        for value in values {
            if value.compare(best, SortFlag::Regular) == wanted {
                best = value;
            }
        }
        Ok(best)
    }
}

fn value_matches<V: Element>(value: &V, needle: &V, strict: bool) -> bool {
    if strict {
        value.strict_eq(needle)
    } else {
        value.loose_eq(needle)
    }
}
