//! Stack and queue operations at either end of the array.

use super::{ArrayObject, MutationHook};
use crate::{Key, OrderedMap};

impl<V, H: MutationHook> ArrayObject<V, H> {
    /// Appends each value under the next integer key. Returns the new count.
    ///
    /// The cursor stays where it was.
    pub fn push<I>(&mut self, values: I) -> usize
    where
        I: IntoIterator<Item = V>,
    {
        for value in values {
            self.map.append(value);
        }
        self.updated("push", false);
        self.map.len()
    }

    /// Removes and returns the last value.
    ///
    /// An empty array still counts as changed: the hook fires either way.
    pub fn pop(&mut self) -> Option<V> {
        let popped = self.map.pop_last().map(|(_, value)| value);
        self.updated("pop", true);
        popped
    }

    /// Removes and returns the first value.
    ///
    /// Remaining integer keys are renumbered from 0; string keys are kept.
    /// The next integer key does not go down.
    pub fn shift(&mut self) -> Option<V> {
        let mut existing = std::mem::take(&mut self.map);
        let shifted = existing.pop_first().map(|(_, value)| value);
        let next_int_key = existing.next_int_key();

        let mut map = renumbered(existing);
        map.reserve_int_keys(next_int_key);
        self.replace_map(map, "shift");
        shifted
    }

    /// Inserts `values` at the front under keys `0..k`. Existing integer keys
    /// are renumbered after them; string keys are kept. Returns the new count.
    pub fn unshift<I>(&mut self, values: I) -> usize
    where
        I: IntoIterator<Item = V>,
    {
        let existing = std::mem::take(&mut self.map);
        let mut map = OrderedMap::with_capacity(existing.len());
        for value in values {
            map.append(value);
        }
        extend_renumbered(&mut map, existing);
        self.replace_map(map, "unshift");
        self.map.len()
    }
}

/// `entries` with integer keys renumbered from 0
fn renumbered<V>(entries: OrderedMap<V>) -> OrderedMap<V> {
    let mut map = OrderedMap::with_capacity(entries.len());
    extend_renumbered(&mut map, entries);
    map
}

/// Appends integer-keyed entries under fresh keys and inserts string-keyed
/// ones unchanged.
fn extend_renumbered<V>(map: &mut OrderedMap<V>, entries: OrderedMap<V>) {
    for (key, value) in entries {
        match key {
            Key::Int(_) => {
                map.append(value);
            }
            key => {
                map.insert(key, value);
            }
        }
    }
}
