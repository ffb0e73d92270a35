//! The internal cursor.
//!
//! The cursor is a position into the entry sequence. It starts on the first
//! entry and falls off into [`Cursor::OutOfBounds`] when moved past either end.
//! Once out of bounds, only [`reset`](ArrayObject::reset) and
//! [`end`](ArrayObject::end) bring it back: `next` and `prev` both stay put.
//!
//! ```
//! use array_object::ArrayObject;
//!
//! let mut array: ArrayObject<&str> = [(100, "a"), (101, "b"), (102, "c")].into_iter().collect();
//! assert_eq!(array.end(), Some(&"c"));
//! assert_eq!(array.next(), None);
//! assert_eq!(array.prev(), None);
//! assert_eq!(array.key(), None);
//! assert_eq!(array.reset(), Some(&"a"));
//! ```

use super::{ArrayObject, MutationHook};
use crate::Key;

/// Position of the internal cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    /// On the entry at this index (or nothing, if the array is shorter)
    At(usize),
    /// Moved past the first or the last entry
    OutOfBounds,
}

impl Default for Cursor {
    fn default() -> Self {
        Cursor::At(0)
    }
}

impl Cursor {
    fn index(self) -> Option<usize> {
        match self {
            Cursor::At(i) => Some(i),
            Cursor::OutOfBounds => None,
        }
    }
}

impl<V, H: MutationHook> ArrayObject<V, H> {
    /// The cursor's position
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Value under the cursor, or `None` when out of bounds or empty
    pub fn current(&self) -> Option<&V> {
        let i = self.cursor.index()?;
        self.map.get_index(i).map(|(_, v)| v)
    }

    /// Key under the cursor, or `None` when out of bounds or empty
    pub fn key(&self) -> Option<&Key> {
        let i = self.cursor.index()?;
        self.map.get_index(i).map(|(k, _)| k)
    }

    /// Advances the cursor and returns the new current value
    pub fn next(&mut self) -> Option<&V> {
        if let Cursor::At(i) = self.cursor {
            self.cursor = if i + 1 < self.map.len() {
                Cursor::At(i + 1)
            } else {
                Cursor::OutOfBounds
            };
        }
        self.current()
    }

    /// Moves the cursor back and returns the new current value.
    ///
    /// From the first entry, or from out of bounds, the cursor goes (or stays)
    /// out of bounds.
    pub fn prev(&mut self) -> Option<&V> {
        self.cursor = match self.cursor {
            Cursor::At(i) if i > 0 && i <= self.map.len() => Cursor::At(i - 1),
            _ => Cursor::OutOfBounds,
        };
        self.current()
    }

    /// Moves the cursor to the first entry and returns it
    pub fn reset(&mut self) -> Option<&V> {
        self.cursor = Cursor::At(0);
        self.current()
    }

    /// Moves the cursor to the last entry and returns it
    pub fn end(&mut self) -> Option<&V> {
        self.cursor = match self.map.len() {
            0 => Cursor::OutOfBounds,
            n => Cursor::At(n - 1),
        };
        self.current()
    }

    /// Moves the cursor to `index`; an index past the end is out of bounds
    pub fn seek(&mut self, index: usize) -> Option<&V> {
        self.cursor = if index < self.map.len() {
            Cursor::At(index)
        } else {
            Cursor::OutOfBounds
        };
        self.current()
    }
}
