//! The trait values must implement to be sorted, searched and de-duplicated.
//!
//! [`ArrayObject`](crate::ArrayObject) stores any `V`, but its comparison-based
//! operations need to know how two values relate. [`Element`] supplies that:
//! - `compare` orders two values under a [`SortFlag`]
//! - `loose_eq` / `strict_eq` back the non-strict and strict searches
//! - `is_truthy` backs `filter_truthy`
//! - `to_key` / `field` back `flip` and `column`

use std::cmp::Ordering;

use crate::Key;
use crate::collate::{Scalar, SortFlag, compare_scalars};

/// A value that can be compared the way dynamic array values are compared.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use array_object::{Element, SortFlag};
///
/// assert_eq!(11_i64.compare(&2, SortFlag::Regular), Ordering::Greater);
/// assert_eq!(11_i64.compare(&2, SortFlag::String), Ordering::Less);
/// assert!("10".to_string().loose_eq(&"1e1".to_string()));
/// assert!(!"10".to_string().strict_eq(&"1e1".to_string()));
/// ```
pub trait Element: Clone {
    /// Orders `self` relative to `other` under `flag`
    fn compare(&self, other: &Self, flag: SortFlag) -> Ordering;

    /// Loose equality: equal under [`SortFlag::Regular`]
    fn loose_eq(&self, other: &Self) -> bool {
        self.compare(other, SortFlag::Regular) == Ordering::Equal
    }

    /// Strict equality: same type and same value
    fn strict_eq(&self, other: &Self) -> bool;

    /// Whether the value counts as true when no predicate is given
    fn is_truthy(&self) -> bool;

    /// The key form of this value, if it can be used as a key
    fn to_key(&self) -> Option<Key> {
        None
    }

    /// Looks up a field when this value is a keyed record
    fn field(&self, _key: &Key) -> Option<&Self> {
        None
    }
}

impl Element for i64 {
    fn compare(&self, other: &Self, flag: SortFlag) -> Ordering {
        compare_scalars(Scalar::Int(*self), Scalar::Int(*other), flag)
    }

    fn strict_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn is_truthy(&self) -> bool {
        *self != 0
    }

    fn to_key(&self) -> Option<Key> {
        Some(Key::Int(*self))
    }
}

impl Element for f64 {
    fn compare(&self, other: &Self, flag: SortFlag) -> Ordering {
        compare_scalars(Scalar::Float(*self), Scalar::Float(*other), flag)
    }

    fn strict_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn is_truthy(&self) -> bool {
        *self != 0.0
    }
}

impl Element for bool {
    fn compare(&self, other: &Self, flag: SortFlag) -> Ordering {
        compare_scalars(Scalar::Bool(*self), Scalar::Bool(*other), flag)
    }

    fn strict_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Element for String {
    fn compare(&self, other: &Self, flag: SortFlag) -> Ordering {
        compare_scalars(Scalar::Text(self), Scalar::Text(other), flag)
    }

    fn strict_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn is_truthy(&self) -> bool {
        Scalar::Text(self).to_bool()
    }

    fn to_key(&self) -> Option<Key> {
        Some(Key::from(self.as_str()))
    }
}

impl Element for Key {
    fn compare(&self, other: &Self, flag: SortFlag) -> Ordering {
        compare_scalars(self.as_scalar(), other.as_scalar(), flag)
    }

    fn strict_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn is_truthy(&self) -> bool {
        self.as_scalar().to_bool()
    }

    fn to_key(&self) -> Option<Key> {
        Some(self.clone())
    }
}
