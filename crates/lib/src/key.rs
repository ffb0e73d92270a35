//! Keys of an ordered array.
//!
//! An array key is either an integer or a string. String keys that spell a
//! canonical decimal integer (`"12"`, `"-3"`) are stored as integers, so
//! `Key::from("12") == Key::Int(12)`. Strings such as `"012"`, `"+1"` or
//! `"1.0"` stay strings.

use std::fmt;

use serde::Serialize;
use serde::de::{self, Deserialize, Deserializer, Visitor};

use crate::collate::Scalar;

/// A key in an [`OrderedMap`](crate::OrderedMap) or [`ArrayObject`](crate::ArrayObject).
///
/// # Examples
///
/// ```
/// use array_object::Key;
///
/// assert_eq!(Key::from("12"), Key::Int(12));
/// assert_eq!(Key::from("012"), Key::Str("012".to_string()));
/// assert_eq!(Key::from(7).to_string(), "7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum Key {
    /// Integer key
    Int(i64),
    /// String key
    Str(String),
}

impl Key {
    /// Returns the integer if this is an integer key
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Key::Int(n) => Some(*n),
            Key::Str(_) => None,
        }
    }

    /// Returns the string if this is a string key
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Int(_) => None,
            Key::Str(s) => Some(s),
        }
    }

    /// Returns true if this is an integer key
    pub fn is_int(&self) -> bool {
        matches!(self, Key::Int(_))
    }

    /// Returns true if this is a string key
    pub fn is_str(&self) -> bool {
        matches!(self, Key::Str(_))
    }

    /// This key as a comparison operand
    pub fn as_scalar(&self) -> Scalar<'_> {
        match self {
            Key::Int(n) => Scalar::Int(*n),
            Key::Str(s) => Scalar::Text(s),
        }
    }

    /// Lowercases a string key. Integer keys are returned unchanged.
    pub fn to_lowercase(&self) -> Key {
        match self {
            Key::Int(n) => Key::Int(*n),
            Key::Str(s) => Key::from(s.to_lowercase()),
        }
    }

    /// Uppercases a string key. Integer keys are returned unchanged.
    pub fn to_uppercase(&self) -> Key {
        match self {
            Key::Int(n) => Key::Int(*n),
            Key::Str(s) => Key::from(s.to_uppercase()),
        }
    }
}

/// Parses `s` as a canonical decimal integer: optional `-`, no leading zeros,
/// no `+`, no whitespace, within `i64` range.
pub(crate) fn canonical_int(s: &str) -> Option<i64> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    // "-0" is a string key
    if s.starts_with('-') && digits == "0" {
        return None;
    }
    s.parse().ok()
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Int(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::Int(value as i64)
    }
}

impl From<u32> for Key {
    fn from(value: u32) -> Self {
        Key::Int(value as i64)
    }
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        Key::Int(value as i64)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        match canonical_int(value) {
            Some(n) => Key::Int(n),
            None => Key::Str(value.to_string()),
        }
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        match canonical_int(&value) {
            Some(n) => Key::Int(n),
            None => Key::Str(value),
        }
    }
}

impl From<&Key> for Key {
    fn from(value: &Key) -> Self {
        value.clone()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(n) => write!(f, "{n}"),
            Key::Str(s) => f.write_str(s),
        }
    }
}

// Object keys arrive as strings; numeric ones normalize through Key::from.
impl<'de> Deserialize<'de> for Key {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(KeyVisitor)
    }
}

struct KeyVisitor;

impl Visitor<'_> for KeyVisitor {
    type Value = Key;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer or string key")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Key, E> {
        Ok(Key::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Key, E> {
        i64::try_from(v)
            .map(Key::Int)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Key, E> {
        Ok(Key::from(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Key, E> {
        Ok(Key::from(v))
    }
}

impl PartialEq<i64> for Key {
    fn eq(&self, other: &i64) -> bool {
        self.as_int() == Some(*other)
    }
}

impl PartialEq<i32> for Key {
    fn eq(&self, other: &i32) -> bool {
        self.as_int() == Some(*other as i64)
    }
}

impl PartialEq<&str> for Key {
    fn eq(&self, other: &&str) -> bool {
        *self == Key::from(*other)
    }
}
