//! Dynamic values for array objects.
//!
//! [`Value`] is a ready-made element type for [`ArrayObject`](crate::ArrayObject):
//! scalars plus nested arrays, compared the way loosely-typed array values are
//! compared (see [`collate`](crate::collate)).

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::collate::{Scalar, SortFlag, compare_scalars, float_to_string};
use crate::{Element, Key, OrderedMap};

/// A dynamically typed array value.
///
/// ## Scalars
/// - [`Value::Null`], [`Value::Bool`], [`Value::Int`], [`Value::Float`], [`Value::Text`]
///
/// ## Containers
/// - [`Value::Array`] - a nested ordered array, usable as a record by `column`
///
/// # Direct Comparisons
///
/// ```
/// # use array_object::Value;
/// let text = Value::from("ten");
/// assert!(text == "ten");
/// assert!(Value::Int(10) == 10);
/// assert!(!(text == 10));
/// ```
///
/// # Loose comparison
///
/// ```
/// # use array_object::{Element, Value};
/// assert!(Value::from("12").loose_eq(&Value::Int(12)));
/// assert!(Value::Bool(true).loose_eq(&Value::from("ten")));
/// assert!(!Value::Bool(true).strict_eq(&Value::from("ten")));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null value
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Text string value
    Text(String),
    /// Nested array
    Array(OrderedMap<Value>),
}

impl Value {
    /// Returns true if this is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this is a nested array
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Array(_) => "array",
        }
    }

    /// Attempts to convert to a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to convert to an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Attempts to convert to a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to convert to a nested array
    pub fn as_array(&self) -> Option<&OrderedMap<Value>> {
        match self {
            Value::Array(map) => Some(map),
            _ => None,
        }
    }

    /// Attempts to convert to a mutable nested array
    pub fn as_array_mut(&mut self) -> Option<&mut OrderedMap<Value>> {
        match self {
            Value::Array(map) => Some(map),
            _ => None,
        }
    }

    /// This value as a comparison operand. Arrays become the text `"Array"`.
    pub fn as_scalar(&self) -> Scalar<'_> {
        match self {
            Value::Null => Scalar::Null,
            Value::Bool(b) => Scalar::Bool(*b),
            Value::Int(n) => Scalar::Int(*n),
            Value::Float(f) => Scalar::Float(*f),
            Value::Text(s) => Scalar::Text(s),
            Value::Array(_) => Scalar::Text("Array"),
        }
    }
}

/// Arrays compare by size first, then entry by entry in `a`'s order. An
/// entry of `a` missing from `b` makes `a` greater.
fn compare_arrays(a: &OrderedMap<Value>, b: &OrderedMap<Value>) -> Ordering {
    match a.len().cmp(&b.len()) {
        Ordering::Equal => {}
        other => return other,
    }
    for (key, left) in a {
        let Some(right) = b.get(key) else {
            return Ordering::Greater;
        };
        match left.compare(right, SortFlag::Regular) {
            Ordering::Equal => {}
            other => return other,
        }
    }
    Ordering::Equal
}

impl Element for Value {
    fn compare(&self, other: &Self, flag: SortFlag) -> Ordering {
        if flag == SortFlag::Regular {
            match (self, other) {
                (Value::Array(a), Value::Array(b)) => return compare_arrays(a, b),
                (Value::Array(_), Value::Null | Value::Bool(_))
                | (Value::Null | Value::Bool(_), Value::Array(_)) => {
                    return self.is_truthy().cmp(&other.is_truthy());
                }
                (Value::Array(_), _) => return Ordering::Greater,
                (_, Value::Array(_)) => return Ordering::Less,
                _ => {}
            }
        }
        compare_scalars(self.as_scalar(), other.as_scalar(), flag)
    }

    fn strict_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn is_truthy(&self) -> bool {
        match self {
            Value::Array(map) => !map.is_empty(),
            scalar => scalar.as_scalar().to_bool(),
        }
    }

    fn to_key(&self) -> Option<Key> {
        match self {
            Value::Int(n) => Some(Key::Int(*n)),
            Value::Text(s) => Some(Key::from(s.as_str())),
            _ => None,
        }
    }

    fn field(&self, key: &Key) -> Option<&Self> {
        self.as_array().and_then(|map| map.get(key))
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null | Value::Bool(false) => Ok(()),
            Value::Bool(true) => f.write_str("1"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => f.write_str(&float_to_string(*x)),
            Value::Text(s) => f.write_str(s),
            Value::Array(_) => f.write_str("Array"),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<Key> for Value {
    fn from(value: Key) -> Self {
        match value {
            Key::Int(n) => Value::Int(n),
            Key::Str(s) => Value::Text(s),
        }
    }
}

impl From<OrderedMap<Value>> for Value {
    fn from(value: OrderedMap<Value>) -> Self {
        Value::Array(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

// PartialEq implementations for comparing Value with other types
impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_text() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        self.as_int() == Some(*other)
    }
}

impl PartialEq<i32> for Value {
    fn eq(&self, other: &i32) -> bool {
        self.as_int() == Some(*other as i64)
    }
}

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        self.as_float() == Some(*other)
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for i64 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for bool {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

/// Builds an [`OrderedMap<Value>`](crate::OrderedMap) literal.
///
/// # Syntax
///
/// - `array![]` - empty
/// - `array!["a", "b"]` - a list, keyed `0..n`
/// - `array![10 => "ten", "name" => "bob"]` - explicit keys
///
/// Keys go through [`Key::from`], so `"12"` becomes the integer key `12`.
/// Values go through [`Value::from`] and may be nested `array!` literals.
///
/// # Examples
///
/// ```rust
/// # use array_object::{Key, Value, array};
/// let users = array![
///     array!["id" => 1, "name" => "bob"],
///     array!["id" => 2, "name" => "jim"],
/// ];
/// assert_eq!(users.len(), 2);
///
/// let sparse = array![10 => "ten", "12" => "twelve"];
/// assert_eq!(sparse.get(&Key::Int(12)), Some(&Value::from("twelve")));
/// ```
#[macro_export]
macro_rules! array {
    // Explicit keys
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::OrderedMap::<$crate::Value>::new();
        $(
            map.insert($crate::Key::from($key), $crate::Value::from($value));
        )+
        map
    }};

    // List
    ($($value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut map = $crate::OrderedMap::<$crate::Value>::new();
        $(
            map.append($crate::Value::from($value));
        )*
        map
    }};
}
