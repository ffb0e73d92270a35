//!
//! array_object: an ordered key/value container with the full toolbox of
//! array utilities and a single post-mutation hook.
//!
//! ## Core Concepts
//!
//! * **Keys (`Key`)**: integers or strings. Numeric strings such as `"12"` are
//!   stored as integers.
//! * **Ordered maps (`OrderedMap`)**: insertion-ordered storage that hands out
//!   the next integer key for appends.
//! * **Array objects (`ArrayObject`)**: an ordered map plus an internal cursor
//!   and about forty operations: sorting, slicing, searching, stack and queue
//!   operations, column extraction, de-duplication and random picks.
//! * **Mutation hooks (`MutationHook`)**: called exactly once after each
//!   mutating operation and never after a read.
//! * **Elements (`Element`)**: how values compare under each `SortFlag`.
//!   `Value` is a ready-made dynamic value; `i64`, `f64`, `bool`, `String` and
//!   `Key` work too.
//!
//! ```
//! use array_object::{ArrayObject, Key, UpdateCounter, Value, array};
//!
//! let mut array: ArrayObject<Value, UpdateCounter> = ArrayObject::from(array![10 => "ten"]);
//! array.push([Value::from("eleven")]);
//! assert_eq!(array.key_last(), Some(&Key::Int(11)));
//! assert_eq!(array.pop(), Some(Value::from("eleven")));
//! assert_eq!(array.hook().count(), 2);
//! ```

pub mod array;
pub mod collate;
pub mod key;
pub mod map;
pub mod traits;
pub mod value;

pub use array::{
    ArrayError, ArrayObject, Cursor, KeyCase, MutationHook, NoopHook, Picked, UpdateCounter,
};
pub use collate::SortFlag;
pub use key::Key;
pub use map::OrderedMap;
pub use traits::Element;
pub use value::Value;

/// Result type used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured errors from array object operations
    #[error(transparent)]
    Array(array::ArrayError),
}

impl Error {
    /// Get the module name where this error originated.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Array(_) => "array",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if an operation needed a non-empty array.
    pub fn is_empty_collection(&self) -> bool {
        match self {
            Error::Array(array_err) => array_err.is_empty_collection(),
            _ => false,
        }
    }

    /// Check if an argument was rejected.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Error::Array(array_err) => array_err.is_invalid_argument(),
            _ => false,
        }
    }

    /// Check if this error is related to encoding or decoding.
    pub fn is_serialization_error(&self) -> bool {
        match self {
            Error::Serialize(_) => true,
            Error::Array(array_err) => array_err.is_serialization_error(),
        }
    }
}
