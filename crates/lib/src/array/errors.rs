//! Error types for array object operations.
//!
//! Absence is not an error here: `pop`, `shift`, `search` and the cursor
//! methods return `Option`. These variants cover the calls that cannot
//! produce a meaningful answer at all.

use thiserror::Error;

/// Structured error types for [`ArrayObject`](crate::ArrayObject) operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ArrayError {
    /// The operation needs at least one entry
    #[error("{operation} called on an empty array")]
    EmptyCollection { operation: String },

    /// An argument is outside the range the operation accepts
    #[error("Invalid argument to {operation}: {reason}")]
    InvalidArgument { operation: String, reason: String },

    /// Serializing the entries failed
    #[error("Array serialization failed: {reason}")]
    SerializationFailed { reason: String },

    /// The input could not be decoded into entries
    #[error("Array deserialization failed: {reason}")]
    DeserializationFailed { reason: String },
}

impl ArrayError {
    /// Check if the operation was refused because the array was empty
    pub fn is_empty_collection(&self) -> bool {
        matches!(self, ArrayError::EmptyCollection { .. })
    }

    /// Check if an argument was rejected
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ArrayError::InvalidArgument { .. })
    }

    /// Check if this error is related to serialization
    pub fn is_serialization_error(&self) -> bool {
        matches!(
            self,
            ArrayError::SerializationFailed { .. } | ArrayError::DeserializationFailed { .. }
        )
    }

    /// Get the operation name if this is an operation-specific error
    pub fn operation(&self) -> Option<&str> {
        match self {
            ArrayError::EmptyCollection { operation }
            | ArrayError::InvalidArgument { operation, .. } => Some(operation),
            _ => None,
        }
    }
}

// Conversion from ArrayError to the main Error type
impl From<ArrayError> for crate::Error {
    fn from(err: ArrayError) -> Self {
        crate::Error::Array(err)
    }
}
