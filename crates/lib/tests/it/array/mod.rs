//! ArrayObject integration tests
//!
//! Tests are grouped the way the methods are: sorting, stack and queue
//! operations, cursor navigation, read-only queries, the mutation hook and
//! serialization.

mod cursor_tests;
mod hook_tests;
