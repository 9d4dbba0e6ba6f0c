//! Functional core for the todos service.
//!
//! Pure types and functions with no I/O: the todo record and its normalized
//! response shape, request parsing, merge and sort rules, and the storage
//! traits implemented by the server's backends.

pub mod storage;
pub mod todo;
