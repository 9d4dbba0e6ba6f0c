//! Storage backend implementations and the startup table initializer.
//!
//! This module provides concrete implementations of the repository traits
//! defined in `todos_core::storage`.
//!
//! # Feature Flags
//!
//! - `dynamodb` (default): AWS DynamoDB storage backend using `aws-sdk-dynamodb`
//!
//! The in-memory backend is compiled for tests and for builds without
//! `dynamodb`, where it is what the server runs on:
//!
//! ```bash
//! cargo build -p todos --no-default-features
//! ```

#[cfg(feature = "dynamodb")]
pub mod dynamodb;
pub mod init;
#[cfg(any(test, not(feature = "dynamodb")))]
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbRepository;
pub use init::{ensure_table, PollPolicy};
#[cfg(any(test, not(feature = "dynamodb")))]
pub use inmemory::InMemoryRepository;
