//! In-memory storage backend.
//!
//! Stores records in a HashMap wrapped in `Arc<RwLock<_>>`. Used by the test
//! suites and by builds without the `dynamodb` feature. Data is lost when the
//! process exits.
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::storage::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! repo.insert(TodoRecord::new("abc").with_title("Buy milk")).await;
//! ```

mod repository;

pub use repository::InMemoryRepository;
