//! Application state.
//!
//! Holds the repository handle shared by every request handler. The backend
//! is picked at compile time through the `dynamodb` feature.

use std::sync::Arc;

use todos_core::storage::TodoRepository;

/// Shared application state, cloned into each handler.
#[derive(Clone)]
pub struct AppState {
    /// Todo repository (DynamoDB or in-memory).
    pub todo_repo: Arc<dyn TodoRepository>,
}

impl AppState {
    /// Creates an AppState around an already initialized repository.
    pub fn with_repository(todo_repo: Arc<dyn TodoRepository>) -> Self {
        Self { todo_repo }
    }
}

// ============================================================================
// Backend-specific constructors
// ============================================================================

#[cfg(feature = "dynamodb")]
mod dynamodb {
    use super::*;
    use todos_core::storage::{todos_table_spec, TODOS_TABLE};

    use crate::config::Config;
    use crate::storage::{ensure_table, DynamoDbRepository, PollPolicy};

    impl AppState {
        /// Creates AppState with DynamoDB storage.
        ///
        /// Creates the todos table first if it does not exist and waits for it
        /// to become active.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            tracing::info!(
                endpoint = %config.dynamodb_endpoint,
                region = %config.aws_region,
                "Connecting to DynamoDB"
            );

            let repo = DynamoDbRepository::connect(config, TODOS_TABLE).await;
            ensure_table(&repo, &todos_table_spec(), PollPolicy::from_config(config)).await?;

            Ok(Self::with_repository(Arc::new(repo)))
        }
    }
}

#[cfg(not(feature = "dynamodb"))]
mod inmemory {
    use super::*;
    use todos_core::storage::todos_table_spec;

    use crate::config::Config;
    use crate::storage::{ensure_table, InMemoryRepository, PollPolicy};

    impl AppState {
        /// Creates AppState with in-memory storage.
        /// Data lives only as long as the process.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            tracing::warn!("Running on the in-memory store; data is not persisted");

            let repo = InMemoryRepository::new();
            ensure_table(&repo, &todos_table_spec(), PollPolicy::from_config(config)).await?;

            Ok(Self::with_repository(Arc::new(repo)))
        }
    }
}
