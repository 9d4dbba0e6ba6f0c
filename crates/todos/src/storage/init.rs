//! Startup table initializer.
//!
//! Makes sure the todos table exists before the server binds its listener.
//! Runs once; the server does not start until it returns `Ok`.

use std::time::Duration;

use thiserror::Error;
use todos_core::storage::{RepositoryError, TableAdmin, TableSpec};

use crate::config::Config;

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("Timeout waiting for table '{table_name}' to become active after {attempts} attempts")]
    TableNotReady { table_name: String, attempts: u32 },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// How often, and how many times, to check a freshly created table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            max_attempts: 60,
        }
    }
}

impl PollPolicy {
    pub fn from_config(config: &Config) -> Self {
        Self {
            interval: config.table_poll_interval(),
            max_attempts: config.table_ready_max_attempts,
        }
    }
}

/// Creates the table if it does not exist and waits for it to become active.
///
/// An existing table is used as is, whatever its status. A created table is
/// polled every `policy.interval` until it reports `Active`, at most
/// `policy.max_attempts` times.
pub async fn ensure_table(
    admin: &dyn TableAdmin,
    spec: &TableSpec,
    policy: PollPolicy,
) -> Result<(), InitError> {
    let table_name = spec.table_name.as_str();

    if let Some(status) = admin.describe_table(table_name).await? {
        tracing::info!(table = %table_name, ?status, "Table already exists");
        return Ok(());
    }

    tracing::info!(table = %table_name, "Creating table");
    admin.create_table(spec).await?;

    wait_for_table_active(admin, table_name, policy).await?;

    tracing::info!(table = %table_name, "Table created successfully");
    Ok(())
}

async fn wait_for_table_active(
    admin: &dyn TableAdmin,
    table_name: &str,
    policy: PollPolicy,
) -> Result<(), InitError> {
    for attempt in 1..=policy.max_attempts {
        tokio::time::sleep(policy.interval).await;

        match admin.describe_table(table_name).await? {
            Some(status) if status.is_active() => return Ok(()),
            status => {
                tracing::debug!(table = %table_name, attempt, ?status, "Waiting for table to become active");
            }
        }
    }

    Err(InitError::TableNotReady {
        table_name: table_name.to_string(),
        attempts: policy.max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use todos_core::storage::{todos_table_spec, Result, TableStatus};

    /// Answers `describe_table` from a script; the last answer repeats.
    struct ScriptedAdmin {
        answers: Mutex<VecDeque<Result<Option<TableStatus>>>>,
        describes: AtomicUsize,
        creates: AtomicUsize,
    }

    impl ScriptedAdmin {
        fn new(answers: Vec<Result<Option<TableStatus>>>) -> Self {
            Self {
                answers: Mutex::new(answers.into()),
                describes: AtomicUsize::new(0),
                creates: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl TableAdmin for ScriptedAdmin {
        async fn describe_table(&self, _table_name: &str) -> Result<Option<TableStatus>> {
            self.describes.fetch_add(1, Ordering::SeqCst);
            let mut answers = self.answers.lock().unwrap();
            if answers.len() > 1 {
                answers.pop_front().unwrap()
            } else {
                answers.front().cloned().unwrap()
            }
        }

        async fn create_table(&self, _spec: &TableSpec) -> Result<()> {
            self.creates.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn fast_policy(max_attempts: u32) -> PollPolicy {
        PollPolicy {
            interval: Duration::from_millis(1),
            max_attempts,
        }
    }

    #[tokio::test]
    async fn test_existing_table_is_not_created() {
        let admin = ScriptedAdmin::new(vec![Ok(Some(TableStatus::Active))]);

        ensure_table(&admin, &todos_table_spec(), fast_policy(3))
            .await
            .unwrap();

        assert_eq!(admin.creates.load(Ordering::SeqCst), 0);
        assert_eq!(admin.describes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_existing_table_is_not_waited_on() {
        let admin = ScriptedAdmin::new(vec![Ok(Some(TableStatus::Creating))]);

        ensure_table(&admin, &todos_table_spec(), fast_policy(3))
            .await
            .unwrap();

        assert_eq!(admin.creates.load(Ordering::SeqCst), 0);
        assert_eq!(admin.describes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_missing_table_is_created_and_polled() {
        let admin = ScriptedAdmin::new(vec![
            Ok(None),
            Ok(Some(TableStatus::Creating)),
            Ok(Some(TableStatus::Creating)),
            Ok(Some(TableStatus::Active)),
        ]);

        ensure_table(&admin, &todos_table_spec(), fast_policy(10))
            .await
            .unwrap();

        assert_eq!(admin.creates.load(Ordering::SeqCst), 1);
        assert_eq!(admin.describes.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_table_never_active_times_out() {
        let admin = ScriptedAdmin::new(vec![Ok(None), Ok(Some(TableStatus::Creating))]);

        let err = ensure_table(&admin, &todos_table_spec(), fast_policy(3))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            InitError::TableNotReady { ref table_name, attempts: 3 } if table_name == "todos"
        ));
        assert_eq!(admin.describes.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_describe_failure_is_fatal() {
        let admin = ScriptedAdmin::new(vec![Err(RepositoryError::ConnectionFailed(
            "connection refused".to_string(),
        ))]);

        let err = ensure_table(&admin, &todos_table_spec(), fast_policy(3))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            InitError::Repository(RepositoryError::ConnectionFailed(_))
        ));
        assert_eq!(admin.creates.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_default_policy() {
        let policy = PollPolicy::default();
        assert_eq!(policy.interval, Duration::from_secs(1));
        assert_eq!(policy.max_attempts, 60);
    }
}
