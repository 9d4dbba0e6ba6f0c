//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use todos_core::storage::{Result, TableAdmin, TableSpec, TableStatus, TodoRepository};
use todos_core::todo::TodoRecord;

/// In-memory storage backend.
///
/// Mirrors the store's write semantics: a put replaces any record with the
/// same id and a delete of a missing id succeeds. The table always exists and
/// is always active.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    todos: Arc<RwLock<HashMap<String, TodoRecord>>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            todos: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Inserts a record as-is, bypassing the handlers.
    ///
    /// Stands in for writes made by other clients of the store, which may
    /// leave attributes out.
    #[cfg_attr(not(test), allow(dead_code))]
    pub async fn insert(&self, record: TodoRecord) {
        self.todos.write().await.insert(record.id.clone(), record);
    }

    /// Number of stored records.
    #[cfg_attr(not(test), allow(dead_code))]
    pub async fn count(&self) -> usize {
        self.todos.read().await.len()
    }
}

#[async_trait]
impl TodoRepository for InMemoryRepository {
    async fn get_todo(&self, id: &str) -> Result<Option<TodoRecord>> {
        let todos = self.todos.read().await;
        Ok(todos.get(id).cloned())
    }

    async fn put_todo(&self, record: &TodoRecord) -> Result<()> {
        let mut todos = self.todos.write().await;
        todos.insert(record.id.clone(), record.clone());
        Ok(())
    }

    async fn delete_todo(&self, id: &str) -> Result<()> {
        let mut todos = self.todos.write().await;
        todos.remove(id);
        Ok(())
    }

    async fn scan_todos(&self) -> Result<Vec<TodoRecord>> {
        let todos = self.todos.read().await;
        Ok(todos.values().cloned().collect())
    }
}

#[async_trait]
impl TableAdmin for InMemoryRepository {
    async fn describe_table(&self, _table_name: &str) -> Result<Option<TableStatus>> {
        Ok(Some(TableStatus::Active))
    }

    async fn create_table(&self, _spec: &TableSpec) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record(id: &str) -> TodoRecord {
        TodoRecord::new(id)
            .with_title("Buy milk")
            .with_completed(false)
            .with_created_at("2024-01-15T10:30:00.000Z")
    }

    #[tokio::test]
    async fn test_put_and_get() {
        let repo = InMemoryRepository::new();
        let record = sample_record("a");

        repo.put_todo(&record).await.unwrap();

        let fetched = repo.get_todo("a").await.unwrap();
        assert_eq!(fetched, Some(record));
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let repo = InMemoryRepository::new();
        assert_eq!(repo.get_todo("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_put_replaces_whole_record() {
        let repo = InMemoryRepository::new();
        repo.put_todo(&sample_record("a")).await.unwrap();

        let replacement = TodoRecord::new("a").with_title("Replaced");
        repo.put_todo(&replacement).await.unwrap();

        let fetched = repo.get_todo("a").await.unwrap().unwrap();
        assert_eq!(fetched.title.as_deref(), Some("Replaced"));
        assert_eq!(fetched.created_at, None);
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryRepository::new();
        repo.put_todo(&sample_record("a")).await.unwrap();

        repo.delete_todo("a").await.unwrap();

        assert_eq!(repo.get_todo("a").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_missing_succeeds() {
        let repo = InMemoryRepository::new();
        assert_eq!(repo.delete_todo("missing").await, Ok(()));
    }

    #[tokio::test]
    async fn test_scan_returns_all_records() {
        let repo = InMemoryRepository::new();
        repo.put_todo(&sample_record("a")).await.unwrap();
        repo.put_todo(&sample_record("b")).await.unwrap();
        repo.insert(TodoRecord::new("c")).await;

        let mut ids: Vec<String> = repo
            .scan_todos()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        ids.sort();

        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_table_is_always_active() {
        let repo = InMemoryRepository::new();
        assert_eq!(
            repo.describe_table("todos").await.unwrap(),
            Some(TableStatus::Active)
        );
    }
}
