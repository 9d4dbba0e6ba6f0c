use async_trait::async_trait;

use crate::todo::TodoRecord;

use super::{Result, TableSpec, TableStatus};

/// Repository for todo records, addressed by their `id` partition key.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Gets a record by its id.
    async fn get_todo(&self, id: &str) -> Result<Option<TodoRecord>>;

    /// Writes a record, replacing any record with the same id.
    async fn put_todo(&self, record: &TodoRecord) -> Result<()>;

    /// Deletes a record by its id.
    async fn delete_todo(&self, id: &str) -> Result<()>;

    /// Reads every record in the collection, in no particular order.
    async fn scan_todos(&self) -> Result<Vec<TodoRecord>>;
}

/// Table management operations used at startup.
#[async_trait]
pub trait TableAdmin: Send + Sync {
    /// Returns the table status, or `None` if the table does not exist.
    async fn describe_table(&self, table_name: &str) -> Result<Option<TableStatus>>;

    /// Issues a create request for the table. Returns once the request has
    /// been accepted; the table may still be creating.
    async fn create_table(&self, spec: &TableSpec) -> Result<()>;
}
