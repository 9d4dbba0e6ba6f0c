//! DynamoDB repository implementation.
//!
//! Implements the repository traits from `todos_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::config::Credentials;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode as SdkBillingMode, KeySchemaElement, KeyType,
    ScalarAttributeType, TableStatus as SdkTableStatus,
};
use aws_sdk_dynamodb::Client;

use todos_core::storage::{
    AttributeType, BillingMode, RepositoryError, Result, TableAdmin, TableSpec, TableStatus,
    TodoRepository,
};
use todos_core::todo::TodoRecord;

use super::conversions::{item_to_record, readable_records, record_to_item, todo_key};
use super::error::{
    map_create_table_error, map_delete_item_error, map_describe_table_error, map_get_item_error,
    map_put_item_error, map_scan_error,
};
use crate::config::Config;

/// DynamoDB-based repository implementation.
///
/// The SDK client is cheap to clone and safe to share between requests.
#[derive(Debug, Clone)]
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Builds a client for the configured endpoint with static credentials.
    pub async fn connect(config: &Config, table_name: impl Into<String>) -> Self {
        let credentials = Credentials::new(
            config.aws_access_key_id.clone(),
            config.aws_secret_access_key.clone(),
            None,
            None,
            "todos-static",
        );

        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.aws_region.clone()))
            .endpoint_url(&config.dynamodb_endpoint)
            .credentials_provider(credentials)
            .load()
            .await;

        Self::new(Client::new(&sdk_config), table_name)
    }
}

// ============================================================================
// TodoRepository implementation
// ============================================================================

#[async_trait]
impl TodoRepository for DynamoDbRepository {
    async fn get_todo(&self, id: &str) -> Result<Option<TodoRecord>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(todo_key(id)))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_record(&item)?)),
            None => Ok(None),
        }
    }

    async fn put_todo(&self, record: &TodoRecord) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(record_to_item(record)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn delete_todo(&self, id: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(todo_key(id)))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }

    async fn scan_todos(&self) -> Result<Vec<TodoRecord>> {
        let mut records = Vec::new();
        let mut start_key = None;

        loop {
            let output = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(start_key)
                .send()
                .await
                .map_err(map_scan_error)?;

            records.extend(readable_records(&self.table_name, output.items()));

            match output.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        Ok(records)
    }
}

// ============================================================================
// TableAdmin implementation
// ============================================================================

#[async_trait]
impl TableAdmin for DynamoDbRepository {
    async fn describe_table(&self, table_name: &str) -> Result<Option<TableStatus>> {
        let response = match self
            .client
            .describe_table()
            .table_name(table_name)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => return map_describe_table_error(err),
        };

        let table = response.table().ok_or_else(|| {
            RepositoryError::InvalidData(format!("DescribeTable returned no table for {table_name}"))
        })?;

        Ok(Some(to_table_status(table.table_status())))
    }

    async fn create_table(&self, spec: &TableSpec) -> Result<()> {
        let key_schema = KeySchemaElement::builder()
            .attribute_name(&spec.partition_key.name)
            .key_type(KeyType::Hash)
            .build()
            .map_err(|e| RepositoryError::InvalidData(e.to_string()))?;

        let attribute_definition = AttributeDefinition::builder()
            .attribute_name(&spec.partition_key.name)
            .attribute_type(to_scalar_type(spec.partition_key.attribute_type))
            .build()
            .map_err(|e| RepositoryError::InvalidData(e.to_string()))?;

        let result = self
            .client
            .create_table()
            .table_name(&spec.table_name)
            .key_schema(key_schema)
            .attribute_definitions(attribute_definition)
            .billing_mode(to_billing_mode(spec.billing_mode))
            .send()
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(err) => map_create_table_error(err),
        }
    }
}

fn to_table_status(status: Option<&SdkTableStatus>) -> TableStatus {
    match status {
        Some(SdkTableStatus::Active) => TableStatus::Active,
        Some(SdkTableStatus::Creating) | None => TableStatus::Creating,
        Some(SdkTableStatus::Updating) => TableStatus::Updating,
        Some(SdkTableStatus::Deleting) => TableStatus::Deleting,
        Some(_) => TableStatus::Unavailable,
    }
}

fn to_scalar_type(attr_type: AttributeType) -> ScalarAttributeType {
    match attr_type {
        AttributeType::String => ScalarAttributeType::S,
    }
}

fn to_billing_mode(mode: BillingMode) -> SdkBillingMode {
    match mode {
        BillingMode::PayPerRequest => SdkBillingMode::PayPerRequest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_status_mapping() {
        assert_eq!(
            to_table_status(Some(&SdkTableStatus::Active)),
            TableStatus::Active
        );
        assert_eq!(
            to_table_status(Some(&SdkTableStatus::Creating)),
            TableStatus::Creating
        );
        assert_eq!(to_table_status(None), TableStatus::Creating);
        assert_eq!(
            to_table_status(Some(&SdkTableStatus::Archived)),
            TableStatus::Unavailable
        );
    }

    #[test]
    fn test_key_type_mapping() {
        assert_eq!(
            to_scalar_type(AttributeType::String),
            ScalarAttributeType::S
        );
        assert_eq!(
            to_billing_mode(BillingMode::PayPerRequest),
            SdkBillingMode::PayPerRequest
        );
    }
}
