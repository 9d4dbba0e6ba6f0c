//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! `TodoRecord`. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use todos_core::storage::RepositoryError;
use todos_core::todo::TodoRecord;

pub const ATTR_ID: &str = "id";
pub const ATTR_TITLE: &str = "title";
pub const ATTR_COMPLETED: &str = "completed";
pub const ATTR_CREATED_AT: &str = "createdAt";
pub const ATTR_UPDATED_AT: &str = "updatedAt";

/// Convert a TodoRecord to a DynamoDB item. Absent attributes are left out of
/// the item rather than written as NULL.
pub fn record_to_item(record: &TodoRecord) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert(ATTR_ID.to_string(), AttributeValue::S(record.id.clone()));

    if let Some(title) = &record.title {
        item.insert(ATTR_TITLE.to_string(), AttributeValue::S(title.clone()));
    }
    if let Some(completed) = record.completed {
        item.insert(ATTR_COMPLETED.to_string(), AttributeValue::Bool(completed));
    }
    if let Some(created_at) = &record.created_at {
        item.insert(
            ATTR_CREATED_AT.to_string(),
            AttributeValue::S(created_at.clone()),
        );
    }
    if let Some(updated_at) = &record.updated_at {
        item.insert(
            ATTR_UPDATED_AT.to_string(),
            AttributeValue::S(updated_at.clone()),
        );
    }

    item
}

/// Convert a DynamoDB item to a TodoRecord.
///
/// Only `id` is required. Other attributes that are missing or stored with an
/// unexpected type come back as `None`.
pub fn item_to_record(
    item: &HashMap<String, AttributeValue>,
) -> Result<TodoRecord, RepositoryError> {
    Ok(TodoRecord {
        id: get_string(item, ATTR_ID)?,
        title: get_optional_string(item, ATTR_TITLE),
        completed: get_optional_bool(item, ATTR_COMPLETED),
        created_at: get_optional_string(item, ATTR_CREATED_AT),
        updated_at: get_optional_string(item, ATTR_UPDATED_AT),
    })
}

/// Convert scanned items to records, skipping items that cannot be read.
///
/// A scan never fails on a single bad item; each skipped item is logged.
pub fn readable_records(
    table_name: &str,
    items: &[HashMap<String, AttributeValue>],
) -> Vec<TodoRecord> {
    items
        .iter()
        .filter_map(|item| match item_to_record(item) {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::warn!(table = %table_name, error = %err, "Skipping unreadable item");
                None
            }
        })
        .collect()
}

/// Key map addressing a single todo.
pub fn todo_key(id: &str) -> HashMap<String, AttributeValue> {
    HashMap::from([(ATTR_ID.to_string(), AttributeValue::S(id.to_string()))])
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute from an item.
pub fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .cloned()
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {key}")))
}

/// Get an optional string attribute from an item.
pub fn get_optional_string(item: &HashMap<String, AttributeValue>, key: &str) -> Option<String> {
    item.get(key).and_then(|v| v.as_s().ok()).cloned()
}

/// Get an optional boolean attribute from an item.
pub fn get_optional_bool(item: &HashMap<String, AttributeValue>, key: &str) -> Option<bool> {
    item.get(key).and_then(|v| v.as_bool().ok()).copied()
}
