//! API request types for todo operations.
//!
//! Bodies are parsed from raw bytes rather than through a typed deserializer:
//! the rules for what counts as present, missing, or ignorable are looser than
//! what serde's derive would accept, and they differ between create and update.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::error::TodoError;
use super::types::{timestamp, TodoRecord};

fn parse_object(body: &[u8]) -> Option<Map<String, Value>> {
    serde_json::from_slice(body).ok()
}

/// Request payload for creating a todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTodoRequest {
    pub title: String,
    pub completed: bool,
}

impl CreateTodoRequest {
    /// Parses and validates a create body.
    ///
    /// The body must be a JSON object whose `title` is a string that is not
    /// blank. `completed` is only honored when it is a JSON boolean.
    pub fn from_body(body: &[u8]) -> Result<Self, TodoError> {
        let object = parse_object(body).ok_or(TodoError::TitleRequired)?;

        let title = object
            .get("title")
            .and_then(Value::as_str)
            .filter(|title| !title.trim().is_empty())
            .ok_or(TodoError::TitleRequired)?;

        let completed = object
            .get("completed")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        Ok(Self {
            title: title.to_string(),
            completed,
        })
    }

    /// Builds the record to persist, with a fresh id and creation time.
    pub fn into_record(self, now: DateTime<Utc>) -> TodoRecord {
        TodoRecord::new(Uuid::new_v4().to_string())
            .with_title(self.title)
            .with_completed(self.completed)
            .with_created_at(timestamp(now))
    }
}

/// Request payload for a partial update of a todo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTodoRequest {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

impl UpdateTodoRequest {
    /// Parses an update body.
    ///
    /// Any JSON object is accepted. A `title` that is null or not a string,
    /// and a `completed` that is not a boolean, are ignored so the stored
    /// value is kept.
    pub fn from_body(body: &[u8]) -> Result<Self, TodoError> {
        let object = parse_object(body).ok_or(TodoError::BodyRequired)?;

        Ok(Self {
            title: object
                .get("title")
                .and_then(Value::as_str)
                .map(str::to_string),
            completed: object.get("completed").and_then(Value::as_bool),
        })
    }

    /// Merges this update over an existing record.
    ///
    /// Fields not carried by the request are left untouched. `updatedAt` is
    /// stamped unconditionally, even when nothing else changed.
    pub fn apply_to(&self, record: &mut TodoRecord, now: DateTime<Utc>) {
        if let Some(title) = &self.title {
            record.title = Some(title.clone());
        }
        if let Some(completed) = self.completed {
            record.completed = Some(completed);
        }
        record.updated_at = Some(timestamp(now));
    }
}
