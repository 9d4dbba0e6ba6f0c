//! Defensive normalization of stored records.
//!
//! Every record read from the store passes through [`normalize_record`]
//! before it reaches a response. Missing attributes are defaulted here and
//! nowhere else.

use chrono::{DateTime, Utc};

use super::types::{timestamp, Todo, TodoRecord};

/// Converts a stored record into the API shape.
///
/// A missing `title` becomes `""`, a missing `completed` becomes `false`, and
/// a missing `createdAt` becomes `now`. `updatedAt` is passed through as is.
pub fn normalize_record(record: TodoRecord, now: DateTime<Utc>) -> Todo {
    Todo {
        id: record.id,
        title: record.title.unwrap_or_default(),
        completed: record.completed.unwrap_or(false),
        created_at: record.created_at.unwrap_or_else(|| timestamp(now)),
        updated_at: record.updated_at,
    }
}

/// Normalizes a batch of records against a single `now`.
pub fn normalize_records(records: Vec<TodoRecord>, now: DateTime<Utc>) -> Vec<Todo> {
    records
        .into_iter()
        .map(|record| normalize_record(record, now))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap()
    }

    #[test]
    fn test_complete_record_is_unchanged() {
        let record = TodoRecord::new("abc")
            .with_title("Buy milk")
            .with_completed(true)
            .with_created_at("2024-05-01T08:00:00.000Z")
            .with_updated_at("2024-05-02T08:00:00.000Z");

        let todo = normalize_record(record, fixed_now());

        assert_eq!(
            todo,
            Todo {
                id: "abc".to_string(),
                title: "Buy milk".to_string(),
                completed: true,
                created_at: "2024-05-01T08:00:00.000Z".to_string(),
                updated_at: Some("2024-05-02T08:00:00.000Z".to_string()),
            }
        );
    }

    #[test]
    fn test_missing_completed_defaults_to_false() {
        let record = TodoRecord::new("abc")
            .with_title("Buy milk")
            .with_created_at("2024-05-01T08:00:00.000Z");

        assert!(!normalize_record(record, fixed_now()).completed);
    }

    #[test]
    fn test_missing_title_defaults_to_empty() {
        let record = TodoRecord::new("abc").with_completed(true);

        let todo = normalize_record(record, fixed_now());
        assert_eq!(todo.title, "");
        assert!(todo.completed);
    }

    #[test]
    fn test_missing_created_at_defaults_to_now() {
        let todo = normalize_record(TodoRecord::new("abc"), fixed_now());

        assert_eq!(todo.created_at, "2024-06-01T10:00:00.000Z");
        assert_eq!(todo.updated_at, None);
    }

    #[test]
    fn test_normalize_records_keeps_order() {
        let records = vec![TodoRecord::new("b"), TodoRecord::new("a")];
        let ids: Vec<String> = normalize_records(records, fixed_now())
            .into_iter()
            .map(|todo| todo.id)
            .collect();

        assert_eq!(ids, vec!["b", "a"]);
    }
}
