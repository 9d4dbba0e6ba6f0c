use super::types::Todo;

/// Sorts todos oldest first by their `createdAt` string.
///
/// The sort is stable, so todos sharing a timestamp keep their scan order.
pub fn sort_by_created_at(todos: &mut [Todo]) {
    todos.sort_by(|a, b| a.created_at.cmp(&b.created_at));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: &str, created_at: &str) -> Todo {
        Todo {
            id: id.to_string(),
            title: String::new(),
            completed: false,
            created_at: created_at.to_string(),
            updated_at: None,
        }
    }

    fn ids(todos: &[Todo]) -> Vec<&str> {
        todos.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_sorts_ascending() {
        let mut todos = vec![
            todo("c", "2024-03-01T00:00:00.000Z"),
            todo("a", "2023-12-31T23:59:59.999Z"),
            todo("b", "2024-01-15T10:30:00.000Z"),
        ];

        sort_by_created_at(&mut todos);

        assert_eq!(ids(&todos), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_equal_timestamps_keep_input_order() {
        let mut todos = vec![
            todo("second", "2024-01-01T00:00:00.000Z"),
            todo("first", "2024-01-01T00:00:00.000Z"),
            todo("earliest", "2023-01-01T00:00:00.000Z"),
        ];

        sort_by_created_at(&mut todos);

        assert_eq!(ids(&todos), vec!["earliest", "second", "first"]);
    }

    #[test]
    fn test_empty_slice() {
        let mut todos: Vec<Todo> = Vec::new();
        sort_by_created_at(&mut todos);
        assert!(todos.is_empty());
    }
}
