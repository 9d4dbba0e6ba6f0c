use thiserror::Error;

/// Errors raised while validating a todo request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TodoError {
    #[error("Title is required")]
    TitleRequired,
    #[error("Request body is required")]
    BodyRequired,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_error_display() {
        assert_eq!(TodoError::TitleRequired.to_string(), "Title is required");
        assert_eq!(
            TodoError::BodyRequired.to_string(),
            "Request body is required"
        );
    }
}
