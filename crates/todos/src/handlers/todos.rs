//! Todo CRUD handlers.
//!
//! Every record read from the store goes through `normalize_record` before it
//! is returned, so clients always see all four fields.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Serialize;

use todos_core::storage::RepositoryError;
use todos_core::todo::{
    normalize_record, normalize_records, sort_by_created_at, CreateTodoRequest, Todo,
    UpdateTodoRequest,
};

use crate::{handlers::AppError, state::AppState};

#[derive(Debug, Serialize)]
pub struct TodoListResponse {
    pub success: bool,
    pub todos: Vec<Todo>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct TodoResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    pub todo: Todo,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: &'static str,
}

// ============================================================================
// List
// ============================================================================

/// List every todo, oldest first (GET /todos).
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<TodoListResponse>, AppError> {
    tracing::debug!("Listing todos");

    let records = state.todo_repo.scan_todos().await?;
    let mut todos = normalize_records(records, Utc::now());
    sort_by_created_at(&mut todos);

    let count = todos.len();
    Ok(Json(TodoListResponse {
        success: true,
        todos,
        count,
    }))
}

// ============================================================================
// Get
// ============================================================================

/// Get a single todo (GET /todos/{id}).
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TodoResponse>, AppError> {
    tracing::debug!(todo_id = %id, "Fetching todo");

    let record = state
        .todo_repo
        .get_todo(&id)
        .await?
        .ok_or_else(|| RepositoryError::todo_not_found(&id))?;

    Ok(Json(TodoResponse {
        success: true,
        message: None,
        todo: normalize_record(record, Utc::now()),
    }))
}

// ============================================================================
// Create
// ============================================================================

/// Create a todo (POST /todos).
///
/// The id is generated here; no existence check is made before the write.
pub async fn create_todo(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<TodoResponse>), AppError> {
    tracing::debug!("Creating todo");

    let request = CreateTodoRequest::from_body(&body?)?;

    let now = Utc::now();
    let record = request.into_record(now);
    state.todo_repo.put_todo(&record).await?;

    tracing::info!(todo_id = %record.id, "Created todo");

    Ok((
        StatusCode::CREATED,
        Json(TodoResponse {
            success: true,
            message: Some("Todo created successfully"),
            todo: normalize_record(record, now),
        }),
    ))
}

// ============================================================================
// Update
// ============================================================================

/// Partially update a todo (PUT /todos/{id}).
///
/// Writes the whole merged record back, so a concurrent update to the same id
/// can be lost.
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<TodoResponse>, AppError> {
    tracing::debug!(todo_id = %id, "Updating todo");

    let request = UpdateTodoRequest::from_body(&body?)?;

    let mut record = state
        .todo_repo
        .get_todo(&id)
        .await?
        .ok_or_else(|| RepositoryError::todo_not_found(&id))?;

    let now = Utc::now();
    request.apply_to(&mut record, now);
    state.todo_repo.put_todo(&record).await?;

    tracing::info!(todo_id = %id, "Updated todo");

    Ok(Json(TodoResponse {
        success: true,
        message: Some("Todo updated successfully"),
        todo: normalize_record(record, now),
    }))
}

// ============================================================================
// Delete
// ============================================================================

/// Delete a todo (DELETE /todos/{id}).
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    tracing::debug!(todo_id = %id, "Deleting todo");

    // Not atomic: a concurrent delete between the check and the delete still
    // reports success here.
    if state.todo_repo.get_todo(&id).await?.is_none() {
        return Err(RepositoryError::todo_not_found(&id).into());
    }

    state.todo_repo.delete_todo(&id).await?;

    tracing::info!(todo_id = %id, "Deleted todo");

    Ok(Json(MessageResponse {
        success: true,
        message: "Todo deleted successfully",
    }))
}
