use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use todo_core::{Todo, TodoCreate, TodoUpdate};

use crate::error::ApiError;
use crate::extract::{IdPath, ListParams, ListQuery, ValidatedJson};
use crate::state::Store;

#[derive(Serialize)]
pub struct Message {
    pub message: String,
}

pub async fn index() -> Json<Message> {
    Json(Message {
        message: "Hello world".to_string(),
    })
}

pub async fn list_todos(
    State(store): State<Store>,
    ListQuery(params): ListQuery<ListParams>,
) -> Json<Vec<Todo>> {
    Json(store.list_top_n(params.first_n).await)
}

pub async fn get_todo(
    State(store): State<Store>,
    IdPath(todo_id): IdPath<i64>,
) -> Result<Json<Todo>, ApiError> {
    Ok(Json(store.get(todo_id).await?))
}

pub async fn create_todo(
    State(store): State<Store>,
    ValidatedJson(input): ValidatedJson<TodoCreate>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let todo = store.create(input).await?;
    tracing::info!(todo_id = todo.todo_id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn update_todo(
    State(store): State<Store>,
    IdPath(todo_id): IdPath<i64>,
    ValidatedJson(patch): ValidatedJson<TodoUpdate>,
) -> Result<Json<Todo>, ApiError> {
    let todo = store.update(todo_id, patch).await?;
    tracing::info!(todo_id, "updated todo");
    Ok(Json(todo))
}

pub async fn delete_todo(
    State(store): State<Store>,
    IdPath(todo_id): IdPath<i64>,
) -> Result<Json<Todo>, ApiError> {
    let todo = store.delete(todo_id).await?;
    tracing::info!(todo_id, "deleted todo");
    Ok(Json(todo))
}

pub async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "detail": "Not found" })),
    )
}
