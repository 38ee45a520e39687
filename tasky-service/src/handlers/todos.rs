use crate::dtos::{CreateTodoRequest, CreateTodoResponse, TodoResponse};
use crate::models::Todo;
use crate::services::{record_todo_created, record_todos_listed};
use crate::startup::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap},
    Json,
};
use serde_json::{Map, Value};
use service_core::error::AppError;

pub async fn list_todos(
    State(state): State<AppState>,
) -> Result<Json<Vec<TodoResponse>>, AppError> {
    let todos = state.store.list().await?;
    record_todos_listed(todos.len());

    Ok(Json(todos.into_iter().map(TodoResponse::from).collect()))
}

/// Creates a todo from an optional JSON body. An empty body, or one not
/// declared as JSON, counts as `{}`.
pub async fn create_todo(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<CreateTodoResponse>, AppError> {
    let raw = if body.is_empty() || !is_json_content(&headers) {
        Value::Object(Map::new())
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| AppError::BadRequest(anyhow::anyhow!("Invalid JSON body: {}", e)))?
    };

    let fields = state.defaults.apply(raw)?;
    let request: CreateTodoRequest = serde_json::from_value(Value::Object(fields))
        .map_err(|e| AppError::BadRequest(anyhow::anyhow!("Invalid todo: {}", e)))?;

    let id = state.store.insert(Todo::new(request.text)).await?;
    record_todo_created();
    tracing::info!(todo_id = %id, "Todo created");

    Ok(Json(CreateTodoResponse {
        inserted_id: id.to_hex(),
    }))
}

fn is_json_content(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| {
            let mime = mime.trim();
            mime.eq_ignore_ascii_case("application/json")
                || mime.to_ascii_lowercase().ends_with("+json")
        })
        .unwrap_or(false)
}
