use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::store::{TodoItem, TodoPatch};
use crate::SharedStore;

#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    pub title: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

pub async fn list_todos(State(store): State<SharedStore>) -> Json<Vec<TodoItem>> {
    let store = store.read().await;
    Json(store.list_all().to_vec())
}

pub async fn create_todo(
    State(store): State<SharedStore>,
    Json(input): Json<CreateTodo>,
) -> Json<TodoItem> {
    let item = store.write().await.create(input.title);
    Json(item)
}

pub async fn get_todo(
    State(store): State<SharedStore>,
    Path(id): Path<i64>,
) -> Result<Json<TodoItem>, ApiError> {
    let store = store.read().await;
    let item = store.get(id)?;
    Ok(Json(item.clone()))
}

pub async fn update_todo(
    State(store): State<SharedStore>,
    Path(id): Path<i64>,
    Json(patch): Json<TodoPatch>,
) -> Result<Json<TodoItem>, ApiError> {
    let mut store = store.write().await;
    let item = store.update(id, patch)?;
    Ok(Json(item.clone()))
}

pub async fn delete_todo(
    State(store): State<SharedStore>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let message = store.write().await.delete(id)?;
    Ok(Json(DeleteResponse { message }))
}
