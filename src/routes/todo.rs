use std::sync::Arc;

use askama::Template;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::Html,
    routing::get,
};
use chrono::Local;

use crate::{
    db::entities::{CreateTodoRequest, TodoResponse},
    error::AppError,
    routes::extract::JsonOrForm,
    state::AppState,
};

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    now: String,
    todos: Vec<TodoResponse>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(list_todos).post(create_todo))
        .with_state(state)
}

async fn list_todos(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let todos = state.todos.list().await?;
    let rendered = IndexTemplate {
        now: Local::now().to_rfc3339(),
        todos: todos.into_iter().map(TodoResponse::from).collect(),
    }
    .render()?;
    Ok(Html(rendered))
}

async fn create_todo(
    State(state): State<Arc<AppState>>,
    JsonOrForm(body): JsonOrForm<CreateTodoRequest>,
) -> Result<(StatusCode, Json<TodoResponse>), AppError> {
    let todo = state.todos.create(body).await?;
    tracing::debug!(id = %todo.id_string(), "created todo");
    Ok((StatusCode::CREATED, Json(todo.into())))
}
