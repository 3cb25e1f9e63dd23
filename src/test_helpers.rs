use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use axum::Router;
use mongodb::bson::oid::ObjectId;

use crate::{
    config::AppConfig,
    db::dao::{DaoLayerError, DaoResult, TodoStore},
    db::entities::{NewTodo, Todo},
    routes::router,
    state::AppState,
};

/// `TodoStore` kept in process memory. Ids are fresh ObjectIds, matching
/// what the driver assigns on insert.
#[derive(Default)]
pub struct InMemoryTodoStore {
    todos: Mutex<Vec<Todo>>,
    lose_inserts: bool,
}

impl InMemoryTodoStore {
    /// Accepts inserts but never stores them, so the read-back misses.
    pub fn losing_inserts() -> Self {
        Self {
            lose_inserts: true,
            ..Self::default()
        }
    }

    /// Starts with documents already in the collection.
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        Self {
            todos: Mutex::new(todos),
            ..Self::default()
        }
    }

    pub fn snapshot(&self) -> Vec<Todo> {
        self.todos
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl TodoStore for InMemoryTodoStore {
    async fn insert(&self, todo: NewTodo) -> DaoResult<ObjectId> {
        let id = ObjectId::new();
        if !self.lose_inserts {
            self.todos
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(todo.into_todo(id));
        }
        Ok(id)
    }

    async fn find_by_id(&self, id: ObjectId) -> DaoResult<Option<Todo>> {
        Ok(self
            .todos
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|todo| todo.id.as_object_id() == Some(id))
            .cloned())
    }

    async fn find_all(&self) -> DaoResult<Vec<Todo>> {
        Ok(self.snapshot())
    }
}

/// Store whose every operation fails the way a dropped connection does.
pub struct FailingTodoStore;

impl FailingTodoStore {
    fn error() -> DaoLayerError {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "connection lost");
        DaoLayerError::Db(mongodb::error::Error::from(io))
    }
}

#[async_trait]
impl TodoStore for FailingTodoStore {
    async fn insert(&self, _todo: NewTodo) -> DaoResult<ObjectId> {
        Err(Self::error())
    }

    async fn find_by_id(&self, _id: ObjectId) -> DaoResult<Option<Todo>> {
        Err(Self::error())
    }

    async fn find_all(&self) -> DaoResult<Vec<Todo>> {
        Err(Self::error())
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        mongo_uri: "mongodb://localhost:27017".to_string(),
        ..AppConfig::default()
    }
}

pub fn test_router(store: Arc<dyn TodoStore>) -> Router {
    router(AppState::new(test_config(), store))
}
