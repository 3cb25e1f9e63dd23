use std::{future::Future, sync::Arc, time::Duration};

use crate::{
    db::dao::{DaoLayerError, DaoResult, TodoStore},
    db::entities::{CreateTodoRequest, NewTodo, Todo},
    error::AppError,
};

#[derive(Clone)]
pub struct TodoService {
    store: Arc<dyn TodoStore>,
    timeout: Duration,
}

impl TodoService {
    pub fn new(store: Arc<dyn TodoStore>, timeout: Duration) -> Self {
        Self { store, timeout }
    }

    pub async fn list(&self) -> Result<Vec<Todo>, AppError> {
        self.bounded("list todos", self.store.find_all()).await
    }

    /// Persists a new todo and returns it as stored. Whatever id or done flag
    /// the client sent is discarded: the id comes from the database and
    /// `done` starts out false.
    pub async fn create(&self, request: CreateTodoRequest) -> Result<Todo, AppError> {
        require_text(&request.todo)?;
        let id = self
            .bounded(
                "insert todo",
                self.store.insert(NewTodo::pending(request.todo)),
            )
            .await?;

        self.bounded("read back todo", self.store.find_by_id(id))
            .await?
            .ok_or_else(|| {
                DaoLayerError::NotFound {
                    entity: "Todo",
                    id: id.to_hex(),
                }
                .into()
            })
    }

    async fn bounded<T>(
        &self,
        operation: &'static str,
        fut: impl Future<Output = DaoResult<T>>,
    ) -> Result<T, AppError> {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(AppError::timeout(format!(
                "{operation} timed out after {}s",
                self.timeout.as_secs_f64()
            ))),
        }
    }
}

/// Rejects whitespace-only text. Accepted text is stored exactly as sent.
fn require_text(text: &str) -> Result<(), AppError> {
    if text.trim().is_empty() {
        return Err(AppError::bad_request("todo text required"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use async_trait::async_trait;
    use mongodb::bson::oid::ObjectId;

    use super::TodoService;
    use crate::{
        db::dao::{DaoResult, TodoStore},
        db::entities::{CreateTodoRequest, NewTodo, Todo},
        error::AppError,
        test_helpers::InMemoryTodoStore,
    };

    struct SlowStore;

    #[async_trait]
    impl TodoStore for SlowStore {
        async fn insert(&self, _todo: NewTodo) -> DaoResult<ObjectId> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(ObjectId::new())
        }

        async fn find_by_id(&self, _id: ObjectId) -> DaoResult<Option<Todo>> {
            Ok(None)
        }

        async fn find_all(&self) -> DaoResult<Vec<Todo>> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(Vec::new())
        }
    }

    fn request(text: &str) -> CreateTodoRequest {
        CreateTodoRequest {
            todo: text.to_string(),
        }
    }

    fn service(store: Arc<dyn TodoStore>) -> TodoService {
        TodoService::new(store, Duration::from_secs(5))
    }

    #[tokio::test]
    async fn create_keeps_text_verbatim_and_starts_pending() {
        let store = Arc::new(InMemoryTodoStore::default());
        let service = service(store.clone());

        let todo = service
            .create(request("  indented task\n"))
            .await
            .expect("create");

        assert_eq!(todo.todo, "  indented task\n");
        assert!(!todo.done);
        assert_eq!(store.snapshot(), vec![todo]);
    }

    #[tokio::test]
    async fn create_rejects_blank_text() {
        let store = Arc::new(InMemoryTodoStore::default());
        let service = service(store.clone());

        let err = service.create(request("   ")).await.expect_err("blank text");

        assert!(matches!(err, AppError::BadRequest(_)));
        assert!(store.snapshot().is_empty());
    }

    #[tokio::test]
    async fn list_returns_every_created_todo() {
        let service = service(Arc::new(InMemoryTodoStore::default()));
        let first = service.create(request("one")).await.expect("create");
        let second = service.create(request("two")).await.expect("create");

        let todos = service.list().await.expect("list");

        assert_eq!(todos, vec![first, second]);
    }

    #[tokio::test]
    async fn slow_store_hits_request_timeout() {
        let service = TodoService::new(Arc::new(SlowStore), Duration::from_millis(20));

        let err = service.list().await.expect_err("list should time out");
        assert!(matches!(err, AppError::Timeout(_)));

        let err = service
            .create(request("late"))
            .await
            .expect_err("insert should time out");
        assert!(matches!(err, AppError::Timeout(_)));
    }

    #[tokio::test]
    async fn missing_read_back_is_an_internal_error() {
        let service = service(Arc::new(InMemoryTodoStore::losing_inserts()));

        let err = service.create(request("ghost")).await.expect_err("lost");

        assert!(matches!(err, AppError::Internal(_)));
        assert!(err.message().contains("Todo not found"));
    }
}
