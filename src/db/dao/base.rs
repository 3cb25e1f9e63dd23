use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use super::error::DaoResult;
use crate::db::entities::{NewTodo, Todo};

/// Persistence seam for todos. Handlers reach the store through
/// `TodoService`, which holds it as `Arc<dyn TodoStore>`.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Inserts the record and returns the identifier the database assigned.
    async fn insert(&self, todo: NewTodo) -> DaoResult<ObjectId>;

    async fn find_by_id(&self, id: ObjectId) -> DaoResult<Option<Todo>>;

    /// Every record in the collection, in natural order.
    async fn find_all(&self) -> DaoResult<Vec<Todo>>;
}
