use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{doc, oid::ObjectId},
};

use super::{DaoLayerError, DaoResult, TodoStore};
use crate::db::entities::{NewTodo, Todo};

#[derive(Clone)]
pub struct TodoDao {
    collection: Collection<Todo>,
}

impl TodoDao {
    pub fn new(db: &Database, collection: &str) -> Self {
        Self {
            collection: db.collection::<Todo>(collection),
        }
    }

    pub fn collection(&self) -> &Collection<Todo> {
        &self.collection
    }
}

#[async_trait]
impl TodoStore for TodoDao {
    async fn insert(&self, todo: NewTodo) -> DaoResult<ObjectId> {
        let result = self
            .collection
            .clone_with_type::<NewTodo>()
            .insert_one(&todo)
            .await?;

        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| DaoLayerError::UnexpectedId(result.inserted_id.to_string()))
    }

    async fn find_by_id(&self, id: ObjectId) -> DaoResult<Option<Todo>> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    async fn find_all(&self) -> DaoResult<Vec<Todo>> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }
}
