use mongodb::bson::{Bson, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// A todo as stored in the collection. `id` is always set once a document
/// has been persisted. Documents written by this service carry an ObjectId,
/// but any `_id` kind already in the collection is accepted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    #[serde(rename = "_id")]
    pub id: Bson,
    pub todo: String,
    #[serde(default)]
    pub done: bool,
}

impl Todo {
    /// The id as clients see it: hex for ObjectIds, the raw value for strings.
    pub fn id_string(&self) -> String {
        match &self.id {
            Bson::ObjectId(id) => id.to_hex(),
            Bson::String(id) => id.clone(),
            other => other.to_string(),
        }
    }
}

/// Insert shape. Carries no `_id` so the driver assigns one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewTodo {
    pub todo: String,
    pub done: bool,
}

impl NewTodo {
    pub fn pending(todo: impl Into<String>) -> Self {
        Self {
            todo: todo.into(),
            done: false,
        }
    }

    pub fn into_todo(self, id: ObjectId) -> Todo {
        Todo {
            id: Bson::ObjectId(id),
            todo: self.todo,
            done: self.done,
        }
    }
}

/// Body of `POST /`. Client-supplied `id` and `done` are accepted and dropped.
#[derive(Clone, Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub todo: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoResponse {
    pub id: String,
    pub todo: String,
    pub done: bool,
}

impl From<Todo> for TodoResponse {
    fn from(model: Todo) -> Self {
        Self {
            id: model.id_string(),
            todo: model.todo,
            done: model.done,
        }
    }
}

#[cfg(test)]
mod tests {
    use mongodb::bson::{self, Bson, doc, oid::ObjectId};
    use serde_json::json;

    use super::{CreateTodoRequest, NewTodo, Todo, TodoResponse};

    #[test]
    fn new_todo_serializes_without_id() {
        let document = bson::to_document(&NewTodo::pending("buy milk")).expect("serialize");

        assert_eq!(document, doc! { "todo": "buy milk", "done": false });
    }

    #[test]
    fn stored_document_decodes_with_object_id() {
        let id = ObjectId::new();
        let todo: Todo = bson::from_document(doc! { "_id": id, "todo": "walk dog", "done": true })
            .expect("decode");

        assert_eq!(todo.id, Bson::ObjectId(id));
        assert_eq!(todo.id_string(), id.to_hex());
        assert_eq!(todo.todo, "walk dog");
        assert!(todo.done);
    }

    #[test]
    fn string_id_decodes_and_is_reported_verbatim() {
        let todo: Todo =
            bson::from_document(doc! { "_id": "legacy-1", "todo": "imported", "done": false })
                .expect("decode");

        assert_eq!(
            TodoResponse::from(todo),
            TodoResponse {
                id: "legacy-1".to_string(),
                todo: "imported".to_string(),
                done: false,
            }
        );
    }

    #[test]
    fn missing_done_defaults_to_false() {
        let todo: Todo = bson::from_document(doc! { "_id": ObjectId::new(), "todo": "x" })
            .expect("decode");

        assert!(!todo.done);
    }

    #[test]
    fn document_without_id_does_not_decode() {
        let result = bson::from_document::<Todo>(doc! { "todo": "x", "done": false });

        assert!(result.is_err());
    }

    #[test]
    fn create_request_ignores_id_and_done() {
        let request: CreateTodoRequest =
            serde_json::from_value(json!({ "id": "abc", "todo": "buy milk", "done": true }))
                .expect("decode");

        assert_eq!(request.todo, "buy milk");
    }

    #[test]
    fn response_uses_hex_id() {
        let id = ObjectId::new();
        let response = TodoResponse::from(NewTodo::pending("buy milk").into_todo(id));

        assert_eq!(
            serde_json::to_value(&response).expect("serialize"),
            json!({ "id": id.to_hex(), "todo": "buy milk", "done": false })
        );
    }
}
