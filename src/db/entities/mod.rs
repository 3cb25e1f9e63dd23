pub mod todo;

pub use todo::{CreateTodoRequest, NewTodo, Todo, TodoResponse};
