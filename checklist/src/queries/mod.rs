//! The operations the checklist runs against the Hasura `todos` table, in the shape the client
//! expects from generated operation modules.

pub mod add_todo;
pub mod delete_todo;
pub mod get_todos;
pub mod toggle_todo;

pub use add_todo::AddTodo;
pub use delete_todo::DeleteTodo;
pub use get_todos::GetTodos;
pub use toggle_todo::ToggleTodo;
