//! A todo checklist kept in a hosted Hasura instance.
//!
//! The [`TodoRepository`](./repository/struct.TodoRepository.html) runs the four operations in
//! [`queries`](./queries/index.html) through a client with a normalized cache, and the
//! [`TodoListView`](./view/struct.TodoListView.html) turns user actions into calls on it. The
//! `checklist` binary draws the view to the terminal.

#[macro_use]
extern crate async_trait;

pub mod app;
pub mod command;
pub mod config;
pub mod confirm;
pub mod logging;
pub mod queries;
pub mod render;
pub mod repository;
pub mod view;

pub use config::{Args, ChecklistClient, Config, ConfigError};
pub use confirm::{Confirm, TerminalConfirm};
pub use render::Screen;
pub use repository::{prune_todo, Todo, TodoError, TodoRepository, TodoService};
pub use view::{ListState, TodoListView};
