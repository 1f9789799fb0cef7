//! Draws the list view as plain lines of text.

use crate::{
    repository::Todo,
    view::{ListState, TodoListView}
};
use console::{style, Term};

pub const TITLE: &str = "Graphql Checklist ✅";
pub const PLACEHOLDER: &str = "Write your todo..";
pub const CREATE: &str = "Create";
pub const DELETE: &str = "×";
pub const LOADING: &str = "Loading...";

/// Renders the view. Styling is only emitted when the target supports it.
#[derive(Clone, Copy, Debug)]
pub struct Screen {
    styled: bool
}

impl Screen {
    pub fn new(styled: bool) -> Self {
        Self { styled }
    }

    pub fn for_term(term: &Term) -> Self {
        Self::new(term.features().colors_supported())
    }

    /// A row of the list. Finished todos are struck through, or wrapped in `~~` when styling is
    /// off.
    pub fn todo(&self, row: usize, todo: &Todo) -> String {
        let text = if !todo.done {
            todo.text.clone()
        } else if self.styled {
            style(&todo.text)
                .strikethrough()
                .force_styling(true)
                .to_string()
        } else {
            format!("~~{}~~", todo.text)
        };
        format!("{:>3}. {}  {}", row + 1, text, DELETE)
    }

    fn input(&self, draft: &str) -> String {
        let draft = if draft.is_empty() && self.styled {
            style(PLACEHOLDER).dim().force_styling(true).to_string()
        } else if draft.is_empty() {
            PLACEHOLDER.to_string()
        } else {
            draft.to_string()
        };
        format!("> {}  [{}]", draft, CREATE)
    }

    pub fn render<S, C>(&self, view: &TodoListView<S, C>) -> String {
        let mut lines = vec![
            TITLE.to_string(),
            String::new(),
            self.input(view.draft()),
            String::new()
        ];
        match view.list() {
            ListState::Loading => lines.push(LOADING.to_string()),
            ListState::Failed(message) => lines.push(format!("Error : {}", message)),
            ListState::Ready(todos) => lines.extend(
                todos
                    .iter()
                    .enumerate()
                    .map(|(row, todo)| self.todo(row, todo))
            )
        }
        lines.join("\n")
    }
}
