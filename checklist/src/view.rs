use crate::{
    confirm::{Confirm, DELETE_PROMPT},
    repository::{Todo, TodoService}
};

/// What the list part of the screen shows.
#[derive(Clone, Debug, PartialEq)]
pub enum ListState {
    Loading,
    /// The message of the error that ended the last list read.
    Failed(String),
    Ready(Vec<Todo>)
}

/// The todo list screen: a draft for new todos and the list itself.
///
/// Every handler finishes by refreshing the list, either with an explicit refetch (after an add)
/// or by re-reading it through the cache, which the mutation has already updated.
pub struct TodoListView<S, C> {
    service: S,
    confirm: C,
    draft: String,
    list: ListState
}

impl<S, C> TodoListView<S, C> {
    pub fn new(service: S, confirm: C) -> Self {
        Self {
            service,
            confirm,
            draft: String::new(),
            list: ListState::Loading
        }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn list(&self) -> &ListState {
        &self.list
    }

    pub fn set_draft<T: Into<String>>(&mut self, text: T) {
        self.draft = text.into();
    }
}

impl<S: TodoService, C: Confirm> TodoListView<S, C> {
    /// Load the list for the first time.
    pub async fn mount(&mut self) {
        self.list = ListState::Loading;
        self.reload().await;
    }

    /// Read the list again, from the cache if it's complete there.
    pub async fn reload(&mut self) {
        let todos = self.service.todos().await;
        self.set_list(todos);
    }

    /// Fetch the list from the server, bypassing the cache.
    pub async fn refetch(&mut self) {
        let todos = self.service.refetch_todos().await;
        self.set_list(todos);
    }

    fn set_list(&mut self, todos: Result<Vec<Todo>, crate::TodoError>) {
        self.list = match todos {
            Ok(todos) => ListState::Ready(todos),
            Err(e) => ListState::Failed(e.to_string())
        };
    }

    fn todo_at(&self, row: usize) -> Option<Todo> {
        match &self.list {
            ListState::Ready(todos) => todos.get(row).cloned(),
            _ => None
        }
    }

    /// Add the draft as a new todo. A blank draft does nothing. The draft is sent as typed, and
    /// cleared once the request finished, whether it succeeded or not.
    pub async fn submit(&mut self) {
        if self.draft.trim().is_empty() {
            return;
        }

        match self.service.add_todo(self.draft.clone()).await {
            Ok(()) => self.refetch().await,
            Err(e) => tracing::warn!(error = %e, "failed to add todo")
        }
        self.draft.clear();
    }

    /// Flip the `done` flag of the todo in `row`.
    pub async fn toggle(&mut self, row: usize) {
        let todo = match self.todo_at(row) {
            Some(todo) => todo,
            None => return
        };

        if let Err(e) = self.service.toggle_todo(todo.id, !todo.done).await {
            tracing::warn!(error = %e, "failed to toggle todo");
        }
        self.reload().await;
    }

    /// Delete the todo in `row` after the user confirmed it.
    pub async fn delete(&mut self, row: usize) {
        let todo = match self.todo_at(row) {
            Some(todo) => todo,
            None => return
        };
        if !self.confirm.confirm(DELETE_PROMPT).await {
            return;
        }

        if let Err(e) = self.service.delete_todo(todo.id).await {
            tracing::warn!(error = %e, "failed to delete todo");
        }
        self.reload().await;
    }
}

#[cfg(test)]
mod test {
    use super::{ListState, TodoListView};
    use crate::{
        confirm::{MockConfirm, DELETE_PROMPT},
        repository::{MockTodoService, Todo, TodoError}
    };
    use mockall::predicate::eq;

    fn todo(id: &str, text: &str, done: bool) -> Todo {
        Todo {
            id: id.to_string(),
            text: text.to_string(),
            done
        }
    }

    fn view_with(
        service: MockTodoService,
        confirm: MockConfirm,
        todos: Vec<Todo>
    ) -> TodoListView<MockTodoService, MockConfirm> {
        let mut view = TodoListView::new(service, confirm);
        view.list = ListState::Ready(todos);
        view
    }

    #[tokio::test]
    async fn mount_shows_the_list() {
        let mut service = MockTodoService::new();
        service
            .expect_todos()
            .times(1)
            .returning(|| Ok(vec![todo("1", "Buy milk", false)]));
        let mut view = TodoListView::new(service, MockConfirm::new());
        assert_eq!(view.list(), &ListState::Loading);

        view.mount().await;

        assert_eq!(
            view.list(),
            &ListState::Ready(vec![todo("1", "Buy milk", false)])
        );
    }

    #[tokio::test]
    async fn mount_shows_the_error_message() {
        let mut service = MockTodoService::new();
        service
            .expect_todos()
            .returning(|| Err(TodoError::GraphQL("field \"todos\" not found".to_string())));
        let mut view = TodoListView::new(service, MockConfirm::new());

        view.mount().await;

        assert_eq!(
            view.list(),
            &ListState::Failed("field \"todos\" not found".to_string())
        );
    }

    #[tokio::test]
    async fn blank_drafts_send_nothing() {
        let mut view = view_with(MockTodoService::new(), MockConfirm::new(), vec![]);
        view.set_draft("  ");

        view.submit().await;

        assert_eq!(view.draft(), "  ");
        assert_eq!(view.list(), &ListState::Ready(vec![]));
    }

    #[tokio::test]
    async fn submit_sends_the_raw_draft_then_refetches() {
        let mut service = MockTodoService::new();
        service
            .expect_add_todo()
            .with(eq(" Walk dog ".to_string()))
            .times(1)
            .returning(|_| Ok(()));
        service
            .expect_refetch_todos()
            .times(1)
            .returning(|| Ok(vec![todo("1", " Walk dog ", false)]));
        service.expect_todos().never();
        let mut view = view_with(service, MockConfirm::new(), vec![]);
        view.set_draft(" Walk dog ");

        view.submit().await;

        assert_eq!(view.draft(), "");
        assert_eq!(
            view.list(),
            &ListState::Ready(vec![todo("1", " Walk dog ", false)])
        );
    }

    #[tokio::test]
    async fn failed_adds_still_clear_the_draft() {
        let mut service = MockTodoService::new();
        service
            .expect_add_todo()
            .times(1)
            .returning(|_| Err(TodoError::GraphQL("permission denied".to_string())));
        service.expect_refetch_todos().never();
        let mut view = view_with(service, MockConfirm::new(), vec![]);
        view.set_draft("Walk dog");

        view.submit().await;

        assert_eq!(view.draft(), "");
        assert_eq!(view.list(), &ListState::Ready(vec![]));
    }

    #[tokio::test]
    async fn toggle_flips_done_and_rereads() {
        let mut service = MockTodoService::new();
        service
            .expect_toggle_todo()
            .with(eq("1".to_string()), eq(true))
            .times(1)
            .returning(|_, _| Ok(()));
        service
            .expect_todos()
            .times(1)
            .returning(|| Ok(vec![todo("1", "Buy milk", true)]));
        let mut view = view_with(service, MockConfirm::new(), vec![todo("1", "Buy milk", false)]);

        view.toggle(0).await;

        assert_eq!(
            view.list(),
            &ListState::Ready(vec![todo("1", "Buy milk", true)])
        );
    }

    #[tokio::test]
    async fn rows_out_of_range_are_ignored() {
        let mut view = view_with(
            MockTodoService::new(),
            MockConfirm::new(),
            vec![todo("1", "Buy milk", false)]
        );

        view.toggle(3).await;
        view.delete(1).await;

        assert_eq!(
            view.list(),
            &ListState::Ready(vec![todo("1", "Buy milk", false)])
        );
    }

    #[tokio::test]
    async fn declined_deletes_send_nothing() {
        let mut confirm = MockConfirm::new();
        confirm
            .expect_confirm()
            .withf(|prompt| prompt == DELETE_PROMPT)
            .times(1)
            .returning(|_| false);
        let todos = vec![todo("1", "Buy milk", false)];
        let mut view = view_with(MockTodoService::new(), confirm, todos.clone());

        view.delete(0).await;

        assert_eq!(view.list(), &ListState::Ready(todos));
    }

    #[tokio::test]
    async fn confirmed_deletes_remove_the_row() {
        let mut confirm = MockConfirm::new();
        confirm.expect_confirm().returning(|_| true);
        let mut service = MockTodoService::new();
        service
            .expect_delete_todo()
            .with(eq("1".to_string()))
            .times(1)
            .returning(|_| Ok(()));
        service
            .expect_todos()
            .times(1)
            .returning(|| Ok(vec![todo("2", "Walk dog", false)]));
        service.expect_refetch_todos().never();
        let mut view = view_with(
            service,
            confirm,
            vec![todo("1", "Buy milk", false), todo("2", "Walk dog", false)]
        );

        view.delete(0).await;

        assert_eq!(
            view.list(),
            &ListState::Ready(vec![todo("2", "Walk dog", false)])
        );
    }

    #[tokio::test]
    async fn failed_mutations_are_dropped() {
        let mut service = MockTodoService::new();
        service
            .expect_toggle_todo()
            .returning(|_, _| Err(TodoError::NoData));
        service
            .expect_todos()
            .times(1)
            .returning(|| Ok(vec![todo("1", "Buy milk", false)]));
        let mut view = view_with(service, MockConfirm::new(), vec![todo("1", "Buy milk", false)]);

        view.toggle(0).await;

        assert_eq!(
            view.list(),
            &ListState::Ready(vec![todo("1", "Buy milk", false)])
        );
    }
}
