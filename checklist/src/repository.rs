use crate::queries::{
    add_todo::add_todo, delete_todo::delete_todo, get_todos::get_todos, toggle_todo::toggle_todo,
    AddTodo, DeleteTodo, GetTodos, ToggleTodo
};
use checklist_client::{
    exchange::Exchange, ext, Client, QueryError, QueryOptions, RequestPolicy, Response
};
use checklist_normalized_cache::NormalizedCacheExtension;

/// A row of the `todos` table, as returned by the list query.
pub type Todo = get_todos::GetTodosTodos;

#[derive(Debug, thiserror::Error)]
pub enum TodoError {
    #[error("{0}")]
    Query(QueryError),
    /// The server answered with GraphQL errors. Their messages are joined by newlines.
    #[error("{0}")]
    GraphQL(String),
    #[error("the server returned no data")]
    NoData
}

impl From<QueryError> for TodoError {
    fn from(e: QueryError) -> Self {
        TodoError::Query(e)
    }
}

/// Everything the list view needs from the backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoService: Send + Sync {
    /// The list, served from the cache when it's complete there.
    async fn todos(&self) -> Result<Vec<Todo>, TodoError>;
    /// The list, always fetched from the server.
    async fn refetch_todos(&self) -> Result<Vec<Todo>, TodoError>;
    async fn add_todo(&self, text: String) -> Result<(), TodoError>;
    async fn toggle_todo(&self, id: String, done: bool) -> Result<(), TodoError>;
    /// Delete a todo and drop it from the cached list once the server confirmed it.
    async fn delete_todo(&self, id: String) -> Result<(), TodoError>;
}

/// Drops the todo with `id` from a list, keeping the order of the rest.
pub fn prune_todo(todos: Vec<Todo>, id: &str) -> Vec<Todo> {
    todos.into_iter().filter(|todo| todo.id != id).collect()
}

fn into_data<T: Clone>(response: Response<T>) -> Result<T, TodoError> {
    if let Some(errors) = response.errors.filter(|errors| !errors.is_empty()) {
        let message = errors
            .iter()
            .map(|error| error.message.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        return Err(TodoError::GraphQL(message));
    }
    response.data.ok_or(TodoError::NoData)
}

/// [`TodoService`](./trait.TodoService.html) on top of a GraphQL client. The client should
/// contain a normalized cache, otherwise every read goes to the network.
pub struct TodoRepository<M: Exchange> {
    client: Client<M>
}

impl<M: Exchange> TodoRepository<M> {
    pub fn new(client: Client<M>) -> Self {
        Self { client }
    }

    async fn list(&self, request_policy: RequestPolicy) -> Result<Vec<Todo>, TodoError> {
        let options = QueryOptions::default().with_request_policy(request_policy);
        let response = self
            .client
            .query_with_options(GetTodos, get_todos::Variables, options)
            .await?;
        Ok(into_data(response)?.todos)
    }
}

#[async_trait]
impl<M: Exchange> TodoService for TodoRepository<M> {
    async fn todos(&self) -> Result<Vec<Todo>, TodoError> {
        self.list(RequestPolicy::CacheFirst).await
    }

    async fn refetch_todos(&self) -> Result<Vec<Todo>, TodoError> {
        self.list(RequestPolicy::NetworkOnly).await
    }

    async fn add_todo(&self, text: String) -> Result<(), TodoError> {
        let response = self
            .client
            .query(AddTodo, add_todo::Variables { text })
            .await?;
        let data = into_data(response)?;
        tracing::info!(?data, "add todo");
        Ok(())
    }

    async fn toggle_todo(&self, id: String, done: bool) -> Result<(), TodoError> {
        let response = self
            .client
            .query(ToggleTodo, toggle_todo::Variables { id, done })
            .await?;
        let data = into_data(response)?;
        tracing::info!(?data, "toggle todo");
        Ok(())
    }

    async fn delete_todo(&self, id: String) -> Result<(), TodoError> {
        let removed = id.clone();
        let extension = NormalizedCacheExtension::new().update::<DeleteTodo, _>(move |_, store| {
            store.update_query(GetTodos, get_todos::Variables, |data| {
                data.map(|data| get_todos::ResponseData {
                    todos: prune_todo(data.todos, &removed)
                })
            })
        });
        let options = QueryOptions::default().with_extensions(ext![extension]);
        let response = self
            .client
            .query_with_options(DeleteTodo, delete_todo::Variables { id }, options)
            .await?;
        let data = into_data(response)?;
        tracing::info!(?data, "delete todo");
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{into_data, prune_todo, Todo, TodoError};
    use checklist_client::{Error, Response};

    fn todo(id: &str, text: &str, done: bool) -> Todo {
        Todo {
            id: id.to_string(),
            text: text.to_string(),
            done
        }
    }

    fn error(message: &str) -> Error {
        Error {
            message: message.to_string(),
            locations: None,
            path: None,
            extensions: None
        }
    }

    #[test]
    fn prune_removes_only_the_matching_id() {
        let todos = vec![
            todo("1", "Buy milk", false),
            todo("2", "Walk dog", true),
            todo("3", "Call mom", false)
        ];

        let pruned = prune_todo(todos, "2");

        assert_eq!(
            pruned,
            vec![todo("1", "Buy milk", false), todo("3", "Call mom", false)]
        );
        assert_eq!(prune_todo(pruned.clone(), "missing"), pruned);
    }

    #[test]
    fn graphql_errors_are_joined() {
        let response: Response<()> = Response {
            debug_info: None,
            data: Some(()),
            errors: Some(vec![error("first"), error("second")])
        };

        match into_data(response) {
            Err(TodoError::GraphQL(message)) => assert_eq!(message, "first\nsecond"),
            other => panic!("expected a GraphQL error, got {:?}", other)
        }
    }

    #[test]
    fn empty_error_lists_are_ignored() {
        let response = Response {
            debug_info: None,
            data: Some(1),
            errors: Some(vec![])
        };

        assert_eq!(into_data(response).unwrap(), 1);
    }

    #[test]
    fn missing_data_is_an_error() {
        let response: Response<u8> = Response {
            debug_info: None,
            data: None,
            errors: None
        };

        assert!(matches!(into_data(response), Err(TodoError::NoData)));
    }
}
