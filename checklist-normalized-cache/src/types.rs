use crate::{CacheError, QueryStore};
use checklist_client::GraphQLQuery;
use std::{any::Any, collections::HashMap, sync::Arc};

/// Options to pass to the normalized cache.
#[derive(Default)]
pub struct NormalizedCacheOptions {
    /// An optional `HashMap` of typenames to unique ID keys.
    /// The keys are the names of the fields, not the IDs themselves.
    /// So if your `User` has a unique ID called `ident`, you should
    /// set `"User" => "ident"`.
    /// The default ID keys are `id` and `_id`, so those don't need to be mapped.
    pub custom_keys: Option<HashMap<&'static str, String>>
}

pub(crate) type Updater =
    Arc<dyn Fn(&(dyn Any + Send + Sync), QueryStore) -> Result<(), CacheError> + Send + Sync>;

/// An operation extension that lets you pass additional logic into the cache.
#[derive(Default, Clone)]
pub struct NormalizedCacheExtension {
    pub(crate) update: Option<Updater>
}

impl NormalizedCacheExtension {
    /// Create a new extension with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// A custom updater function to run against related queries, such as lists of the same
    /// entity. It runs after a mutation succeeded and its result was written to the cache.
    ///
    /// The function has 2 parameters:
    ///
    /// * `current_data` - The returned data of the mutation you're running.
    /// * `store` - A [`QueryStore`](./struct.QueryStore.html) used to rewrite other queries.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let extension = NormalizedCacheExtension::new()
    ///     .update::<DeleteTodo, _>(move |_, store| {
    ///         store.update_query(GetTodos, get_todos::Variables, |data| {
    ///             data.map(|mut data| {
    ///                 data.todos.retain(|todo| todo.id != id);
    ///                 data
    ///             })
    ///         })
    ///     });
    /// ```
    pub fn update<Q: GraphQLQuery, F>(mut self, update: F) -> Self
    where
        F: Fn(&Option<Q::ResponseData>, QueryStore) -> Result<(), CacheError>
            + Send
            + Sync
            + 'static
    {
        self.update = Some(Arc::new(move |data, store| {
            match data.downcast_ref::<Option<Q::ResponseData>>() {
                Some(data) => update(data, store),
                None => Err(CacheError::UpdaterTypeMismatch)
            }
        }));
        self
    }
}
