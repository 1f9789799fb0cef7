use crate::store::{
    data::{InMemoryData, QUERY_ROOT},
    field_key, read,
    write::Writer
};
use checklist_client::{
    codegen::FieldSelector,
    exchange::{OperationResult, OperationType},
    GraphQLQuery
};
use fnv::FnvHashMap;
use parking_lot::RwLock;
use serde_json::Value;
use std::{collections::HashMap, sync::Arc};

#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("field `{1}` is missing from `{0}`")]
    MissingField(String, String),
    #[error("expected an object or list at `{0}`, found a scalar")]
    UnexpectedScalar(String),
    #[error("expected the result to be an object")]
    NotAnObject,
    #[error("the update hook was registered for a different operation")]
    UpdaterTypeMismatch,
    #[error("failed to encode result for the cache: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("cached data didn't match the query type: {0}")]
    Decode(#[source] serde_json::Error)
}

/// The normalized store shared by the cache exchange and update hooks.
pub struct Store {
    data: RwLock<InMemoryData>,
    custom_keys: FnvHashMap<&'static str, String>
}

/// A reference to the store used to run custom query updates
#[derive(Clone)]
pub struct QueryStore {
    pub(crate) store: Arc<Store>
}

impl QueryStore {
    /// Run a custom update function against the cache.
    ///
    /// # Parameters
    ///
    /// * `_query` - The [`GraphQLQuery`] for the query you want to update.
    /// * `variables` - The `Variables` for the query you want to update. It will only update
    /// cached results for that set of variables.
    /// * `updater_fn` - Takes the currently cached data (`None` if the query isn't cached) and
    /// returns the new data. Returning `None` removes the cached result, so the next read has to
    /// fetch it again.
    pub fn update_query<Q: GraphQLQuery, F>(
        &self,
        _query: Q,
        variables: Q::Variables,
        updater_fn: F
    ) -> Result<(), CacheError>
    where
        F: FnOnce(Option<Q::ResponseData>) -> Option<Q::ResponseData>
    {
        self.store.update_query::<Q, _>(&variables, updater_fn)
    }

    /// Read a query from the cache without touching the network.
    pub fn read_query<Q: GraphQLQuery>(
        &self,
        _query: Q,
        variables: Q::Variables
    ) -> Result<Option<Q::ResponseData>, CacheError> {
        self.store.read_query::<Q>(&variables)
    }
}

impl From<Arc<Store>> for QueryStore {
    fn from(store: Arc<Store>) -> Self {
        Self { store }
    }
}

impl Store {
    pub fn new(custom_keys: HashMap<&'static str, String>) -> Self {
        Self {
            data: RwLock::new(InMemoryData::new()),
            custom_keys: custom_keys.into_iter().collect()
        }
    }

    /// Whether an entity with this key is currently stored.
    pub fn contains_entity(&self, entity_key: &str) -> bool {
        self.data.read().contains_entity(entity_key)
    }

    /// Normalize a result into the store. Results without data are ignored.
    pub fn write_query<Q: GraphQLQuery>(
        &self,
        result: &OperationResult<Q::ResponseData>,
        variables: &Q::Variables
    ) -> Result<(), CacheError> {
        let data = match result.response.data.as_ref() {
            Some(data) => data,
            None => return Ok(())
        };
        self.write_data::<Q>(result.meta.operation_type, data, variables)
    }

    fn write_data<Q: GraphQLQuery>(
        &self,
        operation_type: OperationType,
        data: &Q::ResponseData,
        variables: &Q::Variables
    ) -> Result<(), CacheError> {
        let value = match serde_json::to_value(data).map_err(CacheError::Encode)? {
            Value::Object(value) => value,
            _ => return Err(CacheError::NotAnObject)
        };
        let selection = Q::selection(variables);

        let mut store = self.data.write();
        let mut writer = Writer::new(&mut store, &self.custom_keys);
        writer.write_entity(operation_type.root_key(), &selection, &value)
    }

    /// Rebuild a query from the store. `Ok(None)` is a cache miss.
    pub fn read_query<Q: GraphQLQuery>(
        &self,
        variables: &Q::Variables
    ) -> Result<Option<Q::ResponseData>, CacheError> {
        let selection = Q::selection(variables);
        let entity = {
            let store = self.data.read();
            read::read_entity(&store, QUERY_ROOT, &selection)
        };

        match entity {
            Some(entity) => serde_json::from_value(Value::Object(entity))
                .map(Some)
                .map_err(CacheError::Decode),
            None => Ok(None)
        }
    }

    pub fn update_query<Q: GraphQLQuery, F>(
        &self,
        variables: &Q::Variables,
        updater_fn: F
    ) -> Result<(), CacheError>
    where
        F: FnOnce(Option<Q::ResponseData>) -> Option<Q::ResponseData>
    {
        let data = self.read_query::<Q>(variables)?;
        match updater_fn(data) {
            Some(updated) => self.write_data::<Q>(OperationType::Query, &updated, variables),
            None => {
                self.remove_query::<Q>(variables);
                Ok(())
            }
        }
    }

    fn remove_query<Q: GraphQLQuery>(&self, variables: &Q::Variables) {
        let mut store = self.data.write();
        for field in Q::selection(variables) {
            let key = match &field {
                FieldSelector::Scalar(field_name, args) => field_key(field_name, args),
                FieldSelector::Object(field_name, args, _, _) => field_key(field_name, args)
            };
            store.remove_field(QUERY_ROOT, &key);
        }
    }

    /// Drop entities no cached query refers to anymore.
    pub fn collect_garbage(&self) {
        let removed = self.data.write().collect_garbage();
        if removed > 0 {
            tracing::trace!(removed, "collected unreachable entities");
        }
    }
}
