//! Contains the exchange factory and implementation. The factory is the only thing needed for most
//! users and is reexported from the root.

use crate::{
    store::{QueryStore, Store},
    types::{NormalizedCacheExtension, NormalizedCacheOptions}
};
use checklist_client::{
    exchange::{
        Exchange, ExchangeFactory, ExchangeResult, Operation, OperationResult, OperationType
    },
    DebugInfo, GraphQLQuery, RequestPolicy, Response, ResultSource
};
use std::{any::Any, sync::Arc};

#[cfg(test)]
mod test_queries;

/// The normalized cache exchange. This will store normalized queries by unique ID.
#[derive(Default)]
pub struct NormalizedCacheExchange {
    options: Option<NormalizedCacheOptions>
}

impl NormalizedCacheExchange {
    /// Create a new cache exchange with extra options.
    pub fn with_options(options: NormalizedCacheOptions) -> Self {
        Self {
            options: Some(options)
        }
    }

    /// Create a new cache exchange with default options
    pub fn new() -> Self {
        Self { options: None }
    }
}

impl<TNext: Exchange> ExchangeFactory<TNext> for NormalizedCacheExchange {
    type Output = NormalizedCacheImpl<TNext>;

    fn build(self, next: TNext) -> NormalizedCacheImpl<TNext> {
        let options = self.options.unwrap_or_default();
        let store = Store::new(options.custom_keys.unwrap_or_default());
        NormalizedCacheImpl {
            next,
            store: Arc::new(store)
        }
    }
}

/// The implementation of the normalized cache. Exposed in case someone needs it, but most users
/// shouldn't.
pub struct NormalizedCacheImpl<TNext: Exchange> {
    next: TNext,
    store: Arc<Store>
}

fn cached_result<Q: GraphQLQuery>(
    operation: Operation<Q::Variables>,
    data: Option<Q::ResponseData>
) -> OperationResult<Q::ResponseData> {
    OperationResult {
        key: operation.key,
        meta: operation.meta,
        response: Response {
            debug_info: Some(DebugInfo {
                source: ResultSource::Cache
            }),
            data,
            errors: None
        }
    }
}

impl<TNext: Exchange> NormalizedCacheImpl<TNext> {
    /// A handle to the underlying store.
    pub fn store(&self) -> QueryStore {
        self.store.clone().into()
    }

    async fn run_query<Q: GraphQLQuery>(
        &self,
        operation: Operation<Q::Variables>
    ) -> ExchangeResult<Q::ResponseData> {
        let policy = operation.options.request_policy;
        if policy != RequestPolicy::NetworkOnly {
            match self.store.read_query::<Q>(&operation.query.variables) {
                Ok(Some(cached)) => {
                    tracing::debug!(key = operation.key, "cache hit");
                    return Ok(cached_result::<Q>(operation, Some(cached)));
                }
                Ok(None) => tracing::debug!(key = operation.key, "cache miss"),
                Err(e) => tracing::warn!(key = operation.key, error = %e, "unreadable cache entry")
            }
            if policy == RequestPolicy::CacheOnly {
                return Ok(cached_result::<Q>(operation, None));
            }
        }

        let variables = operation.query.variables.clone();
        let res = self.next.run::<Q>(operation).await?;
        if !res.response.has_errors() {
            if let Err(e) = self.store.write_query::<Q>(&res, &variables) {
                tracing::warn!(key = res.key, error = %e, "failed to normalize query result");
            }
            self.store.collect_garbage();
        }
        Ok(res)
    }

    async fn run_mutation<Q: GraphQLQuery>(
        &self,
        operation: Operation<Q::Variables>,
        extension: Option<NormalizedCacheExtension>
    ) -> ExchangeResult<Q::ResponseData> {
        let variables = operation.query.variables.clone();
        let res = self.next.run::<Q>(operation).await?;
        if res.response.has_errors() || res.response.data.is_none() {
            return Ok(res);
        }

        if let Err(e) = self.store.write_query::<Q>(&res, &variables) {
            tracing::warn!(key = res.key, error = %e, "failed to normalize mutation result");
        }
        if let Some(updater) = extension.as_ref().and_then(|ext| ext.update.as_ref()) {
            let data: &(dyn Any + Send + Sync) = &res.response.data;
            if let Err(e) = updater(data, self.store()) {
                tracing::warn!(key = res.key, error = %e, "cache update hook failed");
            }
        }
        self.store.collect_garbage();
        Ok(res)
    }
}

#[async_trait]
impl<TNext: Exchange> Exchange for NormalizedCacheImpl<TNext> {
    async fn run<Q: GraphQLQuery>(
        &self,
        operation: Operation<Q::Variables>
    ) -> ExchangeResult<Q::ResponseData> {
        match operation.meta.operation_type {
            OperationType::Query => self.run_query::<Q>(operation).await,
            OperationType::Mutation => {
                let extension = operation
                    .options
                    .extensions
                    .as_ref()
                    .and_then(|ext| ext.get::<NormalizedCacheExtension>())
                    .cloned();
                self.run_mutation::<Q>(operation, extension).await
            }
        }
    }
}
