use crate::{
    types::{HeaderFn, OperationOptions},
    utils::progressive_hash,
    Exchange, GraphQLQuery, Operation, OperationMeta, QueryBody, QueryError, QueryOptions,
    RequestPolicy, Response
};
use std::sync::Arc;
use url::Url;

pub struct ClientImpl<M: Exchange> {
    pub(crate) url: Url,
    pub(crate) exchange: M,
    pub(crate) extra_headers: Option<HeaderFn>,
    pub(crate) request_policy: RequestPolicy
}

impl<M: Exchange> ClientImpl<M> {
    pub(crate) async fn execute_request_operation<Q: GraphQLQuery>(
        &self,
        operation: Operation<Q::Variables>
    ) -> Result<Response<Q::ResponseData>, QueryError> {
        tracing::debug!(
            operation = operation.query.operation_name,
            key = operation.key,
            policy = ?operation.options.request_policy,
            "executing operation"
        );
        self.exchange
            .run::<Q>(operation)
            .await
            .map(|operation_result| operation_result.response)
    }

    pub async fn query<Q: GraphQLQuery>(
        &self,
        _query: Q,
        variables: Q::Variables
    ) -> Result<Response<Q::ResponseData>, QueryError> {
        self.query_with_options(_query, variables, QueryOptions::default())
            .await
    }

    pub async fn query_with_options<Q: GraphQLQuery>(
        &self,
        _query: Q,
        variables: Q::Variables,
        options: QueryOptions
    ) -> Result<Response<Q::ResponseData>, QueryError> {
        let (query, meta) = Q::build_query(variables);
        let operation = self.create_request_operation::<Q>(query, meta, options)?;
        self.execute_request_operation::<Q>(operation).await
    }

    pub(crate) fn create_request_operation<Q: GraphQLQuery>(
        &self,
        query: QueryBody<Q::Variables>,
        meta: OperationMeta,
        options: QueryOptions
    ) -> Result<Operation<Q::Variables>, QueryError> {
        let key = progressive_hash(meta.query_key, &query.variables)?;
        let extra_headers = options
            .extra_headers
            .or_else(|| self.extra_headers.clone());

        Ok(Operation {
            key,
            meta,
            query,
            options: OperationOptions {
                url: options.url.unwrap_or_else(|| self.url.clone()),
                extra_headers,
                request_policy: options.request_policy.unwrap_or(self.request_policy),
                extensions: options.extensions
            }
        })
    }
}
