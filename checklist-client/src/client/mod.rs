use std::sync::Arc;

mod builder;
mod r#impl;

use crate::{exchanges::TerminatorExchange, Exchange, GraphQLQuery, QueryError, QueryOptions, Response};
pub use builder::{BuildError, ClientBuilder};
pub use r#impl::ClientImpl;

/// A cheaply cloneable handle to a configured client. All clones share the same exchange chain,
/// and with it any cache in the chain.
#[derive(Clone)]
#[repr(transparent)]
pub struct Client<M: Exchange = TerminatorExchange>(pub Arc<ClientImpl<M>>);

impl<M: Exchange> Client<M> {
    /// Run an operation (query or mutation) with the client defaults.
    pub async fn query<Q: GraphQLQuery>(
        &self,
        _query: Q,
        variables: Q::Variables
    ) -> Result<Response<Q::ResponseData>, QueryError> {
        self.0.query(_query, variables).await
    }

    /// Run an operation, overriding the client defaults with `options`.
    pub async fn query_with_options<Q: GraphQLQuery>(
        &self,
        _query: Q,
        variables: Q::Variables,
        options: QueryOptions
    ) -> Result<Response<Q::ResponseData>, QueryError> {
        self.0.query_with_options(_query, variables, options).await
    }
}
