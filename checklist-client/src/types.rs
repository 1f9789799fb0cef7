use crate::{GraphQLQuery, QueryBody, QueryError, Response};
use serde::{de::DeserializeOwned, Serialize};
use std::{fmt, sync::Arc};
use type_map::concurrent::TypeMap;
use url::Url;

pub type ExchangeResult<R> = Result<OperationResult<R>, QueryError>;

/// Produces the headers attached to an outgoing operation. Called once per request.
pub type HeaderFn = Arc<dyn Fn() -> Vec<HeaderPair> + Send + Sync>;

/// Typed extra data attached to an operation, read by exchanges that understand it.
pub type Extensions = Arc<TypeMap>;

#[async_trait]
pub trait Exchange: Send + Sync + 'static {
    async fn run<Q: GraphQLQuery>(
        &self,
        operation: Operation<Q::Variables>
    ) -> ExchangeResult<Q::ResponseData>;
}

/// Builds an exchange around the next one in the chain.
pub trait ExchangeFactory<TNext: Exchange> {
    type Output: Exchange;

    fn build(self, next: TNext) -> Self::Output;
}

pub trait QueryInfo<TVars> {
    fn selection(variables: &TVars) -> Vec<FieldSelector>;
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum OperationType {
    Query,
    Mutation
}

impl OperationType {
    /// The key of the root entity results of this type are written under.
    pub fn root_key(self) -> &'static str {
        match self {
            OperationType::Query => "Query",
            OperationType::Mutation => "Mutation"
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.root_key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestPolicy {
    /// Serve queries from the cache if possible, fetch otherwise
    CacheFirst,
    /// Never hit the network for queries
    CacheOnly,
    /// Always fetch, then update the cache with the result
    NetworkOnly
}

impl Default for RequestPolicy {
    fn default() -> Self {
        RequestPolicy::CacheFirst
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderPair(pub String, pub String);

impl HeaderPair {
    pub fn new<K: Into<String>, V: Into<String>>(key: K, value: V) -> Self {
        HeaderPair(key.into(), value.into())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldSelector {
    /// field name, arguments
    Scalar(&'static str, String),
    /// field name, arguments, typename, inner selection
    Object(&'static str, String, &'static str, Vec<FieldSelector>)
}

#[derive(Clone, Debug, PartialEq)]
pub struct OperationMeta {
    pub query_key: u32,
    pub operation_type: OperationType
}

#[derive(Clone)]
pub struct OperationOptions {
    pub url: Url,
    pub extra_headers: Option<HeaderFn>,
    pub request_policy: RequestPolicy,
    pub extensions: Option<Extensions>
}

#[derive(Clone)]
pub struct Operation<V: Serialize + Clone + Send + Sync> {
    pub key: u64,
    pub meta: OperationMeta,
    pub query: QueryBody<V>,
    pub options: OperationOptions
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ResultSource {
    Cache,
    Network
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DebugInfo {
    pub source: ResultSource
}

#[derive(Clone, Debug)]
pub struct OperationResult<R: DeserializeOwned + Send + Sync + Clone> {
    pub key: u64,
    pub meta: OperationMeta,
    pub response: Response<R>
}

/// Per-call overrides for the client defaults.
#[derive(Default, Clone)]
pub struct QueryOptions {
    pub url: Option<Url>,
    pub extra_headers: Option<HeaderFn>,
    pub request_policy: Option<RequestPolicy>,
    pub extensions: Option<Extensions>
}

impl QueryOptions {
    pub fn with_request_policy(mut self, request_policy: RequestPolicy) -> Self {
        self.request_policy = Some(request_policy);
        self
    }

    pub fn with_extensions(mut self, extensions: Extensions) -> Self {
        self.extensions = Some(extensions);
        self
    }
}
