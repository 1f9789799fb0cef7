//! A small GraphQL client built around a chain of exchanges.
//!
//! # Getting Started
//!
//! Operations are described by types implementing [`GraphQLQuery`](./trait.GraphQLQuery.html).
//! They carry the query string, the shape of their variables and response, and a static
//! description of their selection that caching exchanges use to normalize results.
//!
//! ```ignore
//! use checklist_client::{ClientBuilder, FetchExchange};
//!
//! let client = ClientBuilder::new("https://example.hasura.app/v1/graphql")
//!     .with_extra_headers(|| vec![HeaderPair::new("x-hasura-admin-secret", "secret")])
//!     .with_exchange(FetchExchange::new())
//!     .build()?;
//!
//! let response = client.query(GetTodos, get_todos::Variables).await?;
//! ```
//!
//! # Exchanges
//!
//! Exchanges are like a bi-directional middleware.
//! They act on both the outgoing operation and the incoming result,
//! passing the operation on if they can't return a result themselves.
//!
//! ## FetchExchange
//!
//! The fetch exchange serializes the operation, posts it to the endpoint with any extra headers
//! and deserializes the response. It never forwards an operation, so it should be the first
//! exchange added to the builder (and therefore the last one to run).
//!
//! A normalized cache lives in the `checklist-normalized-cache` crate.
//!
//! # Features
//!
//! * `default-exchanges` **(default)** - Include the fetch exchange

#[macro_use]
extern crate serde;
#[macro_use]
extern crate async_trait;

use std::{collections::HashMap, fmt, fmt::Display};
use types::*;

pub mod client;
mod error;
pub mod exchanges;
pub(crate) mod types;
pub mod utils;

pub use client::{BuildError, Client, ClientBuilder};
pub use error::QueryError;
#[cfg(feature = "default-exchanges")]
pub use exchanges::{FetchError, FetchExchange};
use serde::{de::DeserializeOwned, Serialize};
pub use type_map::concurrent::TypeMap as ExtensionMap;
pub use types::{DebugInfo, Extensions, HeaderPair, QueryOptions, RequestPolicy, ResultSource};
pub use url::Url;

/// Types used by custom exchanges. Regular users probably don't need these.
pub mod exchange {
    pub use crate::types::{
        Exchange, ExchangeFactory, ExchangeResult, HeaderFn, Operation, OperationMeta,
        OperationOptions, OperationResult, OperationType
    };
}

/// Types used to describe operations. Query modules implement these, exchanges read them.
pub mod codegen {
    pub use crate::types::{FieldSelector, QueryInfo};
}

/// The form in which operations are sent over HTTP. This will be built using the
/// [GraphQLQuery](./trait.GraphQLQuery.html) trait normally.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct QueryBody<Variables: Serialize + Send + Sync + Clone> {
    /// The values for the variables declared in the operation.
    pub variables: Variables,
    /// The GraphQL document, as a string.
    pub query: &'static str,
    /// The GraphQL operation name, as a string.
    #[serde(rename = "operationName")]
    pub operation_name: &'static str
}

/// Describes a single GraphQL operation (query or mutation).
/// It is implemented on a zero-sized marker type, one per operation.
pub trait GraphQLQuery: Send + Sync + 'static {
    /// The shape of the variables expected by the operation.
    type Variables: Serialize + Send + Sync + Clone + 'static;
    /// The top-level shape of the response data (the `data` field in the GraphQL response).
    type ResponseData: Serialize
        + DeserializeOwned
        + Send
        + Sync
        + Clone
        + 'static
        + QueryInfo<Self::Variables>;

    /// Produce the request body and the static metadata of the operation.
    fn build_query(variables: Self::Variables) -> (QueryBody<Self::Variables>, OperationMeta);

    fn selection(variables: &Self::Variables) -> Vec<FieldSelector> {
        <Self::ResponseData as QueryInfo<Self::Variables>>::selection(variables)
    }
}

/// The generic shape taken by the responses of GraphQL APIs.
///
/// [Spec](https://github.com/facebook/graphql/blob/master/spec/Section%207%20--%20Response.md)
///
/// ```
/// # use serde_json::json;
/// # use serde::Deserialize;
/// #
/// # #[derive(Debug, Deserialize, PartialEq, Clone)]
/// # struct Todo {
/// #     id: String,
/// #     done: bool
/// # }
/// #
/// # #[derive(Debug, Deserialize, PartialEq, Clone)]
/// # struct ResponseData {
/// #     todos: Vec<Todo>
/// # }
/// #
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use checklist_client::Response;
///
/// let body: Response<ResponseData> = serde_json::from_value(json!({
///     "data": {
///         "todos": [{"id": "1", "done": false}]
///     },
///     "errors": []
/// }))?;
///
/// let expected: Response<ResponseData> = Response {
///     data: Some(ResponseData {
///         todos: vec![Todo { id: "1".to_owned(), done: false }]
///     }),
///     errors: Some(vec![]),
///     debug_info: None
/// };
///
/// assert_eq!(body, expected);
/// #     Ok(())
/// # }
/// ```
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Response<Data: Clone> {
    /// Where the result came from. Filled in by the exchanges, never by the server.
    #[serde(skip_deserializing, rename = "debugInfo")]
    pub debug_info: Option<DebugInfo>,
    /// The absent, partial or complete response data.
    pub data: Option<Data>,
    /// The top-level errors returned by the server.
    pub errors: Option<Vec<Error>>
}

impl<Data: Clone> Response<Data> {
    /// Whether the server reported any errors for this response.
    pub fn has_errors(&self) -> bool {
        self.errors
            .as_ref()
            .map(|errors| !errors.is_empty())
            .unwrap_or(false)
    }
}

/// An element in the top-level `errors` array of a response body.
///
/// ```
/// # use serde_json::json;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use checklist_client::*;
///
/// let body: Response<serde_json::Value> = serde_json::from_value(json!({
///     "data": null,
///     "errors": [
///         {
///             "message": "field \"todos\" not found in type: 'query_root'",
///             "path": ["todos", 0]
///         }
///     ]
/// }))?;
///
/// let error = &body.errors.unwrap()[0];
/// assert_eq!(
///     error.path,
///     Some(vec![PathFragment::Key("todos".into()), PathFragment::Index(0)])
/// );
/// assert_eq!(
///     error.to_string(),
///     "todos/0:0:0: field \"todos\" not found in type: 'query_root'"
/// );
/// #     Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Error {
    /// The human-readable error message. This is the only required field.
    pub message: String,
    /// Which locations in the query the error applies to.
    pub locations: Option<Vec<Location>>,
    /// Which path in the query the error applies to, e.g. `["todos", 0, "text"]`.
    pub path: Option<Vec<PathFragment>>,
    /// Additional details. Their exact format is defined by the server.
    pub extensions: Option<HashMap<String, serde_json::Value>>
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `/` separates path fragments, like a JSON Pointer
        let path = self
            .path
            .as_ref()
            .map(|fragments| {
                fragments
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("/")
            })
            .unwrap_or_else(|| "<query>".to_string());

        let loc = self
            .locations
            .as_ref()
            .and_then(|locations| locations.first())
            .copied()
            .unwrap_or_default();

        write!(f, "{}:{}:{}: {}", path, loc.line, loc.column, self.message)
    }
}

/// Part of a path in a query. It can be an object key or an array index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PathFragment {
    /// A key inside an object
    Key(String),
    /// An index inside an array
    Index(i32)
}

impl Display for PathFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathFragment::Key(key) => write!(f, "{}", key),
            PathFragment::Index(idx) => write!(f, "{}", idx)
        }
    }
}

/// A location inside a query string, starting from 1. Used in errors.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub line: i32,
    pub column: i32
}
