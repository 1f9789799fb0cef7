use crate::{
    types::{ExchangeResult, Operation, OperationResult},
    DebugInfo, Exchange, ExchangeFactory, GraphQLQuery, HeaderPair, QueryBody, Response,
    ResultSource
};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use url::Url;

const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("fetch error: {0}")]
    NetworkError(#[source] reqwest::Error),
    #[error("server returned error code: {status}\n{body}")]
    NotOk { status: u16, body: String },
    #[error("decoding error: {0}")]
    DecodeError(#[source] serde_json::Error)
}

/// The default fetch exchange
///
/// Posts the operation as JSON using `reqwest`. The underlying connection pool is shared by all
/// operations going through the exchange.
#[derive(Clone, Default)]
pub struct FetchExchange {
    client: reqwest::Client
}

impl FetchExchange {
    pub fn new() -> Self {
        Self::default()
    }

    async fn fetch<Q: GraphQLQuery>(
        &self,
        extra_headers: Vec<HeaderPair>,
        url: Url,
        query: &QueryBody<Q::Variables>
    ) -> Result<Response<Q::ResponseData>, FetchError> {
        let mut request = self
            .client
            .post(url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .header(ACCEPT, JSON_CONTENT_TYPE)
            .json(query);

        for HeaderPair(key, value) in extra_headers {
            request = request.header(key, value);
        }

        let response = request.send().await.map_err(FetchError::NetworkError)?;
        let status = response.status();
        let body = response.bytes().await.map_err(FetchError::NetworkError)?;

        if !status.is_success() {
            // Servers may send GraphQL errors along with an error status; those are more useful
            // than the status itself.
            return match serde_json::from_slice::<Response<Q::ResponseData>>(&body) {
                Ok(response) if response.has_errors() => Ok(response),
                _ => Err(FetchError::NotOk {
                    status: status.as_u16(),
                    body: String::from_utf8_lossy(&body).into_owned()
                })
            };
        }

        serde_json::from_slice(&body).map_err(FetchError::DecodeError)
    }
}

impl<TNext: Exchange> ExchangeFactory<TNext> for FetchExchange {
    type Output = FetchExchange;

    fn build(self, _next: TNext) -> Self::Output {
        self
    }
}

#[async_trait]
impl Exchange for FetchExchange {
    async fn run<Q: GraphQLQuery>(
        &self,
        operation: Operation<Q::Variables>
    ) -> ExchangeResult<Q::ResponseData> {
        let extra_headers = if let Some(ref extra_headers) = operation.options.extra_headers {
            extra_headers()
        } else {
            Vec::new()
        };

        tracing::debug!(
            operation = operation.query.operation_name,
            url = %operation.options.url,
            "fetching"
        );
        let mut response = self
            .fetch::<Q>(extra_headers, operation.options.url, &operation.query)
            .await?;

        if response.has_errors() {
            tracing::debug!(
                operation = operation.query.operation_name,
                errors = ?response.errors,
                "server returned errors"
            );
        }

        response.debug_info = Some(DebugInfo {
            source: ResultSource::Network
        });

        Ok(OperationResult {
            key: operation.key,
            meta: operation.meta,
            response
        })
    }
}
