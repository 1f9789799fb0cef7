use crate::{
    client::ClientImpl,
    exchanges::TerminatorExchange,
    types::HeaderFn,
    Client, Exchange, ExchangeFactory, HeaderPair, RequestPolicy
};
use std::sync::Arc;
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("invalid endpoint url `{url}`: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError
    }
}

pub struct ClientBuilder<M: Exchange = TerminatorExchange> {
    exchange: M,
    url: Result<Url, BuildError>,
    extra_headers: Option<HeaderFn>,
    request_policy: RequestPolicy
}

impl ClientBuilder<TerminatorExchange> {
    /// Start building a client for `url`. An invalid url is reported by
    /// [`build`](#method.build).
    pub fn new<U: Into<String>>(url: U) -> Self {
        let url = url.into();
        let url = url
            .parse()
            .map_err(|source| BuildError::InvalidUrl { url, source });
        ClientBuilder {
            exchange: TerminatorExchange,
            url,
            extra_headers: None,
            request_policy: RequestPolicy::CacheFirst
        }
    }
}

impl<M: Exchange> ClientBuilder<M> {
    /// Add an exchange to the chain. Keep in mind that exchanges are executed bottom to top, so
    /// the first one added will be the last one executed.
    pub fn with_exchange<F>(self, exchange_factory: F) -> ClientBuilder<F::Output>
    where
        F: ExchangeFactory<M>
    {
        let exchange = exchange_factory.build(self.exchange);
        ClientBuilder {
            exchange,
            url: self.url,
            extra_headers: self.extra_headers,
            request_policy: self.request_policy
        }
    }

    /// Headers produced by `header_fn` are attached to every operation that doesn't override
    /// them.
    pub fn with_extra_headers<F: Fn() -> Vec<HeaderPair> + Send + Sync + 'static>(
        mut self,
        header_fn: F
    ) -> Self {
        self.extra_headers = Some(Arc::new(header_fn));
        self
    }

    pub fn with_request_policy(mut self, request_policy: RequestPolicy) -> Self {
        self.request_policy = request_policy;
        self
    }

    pub fn build(self) -> Result<Client<M>, BuildError> {
        let client = ClientImpl {
            url: self.url?,
            exchange: self.exchange,
            extra_headers: self.extra_headers,
            request_policy: self.request_policy
        };

        Ok(Client(Arc::new(client)))
    }
}
