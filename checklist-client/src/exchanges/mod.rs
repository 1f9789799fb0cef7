use crate::{
    types::{Exchange, ExchangeResult, Operation},
    GraphQLQuery
};

#[cfg(feature = "default-exchanges")]
mod fetch;
#[cfg(test)]
pub(crate) mod test_query;

#[cfg(feature = "default-exchanges")]
pub use fetch::{FetchError, FetchExchange};

#[derive(Debug, thiserror::Error)]
enum ExchangeError {
    #[error("unexpected end of exchange chain")]
    UnexpectedEndOfChain
}

/// The terminating exchange.
/// This will always be the last exchange in the chain and will simply return an error if called.
pub struct TerminatorExchange;

#[async_trait]
impl Exchange for TerminatorExchange {
    async fn run<Q: GraphQLQuery>(
        &self,
        _operation: Operation<Q::Variables>
    ) -> ExchangeResult<Q::ResponseData> {
        Err(ExchangeError::UnexpectedEndOfChain.into())
    }
}
