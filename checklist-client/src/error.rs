use std::{error::Error, fmt, sync::Arc};

/// The error type passed along the exchange chain.
///
/// Any error type converts into it, and it's cheap to clone so one failure can be
/// handed to several callers.
#[derive(Clone, Debug)]
pub struct QueryError {
    inner: Arc<dyn Error + Send + Sync>
}

impl QueryError {
    pub fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.inner.source()
    }

    /// The concrete error this was created from, if it has type `E`.
    pub fn downcast_ref<E: Error + 'static>(&self) -> Option<&E> {
        self.inner.downcast_ref::<E>()
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl<T: Error + Send + Sync + 'static> From<T> for QueryError {
    fn from(e: T) -> Self {
        QueryError { inner: Arc::new(e) }
    }
}
