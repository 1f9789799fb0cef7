//! A normalized cache exchange for `checklist-client`.
//!
//! Results are split into entities keyed by `typename:id` (or a custom key per typename) and
//! links between them, so an entity returned by a mutation updates every cached query that
//! contains it. Lists aren't updated automatically when entities are created or removed; pass a
//! [`NormalizedCacheExtension`](./struct.NormalizedCacheExtension.html) with an `update` hook to
//! rewrite them.

#[macro_use]
extern crate async_trait;

mod cache_exchange;
mod store;
mod types;

pub use cache_exchange::{NormalizedCacheExchange, NormalizedCacheImpl};
pub use store::{CacheError, QueryStore, Store};
pub use types::{NormalizedCacheExtension, NormalizedCacheOptions};
