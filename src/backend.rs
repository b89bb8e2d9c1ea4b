//! Search backend trait.

use async_trait::async_trait;

use crate::{Result, ResultItem};

/// Trait for the remote search service the controller talks to.
///
/// The production implementation is [`WikiClient`](crate::WikiClient);
/// tests substitute in-memory backends.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Performs a title search, returning at most `limit` results.
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<ResultItem>>;
}
