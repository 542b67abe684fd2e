// Driven port - categories owned by another part of the catalog

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::CategoryId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryGateway: Send + Sync {
    /// Returns the subset of `ids` that exist.
    async fn exists_by_ids(&self, ids: &[CategoryId]) -> Result<Vec<CategoryId>>;
}
