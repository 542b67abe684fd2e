// Driven port - cast members owned by another part of the catalog

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::CastMemberId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CastMemberGateway: Send + Sync {
    /// Returns the subset of `ids` that exist.
    async fn exists_by_ids(&self, ids: &[CastMemberId]) -> Result<Vec<CastMemberId>>;
}
